//! Slot pool internals.
//!
//! A `Pool` is the complete shared state of one scheduler: the `initialized`
//! flag plus a fixed array of slots. It knows nothing about interrupts or
//! critical sections; the scheduler wraps it in a `critical_section::Mutex`
//! and every access goes through that.

use crate::handle::TimerHandle;
use crate::scheduler::TimerCallback;

/// One timer slot.
///
/// A slot is live iff `callback` is set; liveness alone governs pool reuse.
/// `scheduled`, `expiration` and `period` are meaningful only while the slot
/// is live, and `expiration` only while `scheduled` is set. `delete` leaves
/// them stale on purpose: `claim` resets everything a fresh timer needs.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Slot {
    /// Liveness marker and the function fired on expiry
    pub(crate) callback: Option<TimerCallback>,
    /// Opaque caller-owned value passed to the callback
    pub(crate) context: usize,
    /// Skipped by dispatch while set, even if armed and due
    pub(crate) suspended: bool,
    /// Armed flag; `expiration` is valid while set
    pub(crate) scheduled: bool,
    /// Absolute counter value at or after which the timer is due
    pub(crate) expiration: u64,
    /// Rearm interval in counter units; 0 means one-shot
    pub(crate) period: u64,
    /// Bumped on every claim; handles capture it at creation
    pub(crate) generation: u32,
}

impl Slot {
    pub(crate) const FREE: Slot = Slot {
        callback: None,
        context: 0,
        suspended: false,
        scheduled: false,
        expiration: 0,
        period: 0,
        generation: 0,
    };

    pub(crate) const fn is_live(&self) -> bool {
        self.callback.is_some()
    }
}

/// Scheduler shared state: `initialized` flag plus the slot array.
#[derive(Debug)]
pub(crate) struct Pool<const N: usize> {
    pub(crate) initialized: bool,
    pub(crate) slots: [Slot; N],
}

impl<const N: usize> Pool<N> {
    pub(crate) const fn new() -> Self {
        Pool {
            initialized: false,
            slots: [Slot::FREE; N],
        }
    }

    /// Wipe every slot back to the free state.
    ///
    /// Generation counters survive the wipe; a handle from a previous
    /// init/deinit lifecycle must never validate against a recycled slot.
    pub(crate) fn reset(&mut self) {
        for slot in &mut self.slots {
            let generation = slot.generation;
            *slot = Slot::FREE;
            slot.generation = generation;
        }
    }

    /// Claim the first free slot for a new timer.
    ///
    /// Resets `scheduled`/`suspended`, bumps the generation, and stores the
    /// callback last so the slot only reads as live once fully set up.
    /// Returns `None` when every slot is occupied.
    pub(crate) fn claim(&mut self, callback: TimerCallback, context: usize) -> Option<TimerHandle> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_live() {
                continue;
            }

            slot.generation = slot.generation.wrapping_add(1);
            slot.scheduled = false;
            slot.suspended = false;
            slot.context = context;
            slot.callback = Some(callback);

            return Some(TimerHandle {
                index,
                generation: slot.generation,
            });
        }

        None
    }

    /// Resolve a handle to its slot, or `None` if the handle is out of
    /// range, the slot is free, or the generation does not match.
    pub(crate) fn slot_for_mut(&mut self, handle: TimerHandle) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(handle.index)?;

        if !slot.is_live() || slot.generation != handle.generation {
            return None;
        }

        Some(slot)
    }

    /// Shared-reference variant of [`slot_for_mut`](Self::slot_for_mut).
    pub(crate) fn slot_for(&self, handle: TimerHandle) -> Option<&Slot> {
        let slot = self.slots.get(handle.index)?;

        if !slot.is_live() || slot.generation != handle.generation {
            return None;
        }

        Some(slot)
    }
}
