//! Handle and suspend-key value types.
//!
//! Handles are small `Copy` values identifying one slot in the pool. Each
//! handle carries the generation the slot had when the timer was created,
//! so a handle outlives its timer gracefully: once the timer is deleted
//! (and even if the slot is reused by a newer timer) the stale handle is
//! rejected with `InvalidHandle` instead of acting on the wrong timer.

/// Opaque handle identifying one registered timer.
///
/// Produced by [`Scheduler::create`](crate::Scheduler::create) and passed
/// back into every other timer operation. Handles are plain values: copying
/// one does not extend the timer's lifetime, and a handle held across
/// `delete` simply stops validating.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl TimerHandle {
    /// Slot index inside the pool.
    ///
    /// Exposed for diagnostics only; the index alone does not validate a
    /// handle.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Slot generation captured at creation time.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Snapshot of a timer's suspension state, captured by `suspend`.
///
/// Passing the key back to [`Scheduler::resume`](crate::Scheduler::resume)
/// restores exactly the suspension state that existed before the matching
/// `suspend` call. This supports bounded, single-owner nesting ("stop
/// polling while in this function, then restore"). It is **not** a nesting
/// counter: two independent suspenders racing on the same timer can clobber
/// each other's restoration, and the last `resume` wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SuspendKey(pub(crate) bool);

impl SuspendKey {
    /// True if the timer was already suspended when the key was captured.
    #[must_use]
    pub const fn was_suspended(&self) -> bool {
        self.0
    }
}
