//! Interrupt-context dispatch pass.
//!
//! `dispatch` is what the tick interrupt calls; everything else in the
//! scheduler is mainline API. The pass scans the pool in slot order and
//! fires every due timer. Each slot's state is read and updated inside a
//! short critical section that is released *before* the callback runs, so
//! callbacks can re-enter any scheduler operation without deadlocking or
//! tripping the pool's `RefCell`.

use crate::clock::TickSource;
use crate::scheduler::Scheduler;

impl<T: TickSource, const N: usize> Scheduler<T, N> {
    /// Fire every due timer. Call once per tick interrupt, passing the
    /// current counter value.
    ///
    /// For each slot in array order: skipped unless live, not suspended,
    /// armed, and `now >= expiration`. Periodic timers rearm at
    /// `now + period` and stay armed; one-shots disarm. The callback then
    /// runs synchronously, before the next slot is examined. Slot order is
    /// the only ordering guarantee among simultaneously due timers.
    ///
    /// Never fails: an uninitialized scheduler silently skips the pass.
    /// The interrupt holds for as long as the slowest due callback runs,
    /// so callbacks must stay short.
    pub fn dispatch(&self, now: u64) {
        if !self.is_initialized() {
            return;
        }

        // Linear scan; good enough for a pool of ~10 slots
        for index in 0..N {
            let due = critical_section::with(|cs| {
                let mut pool = self.pool.borrow_ref_mut(cs);

                // A callback earlier in the pass may have deinitialized us
                if !pool.initialized {
                    return None;
                }

                let slot = &mut pool.slots[index];

                if !slot.is_live() || slot.suspended || !slot.scheduled {
                    return None;
                }

                if now < slot.expiration {
                    return None;
                }

                if slot.period > 0 {
                    // Reschedule periodic timer
                    slot.expiration = now + slot.period;
                } else {
                    // Stop one-shot timer
                    slot.scheduled = false;
                }

                slot.callback.map(|callback| (callback, slot.context))
            });

            // Critical section released; the callback may re-enter
            if let Some((callback, context)) = due {
                callback(context);
            }
        }
    }
}
