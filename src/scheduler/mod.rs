//! Timer scheduler: slot pool, lifecycle, and the mainline operations.
//!
//! The `Scheduler` struct owns the fixed slot pool and the tick source.
//! Mainline code creates, arms, cancels, suspends and deletes timers here;
//! the interrupt side lives in [`dispatch`](Scheduler::dispatch).
//!
//! All shared state sits behind a `critical_section::Mutex`, so every
//! mutation runs with interrupts masked (or, on multi-core targets, under
//! whatever lock the platform's `critical-section` implementation provides).
//! The critical sections are short and nestable: a timer callback running
//! inside `dispatch` may call any of these operations re-entrantly.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::clock::TickSource;
use crate::error::TimerError;
use crate::handle::{SuspendKey, TimerHandle};

// Sub-modules
mod dispatch;
mod slot;

use slot::Pool;

/// Timer callback function, invoked from interrupt context on expiry.
///
/// Receives the opaque `context` value given to
/// [`create`](Scheduler::create). Callbacks run on the interrupt path and
/// must be short and non-blocking; a slow callback delays every other
/// interrupt-driven activity on the device. Calling back into the scheduler
/// (on any handle, including the callback's own) is allowed.
pub type TimerCallback = fn(context: usize);

/// Fixed-capacity timer scheduler.
///
/// Generic over:
/// - `T`: the [`TickSource`] providing the monotonic counter
/// - `N`: pool capacity, a compile-time constant (default 8)
///
/// The linear slot scan in `create` and `dispatch` is fine for a pool of
/// this size; rethink the layout before raising `N` past ten or so.
///
/// Construction is `const`, so firmware can keep the scheduler in a
/// `static` and share it between mainline code and the tick interrupt:
///
/// ```ignore
/// static SCHEDULER: Scheduler<SystickClock> = Scheduler::new(SystickClock);
/// ```
///
/// A fresh scheduler starts uninitialized; call [`init`](Self::init) during
/// bring-up before registering timers.
pub struct Scheduler<T: TickSource, const N: usize = 8> {
    clock: T,
    pool: Mutex<RefCell<Pool<N>>>,
}

impl<T: TickSource, const N: usize> Scheduler<T, N> {
    /// Create a new, uninitialized scheduler driven by `clock`.
    pub const fn new(clock: T) -> Self {
        Scheduler {
            clock,
            pool: Mutex::new(RefCell::new(Pool::new())),
        }
    }

    /// The tick source driving this scheduler.
    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Pool capacity (the `N` const parameter).
    pub const fn capacity(&self) -> usize {
        N
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Initialize the scheduler, clearing every slot.
    ///
    /// Idempotent: calling `init` on an already-initialized scheduler is a
    /// no-op and preserves live timers, so a doubled `init` during startup
    /// ordering cannot wipe registrations.
    pub fn init(&self) {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if pool.initialized {
                return;
            }

            pool.reset();
            pool.initialized = true;
        });
    }

    /// Deinitialize the scheduler.
    ///
    /// Only clears the initialized flag; slot contents go stale. Every
    /// subsequent operation is rejected with
    /// [`NotInitialized`](TimerError::NotInitialized) instead of touching
    /// stale state, and a later [`init`](Self::init) wipes the pool clean.
    pub fn deinit(&self) {
        critical_section::with(|cs| {
            self.pool.borrow_ref_mut(cs).initialized = false;
        });
    }

    /// True if the scheduler is currently initialized.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.pool.borrow_ref(cs).initialized)
    }

    // ========================================================================
    // Slot pool
    // ========================================================================

    /// Register a new timer, unarmed and unsuspended.
    ///
    /// Scans the pool for a free slot and claims it inside one critical
    /// section, so a `create` racing against one issued from a timer
    /// callback cannot claim the same slot. The returned handle is the only
    /// way to address the timer afterwards.
    ///
    /// # Errors
    ///
    /// - [`NotInitialized`](TimerError::NotInitialized) before `init`
    /// - [`PoolExhausted`](TimerError::PoolExhausted) when all `N` slots
    ///   hold live timers
    pub fn create(
        &self,
        callback: TimerCallback,
        context: usize,
    ) -> Result<TimerHandle, TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            pool.claim(callback, context)
                .ok_or(TimerError::PoolExhausted)
        })
    }

    /// Unregister a timer, returning its slot to the free pool.
    ///
    /// Clears only the callback (the liveness marker); the rest of the slot
    /// stays stale until the next `create` reuses it. The handle stops
    /// validating immediately.
    pub fn delete(&self, handle: TimerHandle) -> Result<(), TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for_mut(handle).ok_or(TimerError::InvalidHandle)?;
            slot.callback = None;
            Ok(())
        })
    }

    // ========================================================================
    // Arming
    // ========================================================================

    /// Arm the timer to fire once, `delay_ms` milliseconds from now.
    ///
    /// Rearming an already-armed timer replaces its deadline. The
    /// expiration, period and armed flag are written together in one
    /// critical section; dispatch can never observe a half-armed slot.
    pub fn arm_once(&self, handle: TimerHandle, delay_ms: u32) -> Result<(), TimerError> {
        let delay = self.clock.ms_to_ticks(delay_ms);
        let expiration = self.clock.now() + delay;

        self.arm(handle, expiration, 0)
    }

    /// Arm the timer to fire every `period_ms` milliseconds.
    ///
    /// The first expiry is one period from now; each firing rearms the
    /// timer at `now + period` until it is cancelled or deleted.
    pub fn arm_periodic(&self, handle: TimerHandle, period_ms: u32) -> Result<(), TimerError> {
        let period = self.clock.ms_to_ticks(period_ms);
        let expiration = self.clock.now() + period;

        self.arm(handle, expiration, period)
    }

    fn arm(&self, handle: TimerHandle, expiration: u64, period: u64) -> Result<(), TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for_mut(handle).ok_or(TimerError::InvalidHandle)?;
            slot.expiration = expiration;
            slot.period = period;
            slot.scheduled = true;
            Ok(())
        })
    }

    /// Disarm the timer without unregistering it.
    ///
    /// Returns the prior armed state, so callers can tell "cancelled a
    /// pending timer" (`true`) from "timer was already idle" (`false`).
    pub fn cancel(&self, handle: TimerHandle) -> Result<bool, TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for_mut(handle).ok_or(TimerError::InvalidHandle)?;
            let was_scheduled = slot.scheduled;
            slot.scheduled = false;
            Ok(was_scheduled)
        })
    }

    // ========================================================================
    // Suspend / Resume
    // ========================================================================

    /// Suspend the timer, returning a key capturing its prior state.
    ///
    /// A suspended timer keeps its armed state and deadline but is skipped
    /// by dispatch. Suspending an already-suspended timer still yields a
    /// usable key. Pass the key to [`resume`](Self::resume) to restore
    /// exactly the suspension state that existed before this call; see
    /// [`SuspendKey`] for the single-owner limitation.
    pub fn suspend(&self, handle: TimerHandle) -> Result<SuspendKey, TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for_mut(handle).ok_or(TimerError::InvalidHandle)?;
            let key = SuspendKey(slot.suspended);
            slot.suspended = true;
            Ok(key)
        })
    }

    /// Restore the suspension state captured by [`suspend`](Self::suspend).
    ///
    /// Writes the key's snapshot back directly; with overlapping suspenders
    /// on one timer, the last `resume` wins.
    pub fn resume(&self, handle: TimerHandle, key: SuspendKey) -> Result<(), TimerError> {
        critical_section::with(|cs| {
            let mut pool = self.pool.borrow_ref_mut(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for_mut(handle).ok_or(TimerError::InvalidHandle)?;
            slot.suspended = key.0;
            Ok(())
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of live (registered) timers.
    pub fn live_count(&self) -> usize {
        critical_section::with(|cs| {
            let pool = self.pool.borrow_ref(cs);

            if !pool.initialized {
                return 0;
            }

            pool.slots.iter().filter(|slot| slot.is_live()).count()
        })
    }

    /// Snapshot of the handles of all live timers, in slot order.
    ///
    /// Diagnostic aid for test shells and assertions; the snapshot is
    /// stale the moment the critical section ends.
    pub fn live_handles(&self) -> heapless::Vec<TimerHandle, N> {
        critical_section::with(|cs| {
            let pool = self.pool.borrow_ref(cs);
            let mut handles = heapless::Vec::new();

            if !pool.initialized {
                return handles;
            }

            for (index, slot) in pool.slots.iter().enumerate() {
                if slot.is_live() {
                    // Capacity is N; push cannot fail
                    let _ = handles.push(TimerHandle {
                        index,
                        generation: slot.generation,
                    });
                }
            }

            handles
        })
    }

    /// True if the timer is currently armed.
    pub fn is_scheduled(&self, handle: TimerHandle) -> Result<bool, TimerError> {
        self.query(handle, |slot| slot.scheduled)
    }

    /// True if the timer is currently suspended.
    pub fn is_suspended(&self, handle: TimerHandle) -> Result<bool, TimerError> {
        self.query(handle, |slot| slot.suspended)
    }

    fn query(
        &self,
        handle: TimerHandle,
        read: impl FnOnce(&slot::Slot) -> bool,
    ) -> Result<bool, TimerError> {
        critical_section::with(|cs| {
            let pool = self.pool.borrow_ref(cs);

            if !pool.initialized {
                return Err(TimerError::NotInitialized);
            }

            let slot = pool.slot_for(handle).ok_or(TimerError::InvalidHandle)?;
            Ok(read(slot))
        })
    }
}

impl<T: TickSource, const N: usize> fmt::Debug for Scheduler<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("capacity", &N)
            .finish_non_exhaustive()
    }
}
