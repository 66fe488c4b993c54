//! Shared test fixtures: a controllable mock clock and callback plumbing.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tick_pool::TickSource;

/// Mock tick source with a settable counter.
///
/// Runs at 1 counter unit per microsecond, so `ms_to_ticks(1) == 1000`.
/// `new` is const so tests can keep a scheduler in a `static`, the same
/// way firmware does.
#[derive(Debug)]
pub struct MockClock {
    now: AtomicU64,
}

impl MockClock {
    pub const fn new() -> Self {
        MockClock {
            now: AtomicU64::new(0),
        }
    }

    /// Move the counter to an absolute value.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advance the counter, returning the new value.
    pub fn advance(&self, ticks: u64) -> u64 {
        self.now.fetch_add(ticks, Ordering::SeqCst) + ticks
    }
}

impl TickSource for MockClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    fn us_to_ticks(&self, us: u64) -> u64 {
        us
    }
}

/// One millisecond in MockClock counter units.
pub const MS: u64 = 1000;

/// Allocate a fresh fire counter for one test.
///
/// Leaked so that its address can travel through the scheduler as the
/// opaque context value; tests are short-lived processes.
pub fn fire_counter() -> &'static AtomicUsize {
    Box::leak(Box::new(AtomicUsize::new(0)))
}

/// Pack a fire counter into a context value for [`count_fires`].
pub fn counter_context(counter: &'static AtomicUsize) -> usize {
    counter as *const AtomicUsize as usize
}

/// Callback that increments the counter its context points at.
pub fn count_fires(context: usize) {
    let counter = unsafe { &*(context as *const AtomicUsize) };
    counter.fetch_add(1, Ordering::SeqCst);
}

/// Callback that does nothing, for tests that only exercise slot state.
pub fn noop(_context: usize) {}
