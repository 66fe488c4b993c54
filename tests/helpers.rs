//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use fixtures::MockClock;
use tick_pool::Scheduler;

// ============================================================================
// Scheduler Creation Helpers
// ============================================================================

/// Create an initialized 8-slot scheduler on a mock clock at counter 0.
pub fn create_test_scheduler() -> Scheduler<MockClock, 8> {
    let scheduler = Scheduler::new(MockClock::new());
    scheduler.init();
    scheduler
}

// ============================================================================
// Dispatch Helpers
// ============================================================================

/// Move the mock clock to `now` and run one dispatch pass at that instant,
/// the way the tick interrupt would.
pub fn dispatch_at(scheduler: &Scheduler<MockClock, 8>, now: u64) {
    scheduler.clock().set(now);
    scheduler.dispatch(now);
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert a fire counter's value with a readable failure message.
pub fn assert_fired(counter: &AtomicUsize, expected: usize, when: &str) {
    let actual = counter.load(Ordering::SeqCst);
    assert_eq!(
        actual, expected,
        "expected {} firing(s) {}, observed {}",
        expected, when, actual
    );
}
