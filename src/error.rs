//! Error types for timer operations.
//!
//! The `TimerError` enum represents all failure conditions the scheduler can
//! report. The interrupt-side dispatch path never fails and never allocates,
//! so errors only surface on the mainline API.

use core::fmt;

/// Timer operation error type.
///
/// Returned by every fallible scheduler operation. Note that a handle whose
/// slot has been deleted (or deleted and reused by a newer timer) reports
/// `InvalidHandle` thanks to the per-slot generation counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Scheduler has not been initialized, or has been deinitialized
    NotInitialized,

    /// Every slot in the pool is occupied by a live timer
    PoolExhausted,

    /// Handle is out of range, stale, or refers to a deleted timer
    InvalidHandle,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::NotInitialized => write!(f, "Scheduler not initialized"),
            TimerError::PoolExhausted => write!(f, "Timer pool exhausted"),
            TimerError::InvalidHandle => write!(f, "Invalid timer handle"),
        }
    }
}
