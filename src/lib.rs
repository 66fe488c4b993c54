//! # tick-pool
//!
//! Fixed-capacity software timer pool for interrupt-driven embedded systems.
//!
//! **Key features:**
//! - **Static allocation** - A bounded slot pool, zero heap usage
//! - **Const construction** - Schedulers can live in a `static`
//! - **Interrupt-safe** - All shared state guarded by `critical-section`
//! - **Versioned handles** - Stale handles are rejected, never misdirected
//! - **Pluggable clock** - Any monotonic counter via the `TickSource` trait
//!
//! The scheduler owns a fixed array of timer slots. Mainline code creates,
//! arms, cancels, suspends and deletes timers; the tick interrupt calls
//! [`Scheduler::dispatch`] with the current counter value, which fires every
//! due timer's callback synchronously on the interrupt path. One-shot timers
//! disarm after firing; periodic timers rearm themselves.
//!
//! Callbacks run in interrupt context and must be short and non-blocking.
//! They may call back into any scheduler operation, including on their own
//! handle.
//!
//! ## Optional Features
//!
//! - `defmt` - `defmt::Format` derives on the public types
//!
//! This library is `no_std` compatible. Host-side tests need a
//! `critical-section` implementation (e.g. the crate's `std` feature).
//!
//! ## Example
//!
//! ```
//! use tick_pool::{Scheduler, TickSource};
//!
//! struct FakeClock;
//!
//! impl TickSource for FakeClock {
//!     fn now(&self) -> u64 { 0 }
//!     fn us_to_ticks(&self, us: u64) -> u64 { us }
//! }
//!
//! fn beep(_context: usize) { /* runs on the interrupt path */ }
//!
//! let scheduler: Scheduler<FakeClock, 8> = Scheduler::new(FakeClock);
//! scheduler.init();
//!
//! let handle = scheduler.create(beep, 0).unwrap();
//! scheduler.arm_periodic(handle, 5).unwrap();
//!
//! // Normally called from the tick interrupt:
//! scheduler.dispatch(scheduler.clock().now());
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

// Tick source abstraction
pub mod clock;

// Error handling
pub mod error;

// Handle and suspend-key value types
pub mod handle;

// Slot pool and scheduler
pub mod scheduler;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Clock seam
pub use clock::TickSource;

// Error types
pub use error::TimerError;

// Handle types
pub use handle::{SuspendKey, TimerHandle};

// Scheduler
pub use scheduler::{Scheduler, TimerCallback};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
