//! Tick source abstraction for platform-agnostic timekeeping.
//!
//! The `TickSource` trait decouples the scheduler from the hardware counter
//! that drives it (SysTick, a free-running timer peripheral, a cycle
//! counter, ...). The scheduler only ever asks for the current counter value
//! and for wall-time-to-counter-unit conversion.

/// Platform-agnostic monotonic tick source.
///
/// Implementations must be callable from both mainline and interrupt
/// context, which is why all methods take `&self`. The counter is assumed
/// monotonic and wrap-free within the device's operating lifetime; the
/// scheduler does no wraparound handling.
pub trait TickSource {
    /// Current counter value, in counter units.
    fn now(&self) -> u64;

    /// Convert a microsecond duration to counter units.
    fn us_to_ticks(&self, us: u64) -> u64;

    /// Convert a millisecond duration to counter units.
    ///
    /// Default implementation goes through [`us_to_ticks`](Self::us_to_ticks).
    /// Override if the platform has a cheaper direct conversion.
    fn ms_to_ticks(&self, ms: u32) -> u64 {
        self.us_to_ticks(ms as u64 * 1000)
    }
}
