//! Monotonic time source

/// Monotonic microsecond clock
pub trait Clock {
    /// Microseconds since boot
    fn now_us(&self) -> u64;
}
