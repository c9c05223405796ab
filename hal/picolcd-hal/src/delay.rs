//! Blocking delay abstraction
//!
//! The display controller needs fixed settle times around its hardware
//! reset and sleep-out commands; this trait supplies them.

/// Millisecond busy-wait
pub trait DelayMs {
    /// Block the calling context for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
