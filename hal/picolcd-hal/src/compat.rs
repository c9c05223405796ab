//! Adapters over `embedded-hal` 1.0 types
//!
//! Lets a board crate hand the driver pins and delay sources it already has
//! as `embedded-hal` implementations.

use crate::delay::DelayMs;
use crate::gpio::OutputPin;

/// Wraps an `embedded_hal::digital::OutputPin` as a [`OutputPin`]
///
/// The wrapped pin must already be configured as an output; mode switching
/// is a no-op here because `embedded-hal` pins encode the mode in the type.
/// The driven level is mirrored locally so `is_set_high` works without the
/// `StatefulOutputPin` bound.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutputPin<P> {
    /// Wrap a pin, recording its current driven level
    pub fn new(pin: P, initially_high: bool) -> Self {
        Self {
            pin,
            high: initially_high,
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutputPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
{
    fn set_mode_output(&mut self) {}

    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Wraps an `embedded_hal::delay::DelayNs` as a [`DelayMs`]
pub struct EhDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> DelayMs for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
