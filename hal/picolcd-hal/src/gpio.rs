//! GPIO pin abstractions
//!
//! Provides a trait for the digital output lines the display driver owns:
//! chip-select, command/data-select and reset.

/// Digital output pin
///
/// Implementations handle the actual hardware register manipulation for the
/// specific chip. Pins start in an unspecified mode; callers put them into
/// output mode with [`OutputPin::set_mode_output`] before driving them.
pub trait OutputPin {
    /// Configure the pin as a digital output
    fn set_mode_output(&mut self);

    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
