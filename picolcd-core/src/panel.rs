//! Panel definitions
//!
//! A panel is the fixed physical configuration behind a driver instance:
//! dimensions, pixel depth, bus speed and timeouts, and the SPI pin routing.
//! Supported panels form a closed enumeration so a driver can only be
//! constructed for hardware this crate knows about.

/// Row buffer capacity in bytes for the widest supported panel
///
/// Checked against every [`Panel`] variant by a unit test below.
pub const MAX_ROW_BYTES: usize = 960;

/// Fixed physical attributes of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Bits per pixel (16 = RGB565)
    pub bits_per_pixel: u8,
    /// SPI clock speed in Hz
    pub spi_frequency: u32,
    /// Timeout for command/argument transfers, in milliseconds
    pub command_timeout_ms: u32,
    /// Timeout for bulk pixel row transfers, in milliseconds
    ///
    /// Row transfers are back-to-back and time-critical; they get their own
    /// budget, independent of the command timeout.
    pub stream_timeout_ms: u32,
    /// SPI clock pin
    pub sck_pin: u8,
    /// SPI data-out pin
    pub mosi_pin: u8,
    /// SPI data-in pin
    pub miso_pin: u8,
}

impl PanelConfig {
    /// Bytes in one full row of pixels
    pub const fn row_bytes(&self) -> usize {
        self.width as usize * (self.bits_per_pixel as usize / 8)
    }
}

/// The panels this driver knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Panel {
    /// PicoCalc built-in 320x320 TFT (ILI9488-class controller)
    PicoCalc,
}

impl Panel {
    /// The fixed configuration for this panel
    pub const fn config(self) -> PanelConfig {
        match self {
            Panel::PicoCalc => PanelConfig {
                width: 320,
                height: 320,
                bits_per_pixel: 16,
                spi_frequency: 50_000_000,
                command_timeout_ms: 1_000,
                stream_timeout_ms: 250,
                sck_pin: 10,
                mosi_pin: 11,
                miso_pin: 12,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picocalc_config() {
        let cfg = Panel::PicoCalc.config();
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.height, 320);
        assert_eq!(cfg.bits_per_pixel, 16);
        assert_eq!(cfg.spi_frequency, 50_000_000);
        assert_eq!(cfg.row_bytes(), 640);
    }

    #[test]
    fn test_row_buffer_covers_all_panels() {
        for panel in [Panel::PicoCalc] {
            assert!(panel.config().row_bytes() <= MAX_ROW_BYTES);
        }
    }

    #[test]
    fn test_stream_timeout_shorter_than_command_timeout() {
        let cfg = Panel::PicoCalc.config();
        assert!(cfg.stream_timeout_ms < cfg.command_timeout_ms);
    }
}
