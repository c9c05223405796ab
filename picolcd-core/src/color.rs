//! RGB565 colors
//!
//! The panel runs in 16 bit-per-pixel mode: 5 bits red, 6 bits green,
//! 5 bits blue, no alpha. Pixel data goes on the wire high byte first.

/// A 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const RED: Rgb565 = Rgb565(0b1111100000000000);
    pub const GREEN: Rgb565 = Rgb565(0b0000011111100000);
    pub const BLUE: Rgb565 = Rgb565(0b0000000000011111);
    pub const YELLOW: Rgb565 = Rgb565(0b1111111111100000);
    pub const CYAN: Rgb565 = Rgb565(0b0000011111111111);
    pub const MAGENTA: Rgb565 = Rgb565(0b1111100000011111);
    pub const GRAY: Rgb565 = Rgb565(0b1000010000010000);

    /// Create a color from its raw 16-bit value
    pub const fn new(raw: u16) -> Self {
        Rgb565(raw)
    }

    /// The raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire representation: high byte, then low byte
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_bit_patterns() {
        assert_eq!(Rgb565::WHITE.raw(), 0xFFFF);
        assert_eq!(Rgb565::BLACK.raw(), 0x0000);
        assert_eq!(Rgb565::RED.raw(), 0xF800);
        assert_eq!(Rgb565::GREEN.raw(), 0x07E0);
        assert_eq!(Rgb565::BLUE.raw(), 0x001F);
        assert_eq!(Rgb565::YELLOW.raw(), 0xFFE0);
        assert_eq!(Rgb565::CYAN.raw(), 0x07FF);
        assert_eq!(Rgb565::MAGENTA.raw(), 0xF81F);
        assert_eq!(Rgb565::GRAY.raw(), 0x8410);
    }

    #[test]
    fn test_wire_byte_order() {
        // High byte travels first
        assert_eq!(Rgb565::CYAN.to_be_bytes(), [0x07, 0xFF]);
        assert_eq!(Rgb565::RED.to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(Rgb565::new(0x1234).to_be_bytes(), [0x12, 0x34]);
    }
}
