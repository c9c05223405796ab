//! Pixel-region geometry
//!
//! A [`Region`] is an inclusive rectangle in panel coordinates, valid by
//! construction: the only way to obtain one is to clip a requested
//! rectangle against a panel, so `x1 <= x2 < width` and `y1 <= y2 < height`
//! always hold.

/// An inclusive pixel rectangle, (x1,y1)-(x2,y2), inside a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Region {
    /// Clip a requested rectangle against a panel
    ///
    /// Returns `None` when nothing remains to draw: origin past the panel
    /// edge, or zero width/height. Coordinates are unsigned, so there is no
    /// clipping against a negative origin; only the upper bounds apply.
    pub fn clip(
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        panel_width: u16,
        panel_height: u16,
    ) -> Option<Region> {
        if x >= panel_width || y >= panel_height {
            return None;
        }
        if width == 0 || height == 0 {
            return None;
        }

        // Widen before adding so x + width - 1 cannot wrap at the u16 limit.
        let x2 = u32::min(panel_width as u32 - 1, x as u32 + width as u32 - 1) as u16;
        let y2 = u32::min(panel_height as u32 - 1, y as u32 + height as u32 - 1) as u16;

        Some(Region {
            x1: x,
            y1: y,
            x2,
            y2,
        })
    }

    /// Left column
    pub const fn x1(self) -> u16 {
        self.x1
    }

    /// Top row
    pub const fn y1(self) -> u16 {
        self.y1
    }

    /// Right column (inclusive)
    pub const fn x2(self) -> u16 {
        self.x2
    }

    /// Bottom row (inclusive)
    pub const fn y2(self) -> u16 {
        self.y2
    }

    /// Width in pixels
    pub const fn width(self) -> u16 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels
    pub const fn height(self) -> u16 {
        self.y2 - self.y1 + 1
    }

    /// Argument bytes for the column address set command
    ///
    /// Big-endian 16-bit halves: x1 high, x1 low, x2 high, x2 low.
    pub const fn column_args(self) -> [u8; 4] {
        [
            (self.x1 >> 8) as u8,
            self.x1 as u8,
            (self.x2 >> 8) as u8,
            self.x2 as u8,
        ]
    }

    /// Argument bytes for the page address set command
    pub const fn page_args(self) -> [u8; 4] {
        [
            (self.y1 >> 8) as u8,
            self.y1 as u8,
            (self.y2 >> 8) as u8,
            self.y2 as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clip_interior() {
        let r = Region::clip(20, 30, 50, 40, 320, 320).unwrap();
        assert_eq!((r.x1(), r.y1(), r.x2(), r.y2()), (20, 30, 69, 69));
        assert_eq!(r.width(), 50);
        assert_eq!(r.height(), 40);
    }

    #[test]
    fn test_clip_full_panel() {
        let r = Region::clip(0, 0, 320, 320, 320, 320).unwrap();
        assert_eq!((r.x1(), r.y1(), r.x2(), r.y2()), (0, 0, 319, 319));
    }

    #[test]
    fn test_clip_past_right_and_bottom() {
        let r = Region::clip(310, 310, 50, 50, 320, 320).unwrap();
        assert_eq!((r.x1(), r.y1(), r.x2(), r.y2()), (310, 310, 319, 319));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 10);
    }

    #[test]
    fn test_clip_off_panel() {
        assert_eq!(Region::clip(400, 0, 10, 10, 320, 320), None);
        assert_eq!(Region::clip(0, 320, 10, 10, 320, 320), None);
        assert_eq!(Region::clip(320, 320, 1, 1, 320, 320), None);
    }

    #[test]
    fn test_clip_degenerate() {
        assert_eq!(Region::clip(10, 10, 0, 5, 320, 320), None);
        assert_eq!(Region::clip(10, 10, 5, 0, 320, 320), None);
    }

    #[test]
    fn test_clip_single_pixel_corner() {
        let r = Region::clip(319, 319, 1, 1, 320, 320).unwrap();
        assert_eq!((r.x1(), r.y1(), r.x2(), r.y2()), (319, 319, 319, 319));
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 1);
    }

    #[test]
    fn test_clip_no_u16_wraparound() {
        // x + width - 1 overflows u16; the clip must still land on the edge
        let r = Region::clip(100, 100, u16::MAX, u16::MAX, 320, 320).unwrap();
        assert_eq!((r.x2(), r.y2()), (319, 319));
    }

    #[test]
    fn test_address_args() {
        let r = Region::clip(310, 310, 50, 50, 320, 320).unwrap();
        // 310 = 0x0136, 319 = 0x013F
        assert_eq!(r.column_args(), [0x01, 0x36, 0x01, 0x3F]);
        assert_eq!(r.page_args(), [0x01, 0x36, 0x01, 0x3F]);

        let r = Region::clip(0, 0, 320, 320, 320, 320).unwrap();
        assert_eq!(r.column_args(), [0x00, 0x00, 0x01, 0x3F]);
    }

    proptest! {
        #[test]
        fn prop_clip_is_inside_panel(
            x in 0u16..1000,
            y in 0u16..1000,
            w in 0u16..=u16::MAX,
            h in 0u16..=u16::MAX,
        ) {
            if let Some(r) = Region::clip(x, y, w, h, 320, 320) {
                // Never inverted, never outside the panel
                prop_assert!(r.x1() <= r.x2());
                prop_assert!(r.y1() <= r.y2());
                prop_assert!(r.x2() < 320);
                prop_assert!(r.y2() < 320);
                // Clipping never moves the origin
                prop_assert_eq!(r.x1(), x);
                prop_assert_eq!(r.y1(), y);
                // Never grows past the request
                prop_assert!(r.width() <= w);
                prop_assert!(r.height() <= h);
            } else {
                // Only off-panel or degenerate requests clip away entirely
                prop_assert!(x >= 320 || y >= 320 || w == 0 || h == 0);
            }
        }
    }
}
