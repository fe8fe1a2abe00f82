//! RGB565 color type and conversions
//!
//! This module defines the [`Color`] type used for all drawing
//! operations. The ST7735 is driven in 16-bit mode, so every pixel is
//! one RGB565 value, transmitted big-endian.
//!
//! ## Color Representation
//!
//! | Bits  | Channel | Width |
//! |-------|---------|-------|
//! | 15-11 | Red     | 5     |
//! | 10-5  | Green   | 6     |
//! | 4-0   | Blue    | 5     |
//!
//! ## Example
//!
//! ```
//! use st7735::Color;
//!
//! // Named constants
//! assert_eq!(Color::RED.raw(), 0xF800);
//! assert_eq!(Color::GREEN.raw(), 0x07E0);
//!
//! // Packed from 8-bit channels
//! assert_eq!(Color::rgb(255, 0, 0), Color::RED);
//!
//! // Wire encoding is big-endian
//! assert_eq!(Color::BLUE.to_be_bytes(), [0x00, 0x1F]);
//! ```

/// A 16-bit RGB565 color value
///
/// Stored in its packed form; use [`Color::rgb`] or [`Color::from_hsv`]
/// to construct from channel values, or [`Color::new`] for a raw
/// RGB565 word.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);

    /// Create a color from a raw RGB565 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit RGB channels into RGB565
    ///
    /// The low bits of each channel are dropped (3 for red and blue,
    /// 2 for green).
    ///
    /// ## Example
    ///
    /// ```
    /// use st7735::Color;
    ///
    /// assert_eq!(Color::rgb(255, 255, 255), Color::WHITE);
    /// assert_eq!(Color::rgb(0, 0, 255), Color::BLUE);
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Convert an HSV triple to RGB565
    ///
    /// Hue is in degrees and wraps into `[0, 360)`; saturation and
    /// value are in `[0, 1]`.
    ///
    /// ## Example
    ///
    /// ```
    /// use st7735::Color;
    ///
    /// assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::RED);
    /// assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::GREEN);
    /// assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::BLUE);
    /// ```
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h % 360.0;
        let h = if h < 0.0 { h + 360.0 } else { h };

        let c = v * s;
        let t = (h / 60.0) % 2.0 - 1.0;
        let t = if t < 0.0 { -t } else { t };
        let x = c * (1.0 - t);
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::rgb(
            ((r + m) * 255.0) as u8,
            ((g + m) * 255.0) as u8,
            ((b + m) * 255.0) as u8,
        )
    }

    /// Get the raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the big-endian wire encoding
    ///
    /// This is the byte order the controller expects in 16-bit mode.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        use embedded_graphics_core::prelude::RawData;

        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_primary_encodings() {
        assert_eq!(Color::rgb(255, 0, 0).raw(), 0xF800);
        assert_eq!(Color::rgb(0, 255, 0).raw(), 0x07E0);
        assert_eq!(Color::rgb(0, 0, 255).raw(), 0x001F);
        assert_eq!(Color::rgb(0, 0, 0).raw(), 0x0000);
        assert_eq!(Color::rgb(255, 255, 255).raw(), 0xFFFF);
    }

    #[test]
    fn test_rgb_drops_low_bits() {
        // 0b0000_0111 red lands entirely in the dropped bits
        assert_eq!(Color::rgb(0x07, 0x03, 0x07).raw(), 0x0000);
        assert_eq!(Color::rgb(0x08, 0x04, 0x08), Color::rgb(0x0F, 0x07, 0x0F));
    }

    #[test]
    fn test_named_constants_match_reference_values() {
        assert_eq!(Color::BLACK.raw(), 0x0000);
        assert_eq!(Color::BLUE.raw(), 0x001F);
        assert_eq!(Color::RED.raw(), 0xF800);
        assert_eq!(Color::GREEN.raw(), 0x07E0);
        assert_eq!(Color::CYAN.raw(), 0x07FF);
        assert_eq!(Color::MAGENTA.raw(), 0xF81F);
        assert_eq!(Color::YELLOW.raw(), 0xFFE0);
        assert_eq!(Color::WHITE.raw(), 0xFFFF);
    }

    #[test]
    fn test_to_be_bytes_is_big_endian() {
        assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(Color::GREEN.to_be_bytes(), [0x07, 0xE0]);
        assert_eq!(Color::new(0x1234).to_be_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn test_from_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::RED);
        assert_eq!(Color::from_hsv(60.0, 1.0, 1.0), Color::YELLOW);
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::GREEN);
        assert_eq!(Color::from_hsv(180.0, 1.0, 1.0), Color::CYAN);
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::BLUE);
        assert_eq!(Color::from_hsv(300.0, 1.0, 1.0), Color::MAGENTA);
    }

    #[test]
    fn test_from_hsv_zero_saturation_is_grayscale() {
        assert_eq!(Color::from_hsv(137.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::from_hsv(137.0, 0.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_from_hsv_hue_wraps() {
        assert_eq!(
            Color::from_hsv(360.0, 1.0, 1.0),
            Color::from_hsv(0.0, 1.0, 1.0)
        );
        assert_eq!(
            Color::from_hsv(-120.0, 1.0, 1.0),
            Color::from_hsv(240.0, 1.0, 1.0)
        );
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_from_rgb565_pixel_color() {
        use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};

        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Color::from(Rgb565::GREEN), Color::GREEN);
        assert_eq!(Color::from(Rgb565::BLUE), Color::BLUE);
    }
}
