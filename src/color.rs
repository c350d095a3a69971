//! `Rgb` and `Hsv` — the transient color values the selector works with.
//!
//! Both store f64 components in the 0.0–1.0 range and are recomputed on every
//! pointer move or text commit.

use crate::math;

/// RGB color with channels in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`/`#RRGGBB` (marker optional), returning `fallback` when malformed.
    pub fn from_hex(hex: &str, fallback: Rgb) -> Self {
        math::hex_to_rgb(hex, fallback)
    }

    /// Format as uppercase hex, optionally with the leading `#`.
    pub fn to_hex(&self, include_marker: bool) -> String {
        math::rgb_to_hex(self.r, self.g, self.b, include_marker)
    }

    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Convert to 0–255 channels for painting. Out-of-range channels saturate.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// HSV color. Hue wraps modulo 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(&self) -> Rgb {
        math::hsv_to_rgb(self.h, self.s, self.v)
    }

    /// The fully saturated, full-value color of this hue.
    pub fn pure_hue(&self) -> Rgb {
        math::hsv_to_rgb(self.h, 1.0, 1.0)
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_uses_fallback() {
        let fallback = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(Rgb::from_hex("nothex", fallback), fallback);
    }

    #[test]
    fn test_to_hex_marker() {
        let c = Rgb::from_hex("3b82f6", Rgb::BLACK);
        assert_eq!(c.to_hex(true), "#3B82F6");
        assert_eq!(c.to_hex(false), "3B82F6");
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn test_pure_hue_ignores_saturation_and_value() {
        let hsv = Hsv::new(1.0 / 3.0, 0.2, 0.1);
        let pure = hsv.pure_hue();
        assert!((pure.r - 0.0).abs() < 1e-9);
        assert!((pure.g - 1.0).abs() < 1e-9);
        assert!((pure.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsv_rgb_methods_agree() {
        let rgb = Rgb::new(0.2, 0.4, 0.8);
        let back = rgb.to_hsv().to_rgb();
        assert!((back.r - rgb.r).abs() < 1e-9);
        assert!((back.g - rgb.g).abs() < 1e-9);
        assert!((back.b - rgb.b).abs() < 1e-9);
    }
}
