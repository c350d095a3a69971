//! Color math — direct conversions without external dependencies.
//! All channels are normalized f64 in 0.0–1.0.
//!
//! None of these functions validate their input. Out-of-range values produce
//! unspecified colors but never panic.

use crate::color::{Hsv, Rgb};

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
///
/// Shorthand digits are duplicated (`F` → `FF`). Any other length, or any
/// non-hex character, returns `fallback` unchanged.
pub fn hex_to_rgb(hex: &str, fallback: Rgb) -> Rgb {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return fallback;
    }
    let channels = match stripped.len() {
        3 => {
            let mut bytes = stripped.bytes().map(|c| hex_digit(c) * 17);
            (bytes.next(), bytes.next(), bytes.next())
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).ok();
            (byte(0), byte(2), byte(4))
        }
        _ => return fallback,
    };
    match channels {
        (Some(r), Some(g), Some(b)) => Rgb::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ),
        _ => fallback,
    }
}

fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// Format channels as uppercase hex, `#RRGGBB` or `RRGGBB`.
///
/// Channels are scaled by 255 and rounded, without clamping.
pub fn rgb_to_hex(r: f64, g: f64, b: f64, include_marker: bool) -> String {
    let marker = if include_marker { "#" } else { "" };
    format!(
        "{}{:02X}{:02X}{:02X}",
        marker,
        scale_channel(r),
        scale_channel(g),
        scale_channel(b)
    )
}

// Negative inputs saturate at 0 through the float cast.
fn scale_channel(c: f64) -> u32 {
    (c * 255.0).round() as u32
}

/// HSV → RGB. Black whenever `v` is zero.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    if v == 0.0 {
        return Rgb::BLACK;
    }
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    // A hue of exactly 1.0 lands in sector 6, which is sector 0 again.
    let (r, g, b) = match (i as i64).rem_euclid(6) {
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => (v, t, p),
    };
    Rgb::new(r, g, b)
}

/// RGB → HSV. Achromatic colors get hue and saturation 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return Hsv::new(0.0, 0.0, max);
    }
    let delta = max - min;
    let s = delta / max;
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }
    Hsv::new(h, s, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_rgb(c: Rgb, r: f64, g: f64, b: f64) {
        assert!((c.r - r).abs() < EPS, "r: {} != {}", c.r, r);
        assert!((c.g - g).abs() < EPS, "g: {} != {}", c.g, g);
        assert!((c.b - b).abs() < EPS, "b: {} != {}", c.b, b);
    }

    #[test]
    fn test_short_and_long_hex_agree() {
        let short = hex_to_rgb("#FFF", Rgb::BLACK);
        let long = hex_to_rgb("#FFFFFF", Rgb::BLACK);
        assert_eq!(short, long);
        assert_rgb(short, 1.0, 1.0, 1.0);
    }

    #[test]
    fn test_hex_without_marker() {
        assert_rgb(hex_to_rgb("ff0000", Rgb::BLACK), 1.0, 0.0, 0.0);
        assert_rgb(hex_to_rgb("0a0", Rgb::BLACK), 0.0, 170.0 / 255.0, 0.0);
    }

    #[test]
    fn test_malformed_hex_returns_fallback() {
        let fallback = Rgb::new(0.25, 0.5, 0.75);
        assert_eq!(hex_to_rgb("zzz", fallback), fallback);
        assert_eq!(hex_to_rgb("#12345", fallback), fallback);
        assert_eq!(hex_to_rgb("", fallback), fallback);
        assert_eq!(hex_to_rgb("#12345G", fallback), fallback);
        assert_eq!(hex_to_rgb("##FFF", fallback), fallback);
        assert_eq!(hex_to_rgb("+1+2+3", fallback), fallback);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.0, true), "#FF0000");
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.0, false), "FF0000");
        assert_eq!(rgb_to_hex(0.0, 10.0 / 255.0, 1.0, true), "#000AFF");
    }

    #[test]
    fn test_hex_roundtrip_within_rounding() {
        for i in 0..=20 {
            let r = f64::from(i) / 20.0;
            let g = 1.0 - r;
            let b = (r * 3.7) % 1.0;
            let back = hex_to_rgb(&rgb_to_hex(r, g, b, true), Rgb::BLACK);
            assert!((back.r - r).abs() <= 0.5 / 255.0 + EPS);
            assert!((back.g - g).abs() <= 0.5 / 255.0 + EPS);
            assert!((back.b - b).abs() <= 0.5 / 255.0 + EPS);
        }
    }

    #[test]
    fn test_six_digit_hex_roundtrips_exactly() {
        for hex in ["#000000", "#FFFFFF", "#3B82F6", "#0A0B0C", "#FF00FF"] {
            let rgb = hex_to_rgb(hex, Rgb::BLACK);
            assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b, true), hex);
        }
    }

    #[test]
    fn test_hsv_sectors() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), 1.0, 0.0, 0.0);
        assert_rgb(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), 1.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(2.0 / 6.0, 1.0, 1.0), 0.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(3.0 / 6.0, 1.0, 1.0), 0.0, 1.0, 1.0);
        assert_rgb(hsv_to_rgb(4.0 / 6.0, 1.0, 1.0), 0.0, 0.0, 1.0);
        assert_rgb(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), 1.0, 0.0, 1.0);
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        assert_rgb(hsv_to_rgb(1.0, 1.0, 1.0), 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(0.4, 0.8, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_out_of_range_hue_does_not_panic() {
        let _ = hsv_to_rgb(-0.3, 1.0, 1.0);
        let _ = hsv_to_rgb(7.25, 2.0, 1.5);
        let _ = rgb_to_hex(-1.0, 2.0, 0.5, true);
    }

    #[test]
    fn test_achromatic_hsv() {
        let hsv = rgb_to_hsv(0.5, 0.5, 0.5);
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_hsv_roundtrip() {
        for hi in 0..12 {
            for si in 1..=4 {
                for vi in 1..=4 {
                    let h = f64::from(hi) / 12.0;
                    let s = f64::from(si) / 4.0;
                    let v = f64::from(vi) / 4.0;
                    let rgb = hsv_to_rgb(h, s, v);
                    let back = rgb_to_hsv(rgb.r, rgb.g, rgb.b);
                    assert!((back.h - h).abs() < 1e-9, "h {} -> {}", h, back.h);
                    assert!((back.s - s).abs() < 1e-9);
                    assert!((back.v - v).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_magenta_hue_wraps_into_unit_range() {
        let hsv = rgb_to_hsv(1.0, 0.0, 0.5);
        assert!(hsv.h >= 0.0 && hsv.h < 1.0);
        assert!((hsv.h - 11.0 / 12.0).abs() < EPS);
    }
}
