//! Per-instance selector model.
//!
//! Holds the current color in both RGB and HSV. Text commits update RGB and
//! derive HSV; drags update HSV and derive RGB. Every transition yields a
//! [`Frame`] describing what to repaint.

use floem::kurbo::Point;

use crate::color::{Hsv, Rgb};
use crate::constants::{CROSSHAIR_INSET, HUE_MARKER_INSET, TRACK_EXTENT};

/// Everything the views need for one repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Canonical `#RRGGBB` written back into the bound text.
    pub hex: String,
    pub preview: Rgb,
    /// Background of the saturation/value square: the pure hue.
    pub square_background: Rgb,
    /// Top-left of the crosshair marker inside the square.
    pub crosshair: Point,
    /// Top of the hue marker inside the hue bar.
    pub hue_marker_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSelector {
    rgb: Rgb,
    hsv: Hsv,
}

impl ColorSelector {
    /// Build from the bound text's current value; malformed text gives black.
    pub fn new(initial_text: &str) -> Self {
        let mut selector = Self {
            rgb: Rgb::BLACK,
            hsv: Hsv::default(),
        };
        selector.input_changed(initial_text);
        selector
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hex(&self) -> String {
        self.rgb.to_hex(true)
    }

    /// The bound text was committed.
    pub fn input_changed(&mut self, text: &str) -> Frame {
        self.rgb = Rgb::from_hex(text, Rgb::BLACK);
        self.hsv = self.rgb.to_hsv();
        self.frame()
    }

    /// Drag on the square: x is value, y is inverted saturation.
    pub fn sat_val_dragged(&mut self, x: f64, y: f64) -> Frame {
        self.hsv.s = 1.0 - y / TRACK_EXTENT;
        self.hsv.v = x / TRACK_EXTENT;
        self.hsv_changed()
    }

    /// Drag on the hue bar: y is hue.
    pub fn hue_dragged(&mut self, _x: f64, y: f64) -> Frame {
        self.hsv.h = y / TRACK_EXTENT;
        self.hsv_changed()
    }

    fn hsv_changed(&mut self) -> Frame {
        self.rgb = self.hsv.to_rgb();
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            hex: self.hex(),
            preview: self.rgb,
            square_background: self.hsv.pure_hue(),
            crosshair: Point::new(
                self.hsv.v * TRACK_EXTENT - CROSSHAIR_INSET,
                (1.0 - self.hsv.s) * TRACK_EXTENT - CROSSHAIR_INSET,
            ),
            hue_marker_top: self.hsv.h * TRACK_EXTENT - HUE_MARKER_INSET,
        }
    }
}
