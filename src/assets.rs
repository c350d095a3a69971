//! Track images: loaded from the configured assets directory, or rasterized.
//!
//! Each image has fixed design dimensions that define the track geometry.
//! A missing, undecodable or wrongly sized file is logged and replaced by a
//! rasterized equivalent, so a selector always has something to draw.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use floem::peniko::{self, Blob};
use thiserror::Error;

use crate::config::PickerConfig;
use crate::constants::{CROSSHAIR_SIZE, HUE_BAR_WIDTH, HUE_MARKER_HEIGHT, SQUARE_SIZE};
use crate::math;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{path} is {actual:?}, expected {expected:?}")]
    Dimensions {
        path: PathBuf,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

pub type AssetResult<T> = Result<T, AssetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Vertical hue gradient.
    HueBar,
    /// Saturation/value overlay painted over the pure hue.
    SatVal,
    /// Crosshair marker on the square.
    Crosshairs,
    /// Position marker on the hue bar.
    HuePosition,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::HueBar,
        AssetKind::SatVal,
        AssetKind::Crosshairs,
        AssetKind::HuePosition,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::HueBar => "h.png",
            AssetKind::SatVal => "sv.png",
            AssetKind::Crosshairs => "crosshairs.png",
            AssetKind::HuePosition => "position.png",
        }
    }

    /// Design size in pixels, `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        let px = |v: f64| v as u32;
        match self {
            AssetKind::HueBar => (px(HUE_BAR_WIDTH), px(SQUARE_SIZE)),
            AssetKind::SatVal => (px(SQUARE_SIZE), px(SQUARE_SIZE)),
            AssetKind::Crosshairs => (px(CROSSHAIR_SIZE), px(CROSSHAIR_SIZE)),
            AssetKind::HuePosition => (px(HUE_BAR_WIDTH), px(HUE_MARKER_HEIGHT)),
        }
    }

    fn rasterize(self) -> Vec<u8> {
        let (w, h) = self.dimensions();
        match self {
            AssetKind::HueBar => rasterize_hue_bar(w, h),
            AssetKind::SatVal => rasterize_sat_val(w, h),
            AssetKind::Crosshairs => rasterize_crosshairs(w, h),
            AssetKind::HuePosition => rasterize_hue_position(w, h),
        }
    }
}

/// An RGBA8 image ready for painting.
#[derive(Clone)]
pub struct TrackImage {
    pub width: u32,
    pub height: u32,
    pub image: peniko::Image,
    pub hash: Vec<u8>,
    pub rasterized: bool,
}

impl TrackImage {
    fn from_pixels(width: u32, height: u32, pixels: Vec<u8>, rasterized: bool) -> Self {
        let blob = Blob::new(Arc::new(pixels));
        let hash = blob.id().to_le_bytes().to_vec();
        let image = peniko::Image::new(blob, peniko::Format::Rgba8, width, height);
        Self {
            width,
            height,
            image,
            hash,
            rasterized,
        }
    }

    pub fn rasterized(kind: AssetKind) -> Self {
        let (w, h) = kind.dimensions();
        Self::from_pixels(w, h, kind.rasterize(), true)
    }

    pub fn load(path: &Path, kind: AssetKind) -> AssetResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let actual = rgba.dimensions();
        let expected = kind.dimensions();
        if actual != expected {
            return Err(AssetError::Dimensions {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }
        Ok(Self::from_pixels(actual.0, actual.1, rgba.into_raw(), false))
    }
}

/// The four track images shared by selectors built from one config.
#[derive(Clone)]
pub struct AssetSet {
    pub hue_bar: TrackImage,
    pub sat_val: TrackImage,
    pub crosshairs: TrackImage,
    pub hue_position: TrackImage,
}

impl AssetSet {
    /// Load every image from the configured directory, rasterizing whatever
    /// cannot be loaded.
    pub fn load(config: &PickerConfig) -> Self {
        let one = |kind: AssetKind| match Self::try_load_one(config, kind) {
            Some(Ok(img)) => img,
            Some(Err(e)) => {
                log::warn!("{e}; using rasterized {}", kind.file_name());
                TrackImage::rasterized(kind)
            }
            None => TrackImage::rasterized(kind),
        };
        Self {
            hue_bar: one(AssetKind::HueBar),
            sat_val: one(AssetKind::SatVal),
            crosshairs: one(AssetKind::Crosshairs),
            hue_position: one(AssetKind::HuePosition),
        }
    }

    /// `None` when no assets directory is configured.
    pub fn try_load_one(config: &PickerConfig, kind: AssetKind) -> Option<AssetResult<TrackImage>> {
        let path = config.asset_path(kind.file_name())?;
        Some(TrackImage::load(&path, kind))
    }

    pub fn rasterized() -> Self {
        Self {
            hue_bar: TrackImage::rasterized(AssetKind::HueBar),
            sat_val: TrackImage::rasterized(AssetKind::SatVal),
            crosshairs: TrackImage::rasterized(AssetKind::Crosshairs),
            hue_position: TrackImage::rasterized(AssetKind::HuePosition),
        }
    }

    pub fn get(&self, kind: AssetKind) -> &TrackImage {
        match kind {
            AssetKind::HueBar => &self.hue_bar,
            AssetKind::SatVal => &self.sat_val,
            AssetKind::Crosshairs => &self.crosshairs,
            AssetKind::HuePosition => &self.hue_position,
        }
    }
}

fn put(buf: &mut [u8], width: u32, x: u32, y: u32, rgba: [u8; 4]) {
    let offset = ((y * width + x) * 4) as usize;
    buf[offset..offset + 4].copy_from_slice(&rgba);
}

fn to_u8(c: f64) -> u8 {
    (c * 255.0 + 0.5) as u8
}

/// Hue 0 at the top row, hue 1 at the bottom row.
fn rasterize_hue_bar(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let hue = py as f64 / (height - 1).max(1) as f64;
        let c = math::hsv_to_rgb(hue, 1.0, 1.0);
        for px in 0..width {
            put(&mut buf, width, px, py, [to_u8(c.r), to_u8(c.g), to_u8(c.b), 255]);
        }
    }
    buf
}

/// Gray overlay that, composited over the pure hue, gives
/// `v = x / (w-1)` and `s = 1 - y / (h-1)`.
fn rasterize_sat_val(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let s = 1.0 - py as f64 / (height - 1).max(1) as f64;
        for px in 0..width {
            let v = px as f64 / (width - 1).max(1) as f64;
            // result = a * gray + (1 - a) * hue, with (1 - a) = v * s
            let alpha = 1.0 - v * s;
            let gray = if alpha > 0.0 { v * (1.0 - s) / alpha } else { 0.0 };
            let g = to_u8(gray);
            put(&mut buf, width, px, py, [g, g, g, to_u8(alpha)]);
        }
    }
    buf
}

/// White ring with dark edges, transparent elsewhere.
fn rasterize_crosshairs(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let radius = cx.min(cy) - 2.0;
    for py in 0..height {
        for px in 0..width {
            let dist = ((px as f64 - cx).powi(2) + (py as f64 - cy).powi(2)).sqrt();
            let d = (dist - radius).abs();
            let rgba = if d < 1.0 {
                [255, 255, 255, 255]
            } else if d < 2.0 {
                [0, 0, 0, 110]
            } else {
                continue;
            };
            put(&mut buf, width, px, py, rgba);
        }
    }
    buf
}

/// Hollow bar outline: dark outside edge, white inside edge.
fn rasterize_hue_position(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        for px in 0..width {
            let edge = px.min(py).min(width - 1 - px).min(height - 1 - py);
            let rgba = match edge {
                0 => [0, 0, 0, 160],
                1 => [255, 255, 255, 255],
                _ => continue,
            };
            put(&mut buf, width, px, py, rgba);
        }
    }
    buf
}
