//! Track geometry and layout constants for the selector.
//!
//! The track sizes match the pixel dimensions of the image assets.

/// Side of the saturation/value square.
pub const SQUARE_SIZE: f64 = 200.0;

/// Width of the hue bar. Its height is [`SQUARE_SIZE`].
pub const HUE_BAR_WIDTH: f64 = 35.0;

/// Largest clamped drag coordinate on either track (size - 1).
pub const TRACK_EXTENT: f64 = SQUARE_SIZE - 1.0;

/// Side of the crosshair marker image.
pub const CROSSHAIR_SIZE: f64 = 21.0;

/// Height of the hue position marker image (its width is [`HUE_BAR_WIDTH`]).
pub const HUE_MARKER_HEIGHT: f64 = 11.0;

/// Offset that centers the crosshair on its target pixel.
pub const CROSSHAIR_INSET: f64 = 10.0;

/// Offset that centers the hue marker on its target row.
pub const HUE_MARKER_INSET: f64 = 5.0;

/// Preview swatch side.
pub const PREVIEW_SIZE: f32 = 50.0;

/// Padding around the whole selector
pub const PADDING: f32 = 15.0;

/// Gap between the square and the hue bar
pub const GAP: f32 = 15.0;

/// Gap below the tracks
pub const ROW_GAP: f32 = 10.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Border radius for the input field
pub const RADIUS: f32 = 3.0;
