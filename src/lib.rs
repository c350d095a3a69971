//! # floem-hsv-picker
//!
//! An HSV color selector for [Floem](https://github.com/lapce/floem): a
//! 200×200 saturation/value square, a hue bar, a preview swatch and a hex
//! text field, all bound to an `RwSignal<String>` holding the color.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsv_picker::{color_selector, PickerConfig};
//!
//! let text = RwSignal::new("#3B82F6".to_string());
//! // Use `color_selector(text, &PickerConfig::from_env())` in your Floem view tree.
//! ```
//!
//! The conversions and the drag tracker are usable on their own through
//! [`math`], [`Rgb`]/[`Hsv`] and [`drag`].

mod assets;
mod color;
mod color_editor;
mod config;
mod constants;
pub mod drag;
mod inputs;
pub mod math;
mod selector;
mod track;

pub use assets::{AssetError, AssetKind, AssetResult, AssetSet, TrackImage};
pub use color::{Hsv, Rgb};
pub use config::{PickerConfig, ASSETS_ENV};
pub use drag::DragTracker;
pub use selector::{ColorSelector, Frame};

use std::rc::Rc;
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;
use floem::views::v_stack_from_iter;

static LOAD_LUCIDE_FONT: Once = Once::new();

fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}

/// Creates a color selector bound to `text`.
///
/// The current value of `text` is parsed as hex (black if malformed) and
/// immediately rewritten in canonical `#RRGGBB` form. Drags and committed
/// edits keep it in sync; external writes to `text` repaint the selector.
pub fn color_selector(text: RwSignal<String>, config: &PickerConfig) -> impl IntoView {
    load_icon_font();
    color_editor::color_editor(text, Rc::new(AssetSet::load(config)))
}

/// Creates one independent selector per bound signal, stacked vertically.
///
/// The track images are loaded once and shared; color state is not.
pub fn color_selectors(
    texts: impl IntoIterator<Item = RwSignal<String>>,
    config: &PickerConfig,
) -> impl IntoView {
    load_icon_font();
    let assets = Rc::new(AssetSet::load(config));
    v_stack_from_iter(
        texts
            .into_iter()
            .map(move |text| color_editor::color_editor(text, assets.clone())),
    )
}
