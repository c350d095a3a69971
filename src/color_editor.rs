//! Color selector panel: saturation/value square, hue bar, preview swatch and
//! the bound hex field.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::assets::AssetSet;
use crate::constants;
use crate::inputs::{copy_button, hex_input};
use crate::selector::ColorSelector;
use crate::track::{hue_bar, sat_val_square};

/// Creates one selector bound to `text`.
///
/// The selector owns its own color state; `text` always ends up holding the
/// canonical `#RRGGBB` of that state.
pub(crate) fn color_editor(text: RwSignal<String>, assets: Rc<AssetSet>) -> impl IntoView {
    let selector = bind_selector(text);

    let preview = empty().style(move |st| {
        let (r, g, b) = selector.get().rgb().to_rgb8();
        st.width(constants::PREVIEW_SIZE)
            .height(constants::PREVIEW_SIZE)
            .border(1.0)
            .border_color(Color::BLACK)
            .background(Color::rgb8(r, g, b))
    });

    v_stack((
        h_stack((
            sat_val_square(selector, assets.clone()),
            hue_bar(selector, assets),
        ))
        .style(|st| st.gap(constants::GAP)),
        h_stack((
            preview,
            // Spacer pushes the hex field to the right
            empty().style(|st| st.flex_grow(1.0)),
            hex_input(text),
            copy_button(text),
        ))
        .style(|st| st.items_center().gap(4.0)),
    ))
    .style(|st| {
        st.gap(constants::ROW_GAP)
            .padding(constants::PADDING)
            .width(250.0 + 2.0 * constants::PADDING)
    })
}

/// Keeps a fresh selector and `text` in sync.
///
/// The selector's canonical hex is written back into `text`. Any other value
/// that shows up in `text` is parsed as a committed edit.
fn bind_selector(text: RwSignal<String>) -> RwSignal<ColorSelector> {
    let selector = RwSignal::new(ColorSelector::new(&text.get_untracked()));

    // Selector -> bound text
    create_effect(move |_| {
        let hex = selector.get().hex();
        if text.get_untracked() != hex {
            text.set(hex);
        }
    });

    // Bound text -> selector, whenever it differs from what we last wrote
    create_effect(move |_| {
        let raw = text.get();
        if selector.get_untracked().hex() != raw {
            log::debug!("bound text changed to {raw:?}");
            selector.update(|s| {
                s.input_changed(&raw);
            });
        }
    });

    selector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRACK_EXTENT;

    fn editor_text(initial: &str) -> RwSignal<String> {
        let text = RwSignal::new(initial.to_string());
        let _view = color_editor(text, Rc::new(AssetSet::rasterized()));
        text
    }

    #[test]
    fn test_malformed_initial_text_becomes_black() {
        let text = editor_text("zzz");
        assert_eq!(text.get_untracked(), "#000000");
    }

    #[test]
    fn test_initial_shorthand_is_canonicalized() {
        let text = editor_text("#0f0");
        assert_eq!(text.get_untracked(), "#00FF00");
    }

    #[test]
    fn test_external_writes_are_parsed() {
        let text = editor_text("zzz");

        text.set("#0f0".to_string());
        assert_eq!(text.get_untracked(), "#00FF00");

        text.set("nothex".to_string());
        assert_eq!(text.get_untracked(), "#000000");
    }

    #[test]
    fn test_drag_to_white_keeps_hue() {
        let text = RwSignal::new("#3366CC".to_string());
        let selector = bind_selector(text);
        let hue = selector.get_untracked().hsv().h;

        selector.update(|s| {
            s.sat_val_dragged(TRACK_EXTENT, TRACK_EXTENT);
        });

        assert_eq!(text.get_untracked(), "#FFFFFF");
        let hsv = selector.get_untracked().hsv();
        assert!(hsv.s.abs() < 1e-9);
        assert!((hsv.h - hue).abs() < 1e-9);
    }
}
