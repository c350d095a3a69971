//! The bound hex text field and the copy button next to it.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::constants;

/// A text field bound to `value`.
///
/// Edits are kept in a draft and only written to `value` when committed
/// (Enter or focus loss), like an HTML `change` event. Writes to `value` from
/// elsewhere replace the draft.
pub(crate) fn hex_input(value: RwSignal<String>) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());

    create_effect(move |_| {
        let val = value.get();
        if draft.get_untracked() != val {
            draft.set(val);
        }
    });

    let on_commit = move || {
        let raw = draft.get_untracked();
        log::debug!("hex input committed {raw:?}");
        value.set(raw);
    };
    let on_commit_clone = on_commit;

    text_input(draft)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}

/// Copies the bound hex to the clipboard; sits flush with the hex field.
pub(crate) fn copy_button(value: RwSignal<String>) -> impl IntoView {
    let icon = lucide_icons::Icon::Copy.unicode().to_string();
    label(move || icon.clone())
        .style(|s| {
            s.font_size(constants::INPUT_FONT + 2.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(90, 90, 90))
                .padding(3.0)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
                .background(Color::WHITE)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(235, 235, 235)))
                .active(|s| s.background(Color::rgb8(215, 215, 215)))
        })
        .on_click_stop(move |_| {
            copy_to_clipboard(&value.get_untracked());
        })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => log::debug!("copied {text} to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}
