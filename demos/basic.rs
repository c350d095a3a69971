//! Standalone demo: opens a window with two independent selectors.
//!
//! Set `FLOEM_HSV_PICKER_ASSETS` to a directory holding `h.png`, `sv.png`,
//! `crosshairs.png` and `position.png` to use image tracks.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv_picker::{color_selectors, PickerConfig};

fn main() {
    env_logger::init();

    let background = RwSignal::new("#FFF".to_string());
    let accent = RwSignal::new("3B82F6".to_string());
    let config = PickerConfig::from_env();

    floem::Application::new()
        .window(
            move |_| {
                color_selectors([background, accent], &config)
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((300.0, 620.0))
                    .title("floem-hsv-picker"),
            ),
        )
        .run();
}
