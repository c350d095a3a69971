//! The two drag-tracked tracks: the saturation/value square and the hue bar.
//!
//! Each track owns a [`DragTracker`] fed from Floem pointer events. Drag
//! results are pushed into the shared selector signal; repaints come back
//! through an effect as a [`Frame`].

use std::rc::Rc;

use floem::kurbo::{Point, Rect};
use floem::peniko::Color;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::assets::{AssetSet, TrackImage};
use crate::constants;
use crate::drag::{Capabilities, DragTracker, Phase, RawEvent};
use crate::selector::{ColorSelector, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackKind {
    SatVal,
    Hue,
}

type DragHandler = Box<dyn FnMut(Point)>;

pub(crate) struct Track {
    id: ViewId,
    kind: TrackKind,
    tracker: DragTracker<DragHandler>,
    frame: Frame,
    assets: Rc<AssetSet>,
    size: floem::taffy::prelude::Size<f32>,
}

/// The 200×200 square: x maps to value, y to inverted saturation.
pub(crate) fn sat_val_square(selector: RwSignal<ColorSelector>, assets: Rc<AssetSet>) -> Track {
    let on_drag: DragHandler = Box::new(move |p: Point| {
        selector.update(|s| {
            s.sat_val_dragged(p.x, p.y);
        });
    });
    track(TrackKind::SatVal, selector, assets, on_drag)
        .style(|s| s.width(constants::SQUARE_SIZE).height(constants::SQUARE_SIZE))
}

/// The 35×200 bar: y maps to hue.
pub(crate) fn hue_bar(selector: RwSignal<ColorSelector>, assets: Rc<AssetSet>) -> Track {
    let on_drag: DragHandler = Box::new(move |p: Point| {
        selector.update(|s| {
            s.hue_dragged(p.x, p.y);
        });
    });
    track(TrackKind::Hue, selector, assets, on_drag)
        .style(|s| s.width(constants::HUE_BAR_WIDTH).height(constants::SQUARE_SIZE))
}

fn track(
    kind: TrackKind,
    selector: RwSignal<ColorSelector>,
    assets: Rc<AssetSet>,
    on_drag: DragHandler,
) -> Track {
    let id = ViewId::new();

    create_effect(move |_| {
        let frame = selector.get().frame();
        id.update_state(frame);
    });

    Track {
        id,
        kind,
        tracker: DragTracker::bind(Capabilities::native(), on_drag),
        frame: selector.get_untracked().frame(),
        assets,
        size: Default::default(),
    }
}

impl Track {
    /// Floem positions are already local to the view.
    fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.size.width as f64,
            self.size.height as f64,
        )
    }

    /// Floem delivers one unified pointer family; present it in the tracker's.
    fn feed(&mut self, phase: Phase, pos: Point) -> bool {
        let event = RawEvent::new(self.tracker.family().kind(phase), pos);
        let bounds = self.bounds();
        let outcome = self.tracker.handle(&event, bounds);
        outcome.prevent_default
    }

    fn draw(cx: &mut PaintCx, img: &TrackImage, origin: Point) {
        let rect = Rect::from_origin_size(origin, (img.width as f64, img.height as f64));
        cx.draw_img(
            floem_renderer::Img {
                img: img.image.clone(),
                hash: &img.hash,
            },
            rect,
        );
    }
}

impl View for Track {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(frame) = state.downcast::<Frame>() {
            self.frame = *frame;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if self.feed(Phase::Down, e.pos) {
                    // Keep receiving moves and the release outside our bounds.
                    cx.update_active(self.id());
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.tracker.is_dragging() {
                    self.feed(Phase::Move, e.pos);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                self.feed(Phase::Up, e.pos);
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.tracker.cancel();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let bounds = self.bounds();
        if bounds.width() == 0.0 || bounds.height() == 0.0 {
            return;
        }

        // Markers may overhang the track edges.
        match self.kind {
            TrackKind::SatVal => {
                let (r, g, b) = self.frame.square_background.to_rgb8();
                cx.fill(&bounds, Color::rgb8(r, g, b), 0.0);
                Self::draw(cx, &self.assets.sat_val, Point::ZERO);
                Self::draw(cx, &self.assets.crosshairs, self.frame.crosshair);
            }
            TrackKind::Hue => {
                Self::draw(cx, &self.assets.hue_bar, Point::ZERO);
                let marker = Point::new(0.0, self.frame.hue_marker_top);
                Self::draw(cx, &self.assets.hue_position, marker);
            }
        }
    }
}
