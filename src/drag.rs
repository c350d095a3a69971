//! Drag tracking: raw pointer/touch/mouse events → clamped local coordinates.
//!
//! A tracker is bound to one event family, picked once from the platform's
//! capabilities. It is either idle (listening for `down` on its target) or
//! dragging (listening for `move` and `up` on the whole document); the swap of
//! listeners is the side effect of each transition.

use floem::kurbo::{Point, Rect};

/// What the platform can deliver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub pointer_events: bool,
    pub touch_events: bool,
}

impl Capabilities {
    /// Floem unifies mouse, pen and touch into pointer events.
    pub fn native() -> Self {
        Self {
            pointer_events: true,
            touch_events: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFamily {
    Pointer,
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    MouseDown,
    MouseMove,
    MouseUp,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::PointerDown => "pointerdown",
            EventKind::PointerMove => "pointermove",
            EventKind::PointerUp => "pointerup",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
        }
    }
}

impl InputFamily {
    /// Pointer events when available, else touch, else mouse.
    pub fn select(caps: Capabilities) -> Self {
        if caps.pointer_events {
            InputFamily::Pointer
        } else if caps.touch_events {
            InputFamily::Touch
        } else {
            InputFamily::Mouse
        }
    }

    pub fn kind(self, phase: Phase) -> EventKind {
        match (self, phase) {
            (InputFamily::Pointer, Phase::Down) => EventKind::PointerDown,
            (InputFamily::Pointer, Phase::Move) => EventKind::PointerMove,
            (InputFamily::Pointer, Phase::Up) => EventKind::PointerUp,
            (InputFamily::Touch, Phase::Down) => EventKind::TouchStart,
            (InputFamily::Touch, Phase::Move) => EventKind::TouchMove,
            (InputFamily::Touch, Phase::Up) => EventKind::TouchEnd,
            (InputFamily::Mouse, Phase::Down) => EventKind::MouseDown,
            (InputFamily::Mouse, Phase::Move) => EventKind::MouseMove,
            (InputFamily::Mouse, Phase::Up) => EventKind::MouseUp,
        }
    }

    /// The phase of `kind`, or `None` if it belongs to another family.
    pub fn phase(self, kind: EventKind) -> Option<Phase> {
        [Phase::Down, Phase::Move, Phase::Up]
            .into_iter()
            .find(|&phase| self.kind(phase) == kind)
    }
}

/// An input event as delivered by the platform, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub kind: EventKind,
    pub page: Point,
    pub changed_touches: Vec<Point>,
}

impl RawEvent {
    pub fn new(kind: EventKind, page: Point) -> Self {
        Self {
            kind,
            page,
            changed_touches: Vec::new(),
        }
    }

    pub fn touch(kind: EventKind, touches: Vec<Point>) -> Self {
        let page = touches.first().copied().unwrap_or(Point::ZERO);
        Self {
            kind,
            page,
            changed_touches: touches,
        }
    }

    /// Page position: the first changed touch if there is one.
    pub fn locate(&self) -> Point {
        self.changed_touches.first().copied().unwrap_or(self.page)
    }
}

/// Which listeners are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listening {
    /// Idle: only `down` on the tracked element.
    Target { down: EventKind },
    /// Dragging: `move` and `up` on the whole document.
    Document { moved: EventKind, up: EventKind },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { last: Point },
}

/// What the caller should do with the event it just fed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The event belonged to the current listener set.
    pub handled: bool,
    /// Suppress the platform's default drag/scroll behavior.
    pub prevent_default: bool,
}

/// Clamp a page position into `bounds`, relative to its top-left corner.
///
/// The result lies in `[0, width-1] × [0, height-1]`.
pub fn clamp_to_bounds(page: Point, bounds: Rect) -> Point {
    let x = (page.x - bounds.x0).min(bounds.width() - 1.0).max(0.0);
    let y = (page.y - bounds.y0).min(bounds.height() - 1.0).max(0.0);
    Point::new(x, y)
}

pub struct DragTracker<H> {
    family: InputFamily,
    state: DragState,
    handler: H,
}

impl<H: FnMut(Point)> DragTracker<H> {
    /// Bind a tracker, choosing its event family once from `caps`.
    pub fn bind(caps: Capabilities, handler: H) -> Self {
        let family = InputFamily::select(caps);
        log::debug!(
            "drag tracker bound to {} events",
            family.kind(Phase::Down).name()
        );
        Self {
            family,
            state: DragState::Idle,
            handler,
        }
    }

    pub fn family(&self) -> InputFamily {
        self.family
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn listening(&self) -> Listening {
        match self.state {
            DragState::Idle => Listening::Target {
                down: self.family.kind(Phase::Down),
            },
            DragState::Dragging { .. } => Listening::Document {
                moved: self.family.kind(Phase::Move),
                up: self.family.kind(Phase::Up),
            },
        }
    }

    /// Feed one event. `bounds` is the tracked element's box in page coordinates.
    pub fn handle(&mut self, event: &RawEvent, bounds: Rect) -> Outcome {
        let Some(phase) = self.family.phase(event.kind) else {
            return Outcome::default();
        };
        match (self.state, phase) {
            (DragState::Idle, Phase::Down) => {
                let pos = clamp_to_bounds(event.locate(), bounds);
                (self.handler)(pos);
                self.state = DragState::Dragging { last: pos };
                log::debug!("drag started at ({}, {})", pos.x, pos.y);
                Outcome {
                    handled: true,
                    prevent_default: true,
                }
            }
            (DragState::Dragging { last }, Phase::Move) => {
                let pos = clamp_to_bounds(event.locate(), bounds);
                if pos != last {
                    self.state = DragState::Dragging { last: pos };
                    (self.handler)(pos);
                }
                Outcome {
                    handled: true,
                    prevent_default: false,
                }
            }
            (DragState::Dragging { .. }, Phase::Up) => {
                self.release();
                Outcome {
                    handled: true,
                    prevent_default: false,
                }
            }
            _ => Outcome::default(),
        }
    }

    /// End any drag in progress without a final handler call.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.release();
        }
    }

    fn release(&mut self) {
        self.state = DragState::Idle;
        log::debug!("drag ended");
    }
}
