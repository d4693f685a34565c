use egui::{Context, Event, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Identifies one pointer (mouse, pen, or finger) for the length of a gesture.
pub type PointerId = u64;

/// egui merges mouse and touch into one primary pointer.
pub const PRIMARY_POINTER: PointerId = 0;

/// Pointer input on the drawing surface.
///
/// Positions are relative to the surface's top-left corner, in the same units
/// as the rendered surface size passed to [`route_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pointer_id: PointerId, position: Pos2 },
    PointerMove { pointer_id: PointerId, position: Pos2 },
    PointerUp { pointer_id: PointerId, position: Pos2 },
    /// The platform took the pointer away (e.g. a touch turned into a scroll)
    PointerCancel { pointer_id: PointerId },
    /// The pointer left the surface or the window
    PointerLeave { pointer_id: PointerId },
}

impl InputEvent {
    pub fn pointer_id(&self) -> PointerId {
        match *self {
            InputEvent::PointerDown { pointer_id, .. }
            | InputEvent::PointerMove { pointer_id, .. }
            | InputEvent::PointerUp { pointer_id, .. }
            | InputEvent::PointerCancel { pointer_id }
            | InputEvent::PointerLeave { pointer_id } => pointer_id,
        }
    }
}

/// Handles converting raw egui input into surface-relative InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    surface_rect: Option<Rect>,
    last_pointer_pos: Option<Pos2>,
    /// Primary button went down on the surface and has not been released
    pressed_on_surface: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen rectangle the drawing surface occupies this frame
    pub fn set_surface_rect(&mut self, rect: Rect) {
        self.surface_rect = Some(rect);
    }

    pub fn surface_rect(&self) -> Option<Rect> {
        self.surface_rect
    }

    fn relative(&self, rect: Rect, pos: Pos2) -> Pos2 {
        (pos - rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents, in arrival order.
    ///
    /// Presses only count when they land on the surface. Once pressed, moves
    /// and the release are reported wherever they happen so the editor can
    /// keep the gesture, which mirrors pointer capture.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let Some(rect) = self.surface_rect else {
            return Vec::new();
        };
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    Event::PointerMoved(pos) => {
                        self.last_pointer_pos = Some(*pos);
                        if self.pressed_on_surface || rect.contains(*pos) {
                            events.push(InputEvent::PointerMove {
                                pointer_id: PRIMARY_POINTER,
                                position: self.relative(rect, *pos),
                            });
                        }
                    }
                    Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        if *pressed {
                            if rect.contains(*pos) {
                                self.pressed_on_surface = true;
                                events.push(InputEvent::PointerDown {
                                    pointer_id: PRIMARY_POINTER,
                                    position: self.relative(rect, *pos),
                                });
                            }
                        } else if self.pressed_on_surface {
                            self.pressed_on_surface = false;
                            events.push(InputEvent::PointerUp {
                                pointer_id: PRIMARY_POINTER,
                                position: self.relative(rect, *pos),
                            });
                        }
                    }
                    Event::PointerGone => {
                        if self.last_pointer_pos.take().is_some() {
                            self.pressed_on_surface = false;
                            events.push(InputEvent::PointerLeave { pointer_id: PRIMARY_POINTER });
                        }
                    }
                    Event::WindowFocused(false) if self.pressed_on_surface => {
                        self.pressed_on_surface = false;
                        events.push(InputEvent::PointerCancel { pointer_id: PRIMARY_POINTER });
                    }
                    _ => {}
                }
            }
        });

        events
    }
}
