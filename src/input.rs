use egui::{Context, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events the canvas reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed inside the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while a canvas press is held
    PointerMove { location: InputLocation },
    /// Primary button was released after a canvas press
    PointerUp { location: InputLocation },
    /// Pointer moved with no button held
    PointerHover { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location }
            | InputEvent::PointerHover { location } => *location,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.location().position
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents.
///
/// A gesture only starts on a press inside the canvas; once started, moves and
/// the final release are delivered even when the pointer leaves the canvas.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    pressing: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressing: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let pos = pointer.interact_pos().or(self.last_pointer_pos);
            let mut pressed_at = None;

            if pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos {
                    let location = self.make_location(pos);
                    if location.is_in_canvas {
                        self.pressing = true;
                        pressed_at = Some(pos);
                        events.push(InputEvent::PointerDown { location });
                    }
                }
            }

            if let Some(pos) = pointer.hover_pos() {
                // the press already reported this position
                if Some(pos) != self.last_pointer_pos && Some(pos) != pressed_at {
                    let location = self.make_location(pos);
                    if self.pressing && pointer.button_down(PointerButton::Primary) {
                        events.push(InputEvent::PointerMove { location });
                    } else if !self.pressing && location.is_in_canvas {
                        events.push(InputEvent::PointerHover { location });
                    }
                }
                self.last_pointer_pos = Some(pos);
            }

            if self.pressing && !pointer.button_down(PointerButton::Primary) {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                    });
                }
                self.pressing = false;
            }
        });

        events
    }
}
