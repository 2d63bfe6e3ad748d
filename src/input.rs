//! Translation of raw Slint window events into [`EditorEvent`]s.
//!
//! Slint reports absolute pointer positions and separate press/release
//! events. The editor wants drag deltas and to know which button is held,
//! so [`PointerTracker`] keeps that bit of history between events.
//!
//! # Example
//!
//! ```ignore
//! let mut tracker = PointerTracker::new();
//! for window_event in events {
//!     if let Some(event) = tracker.translate(&window_event) {
//!         redraw |= state.handle_event(event).redraw;
//!     }
//! }
//! ```

use crate::interaction::EditorEvent;
use slint::platform::{PointerEventButton, WindowEvent};
use slint::LogicalPosition;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pressed: Option<PointerEventButton>,
    last_position: Option<LogicalPosition>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button currently held, if any.
    pub fn pressed(&self) -> Option<PointerEventButton> {
        self.pressed
    }

    /// Convert one window event. Events the editor does not consume
    /// (keys, focus, resize, ...) yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<EditorEvent> {
        match event {
            WindowEvent::PointerPressed { position, button } => {
                self.last_position = Some(*position);
                if *button == PointerEventButton::Right {
                    return Some(EditorEvent::ContextRequest { position: *position });
                }
                self.pressed = Some(*button);
                Some(EditorEvent::PointerDown {
                    button: *button,
                    position: *position,
                })
            }
            WindowEvent::PointerReleased { position, button } => {
                self.last_position = Some(*position);
                if self.pressed == Some(*button) {
                    self.pressed = None;
                }
                Some(EditorEvent::PointerUp { button: *button })
            }
            WindowEvent::PointerMoved { position } => {
                let delta = self
                    .last_position
                    .map(|last| (position.x - last.x, position.y - last.y))
                    .unwrap_or((0.0, 0.0));
                self.last_position = Some(*position);
                Some(match self.pressed {
                    Some(button) => EditorEvent::PointerDrag {
                        button,
                        position: *position,
                        delta,
                    },
                    None => EditorEvent::PointerMove { position: *position },
                })
            }
            // Slint reports wheel-up as positive y; the editor's convention
            // is negative for scrolling up.
            WindowEvent::PointerScrolled { delta_x, delta_y, .. } => Some(EditorEvent::Scroll {
                delta: (-*delta_x, -*delta_y),
            }),
            WindowEvent::PointerExited => {
                self.last_position = None;
                self.pressed
                    .take()
                    .map(|button| EditorEvent::PointerUp { button })
            }
            _ => None,
        }
    }
}
