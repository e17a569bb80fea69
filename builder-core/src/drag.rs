//! Pointer drag handling for elements already on the canvas.
//!
//! A drag is a small state machine:
//!
//! ```text
//!            Down on element             Up
//!   Idle ───────────────────▶ Dragging ─────────▶ Idle
//!                              │    ▲
//!                         Move └────┘ (writes position)
//!
//!   Cancel while dragging restores the start position, then Idle.
//! ```

use serde::{Deserialize, Serialize};

use crate::{BuilderStore, ElementId, ElementUpdate, Position};

/// Pointer input relevant to dragging, in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Pointer pressed on an element's drag handle.
    Down {
        /// Element under the pointer.
        target: ElementId,
        /// Pointer position.
        at: Position,
    },
    /// Pointer moved.
    Move {
        /// Pointer position.
        at: Position,
    },
    /// Pointer released.
    Up,
    /// Drag aborted (e.g. Escape pressed).
    Cancel,
}

/// Current drag state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// An element follows the pointer.
    Dragging {
        /// Element being dragged.
        element: ElementId,
        /// Pointer position minus element position at drag start.
        grab_offset: Position,
        /// Element position at drag start, restored on cancel.
        origin: Position,
    },
}

/// Drives [`DragState`] from pointer events and applies moves to the store.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one pointer event.
    ///
    /// Returns the position written to the store, if the event moved an element.
    pub fn handle(&mut self, store: &mut BuilderStore, event: &PointerEvent) -> Option<Position> {
        match (&self.state, event) {
            (DragState::Idle, PointerEvent::Down { target, at }) => {
                let position = store.element(target)?.position;
                self.state = DragState::Dragging {
                    element: target.clone(),
                    grab_offset: Position::new(at.x - position.x, at.y - position.y),
                    origin: position,
                };
                tracing::debug!("Drag started on {target}");
                None
            }
            (
                DragState::Dragging {
                    element,
                    grab_offset,
                    ..
                },
                PointerEvent::Move { at },
            ) => {
                let position = Position::new(at.x - grab_offset.x, at.y - grab_offset.y);
                if store
                    .update_element(element, ElementUpdate::position(position))
                    .is_none()
                {
                    // Element was deleted mid-drag.
                    self.state = DragState::Idle;
                    return None;
                }
                Some(position)
            }
            (DragState::Dragging { element, .. }, PointerEvent::Up) => {
                tracing::debug!("Drag finished on {element}");
                self.state = DragState::Idle;
                None
            }
            (DragState::Dragging { element, origin, .. }, PointerEvent::Cancel) => {
                let origin = *origin;
                let restored = store
                    .update_element(element, ElementUpdate::position(origin))
                    .map(|_| origin);
                tracing::debug!("Drag cancelled on {element}");
                self.state = DragState::Idle;
                restored
            }
            _ => None,
        }
    }
}
