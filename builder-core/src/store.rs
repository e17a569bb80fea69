//! The element store: single source of truth for the authored layout.
//!
//! [`BuilderStore`] owns the ordered element list, the current selection
//! and the canvas viewport. Every operation runs to completion on `&mut self`,
//! so readers never observe a half-applied change.
//!
//! Lookups that miss are not errors. [`BuilderStore::remove_element`] and
//! [`BuilderStore::update_element`] both return `None` and leave the store
//! untouched when the id is unknown.
//!
//! # Example
//!
//! ```
//! use builder_core::{BuilderStore, Element, ElementUpdate, Position};
//!
//! let mut store = BuilderStore::new();
//! let id = store
//!     .add_element(Element::new("button").with_prop("children", "Click me"))
//!     .unwrap();
//! store.select_element(Some(&id));
//! store.update_element(&id, ElementUpdate::position(Position::new(40.0, 80.0)));
//!
//! assert_eq!(store.selected_element().unwrap().position, Position::new(40.0, 80.0));
//! ```

use crate::codegen::{self, CodegenConfig};
use crate::library::DragPayload;
use crate::{BuilderError, BuilderResult, Element, ElementId, ElementUpdate, Position, Viewport};

/// Where a library template was dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPoint {
    /// Pointer position in client (screen) coordinates.
    pub client: Position,
    /// Top-left corner of the canvas in client coordinates.
    pub canvas_origin: Position,
}

impl DropPoint {
    /// Convert into canvas coordinates at the given zoom.
    #[must_use]
    pub fn to_canvas(&self, zoom: f64) -> Position {
        Position::new(
            (self.client.x - self.canvas_origin.x) / zoom,
            (self.client.y - self.canvas_origin.y) / zoom,
        )
    }
}

/// Element list, selection and viewport of one builder canvas.
#[derive(Debug, Clone, Default)]
pub struct BuilderStore {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    viewport: Viewport,
}

impl BuilderStore {
    /// Create an empty store with the default viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing element list.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateId`] if two elements share an id.
    pub fn with_elements(
        elements: impl IntoIterator<Item = Element>,
        viewport: Viewport,
    ) -> BuilderResult<Self> {
        let mut store = Self {
            viewport,
            ..Self::default()
        };
        for element in elements {
            store.add_element(element)?;
        }
        Ok(store)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// All top-level elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Id of the selected element, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// The selected element, resolved against the live list.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.element(id))
    }

    /// Whether `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of top-level elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Whether the canvas has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append an element to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateId`] if an element with the same id is
    /// already on the canvas; the list is left unchanged.
    pub fn add_element(&mut self, element: Element) -> BuilderResult<ElementId> {
        if self.element(&element.id).is_some() {
            tracing::warn!("Rejected duplicate element id {}", element.id);
            return Err(BuilderError::DuplicateId(element.id.to_string()));
        }
        let id = element.id.clone();
        tracing::debug!(kind = %element.kind, "Added element {id}");
        self.elements.push(element);
        Ok(id)
    }

    /// Materialize a dragged library template at the drop point.
    ///
    /// The payload's own id is discarded; the new element gets a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateId`] only if id generation collides.
    pub fn drop_payload(&mut self, payload: DragPayload, at: DropPoint) -> BuilderResult<ElementId> {
        let position = at.to_canvas(self.viewport.zoom());
        let element = Element::new(payload.kind)
            .with_props(payload.props)
            .with_position(position);
        self.add_element(element)
    }

    /// Remove an element. Clears the selection if it pointed at this element.
    ///
    /// Returns the removed element, or `None` if no element has this id.
    pub fn remove_element(&mut self, id: &ElementId) -> Option<Element> {
        let Some(index) = self.elements.iter().position(|e| &e.id == id) else {
            tracing::debug!("Remove ignored, no element {id}");
            return None;
        };
        let removed = self.elements.remove(index);
        if self.is_selected(id) {
            self.selected = None;
        }
        tracing::debug!("Removed element {id}");
        Some(removed)
    }

    /// Apply a shallow update to an element.
    ///
    /// Returns the updated element, or `None` if no element has this id.
    pub fn update_element(&mut self, id: &ElementId, update: ElementUpdate) -> Option<&Element> {
        let Some(element) = self.elements.iter_mut().find(|e| &e.id == id) else {
            tracing::debug!("Update ignored, no element {id}");
            return None;
        };
        element.apply(update);
        tracing::debug!("Updated element {id}");
        Some(element)
    }

    /// Replace the selection. `None` deselects.
    ///
    /// Returns `false` (and clears the selection) if the id is not on the canvas.
    pub fn select_element(&mut self, id: Option<&ElementId>) -> bool {
        match id {
            Some(id) if self.element(id).is_some() => {
                self.selected = Some(id.clone());
                true
            }
            Some(id) => {
                tracing::debug!("Select ignored, no element {id}");
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    /// Set the canvas zoom, clamped to the supported range.
    ///
    /// Returns the zoom actually applied.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidZoom`] for non-finite or non-positive values.
    pub fn set_canvas_zoom(&mut self, zoom: f64) -> BuilderResult<f64> {
        let applied = self.viewport.set_zoom(zoom).inspect_err(|e| {
            tracing::warn!("{e}");
        })?;
        tracing::debug!("Canvas zoom {applied}");
        Ok(applied)
    }

    /// Zoom in one toolbar step.
    pub fn zoom_in(&mut self) -> f64 {
        self.viewport.zoom_in()
    }

    /// Zoom out one toolbar step.
    pub fn zoom_out(&mut self) -> f64 {
        self.viewport.zoom_out()
    }

    /// Set the canvas pan offset.
    pub fn set_canvas_position(&mut self, position: Position) {
        self.viewport.position = position;
    }

    /// Remove every element and clear the selection. The viewport is kept.
    pub fn clear_canvas(&mut self) {
        tracing::debug!("Cleared {} elements", self.elements.len());
        self.elements.clear();
        self.selected = None;
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Generate component source for the current elements with default settings.
    ///
    /// # Errors
    ///
    /// See [`codegen::generate_code`].
    pub fn generate_code(&self) -> BuilderResult<String> {
        self.generate_code_with(&CodegenConfig::default())
    }

    /// Generate component source with the given settings.
    ///
    /// # Errors
    ///
    /// See [`codegen::generate_code`].
    pub fn generate_code_with(&self, config: &CodegenConfig) -> BuilderResult<String> {
        codegen::generate_code(&self.elements, config)
    }
}
