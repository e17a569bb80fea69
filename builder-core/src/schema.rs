//! Serialized representation of a builder canvas.

use serde::{Deserialize, Serialize};

use crate::{BuilderResult, BuilderStore, Element, Position, Viewport};

/// Viewport information.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportDocument {
    /// Zoom level.
    #[serde(default = "ViewportDocument::default_zoom")]
    pub zoom: f64,
    /// Pan offset.
    #[serde(default)]
    pub position: Position,
}

impl ViewportDocument {
    const fn default_zoom() -> f64 {
        1.0
    }
}

impl Default for ViewportDocument {
    fn default() -> Self {
        Self {
            zoom: Self::default_zoom(),
            position: Position::default(),
        }
    }
}

impl From<&Viewport> for ViewportDocument {
    fn from(viewport: &Viewport) -> Self {
        Self {
            zoom: viewport.zoom(),
            position: viewport.position,
        }
    }
}

/// Canonical layout document: elements in canvas order plus the viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Viewport metadata.
    #[serde(default)]
    pub viewport: ViewportDocument,
    /// Top-level elements in insertion order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl LayoutDocument {
    /// Build a document from a store.
    #[must_use]
    pub fn from_store(store: &BuilderStore) -> Self {
        Self {
            viewport: ViewportDocument::from(store.viewport()),
            elements: store.elements().to_vec(),
        }
    }

    /// Materialize a store from this document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidZoom`] for a non-positive zoom and
    /// [`crate::BuilderError::DuplicateId`] if element ids repeat.
    pub fn into_store(self) -> BuilderResult<BuilderStore> {
        let mut viewport = Viewport::default();
        viewport.set_zoom(self.viewport.zoom)?;
        viewport.position = self.viewport.position;
        BuilderStore::with_elements(self.elements, viewport)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a layout.
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
