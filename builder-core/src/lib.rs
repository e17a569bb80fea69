//! # Page Builder Core
//!
//! State and code generation behind a drag-and-drop page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                builder-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Element Store   │  Code Generator          │
//! │  - Element list  │  - JSX serialization     │
//! │  - Selection     │  - Attribute parsing     │
//! │  - Viewport      │                          │
//! ├─────────────────────────────────────────────┤
//! │  Library         │  Interaction             │
//! │  - Templates     │  - Drop materialization  │
//! │  - Search        │  - Drag state machine    │
//! │                  │  - Property edits        │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod codegen;
pub mod drag;
pub mod editor;
pub mod element;
pub mod error;
pub mod library;
pub mod markup;
pub mod schema;
pub mod store;
pub mod viewport;

pub use codegen::{generate_code, CodegenConfig};
pub use drag::{DragController, DragState, PointerEvent};
pub use element::{Axis, Element, ElementId, ElementUpdate, Position, Props, Size};
pub use error::{BuilderError, BuilderResult};
pub use library::{Category, DragPayload, Library, Template};
pub use markup::{parse_attributes, parse_component, parse_markup, MarkupNode};
pub use schema::{LayoutDocument, ViewportDocument};
pub use store::{BuilderStore, DropPoint};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Builder core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
