//! Canvas elements - the building blocks of a page layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Element attributes in insertion order.
///
/// Keys are never validated against the element type. Values are plain
/// strings, numbers, or nested mappings such as inline style objects.
pub type Props = IndexMap<String, serde_json::Value>;

/// Unique identifier for an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create a fresh id for an element of the given type, e.g. `button-3f2a...`.
    #[must_use]
    pub fn generate(kind: &str) -> Self {
        Self(format!("{kind}-{}", Uuid::new_v4().simple()))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point in canvas coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge of the canvas.
    pub x: f64,
    /// Pixels from the top edge of the canvas.
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Explicit element dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// One of the two canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// A placed element: a tag, its attributes and where it sits on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Tag selecting the UI primitive (`div`, `h1`, `button`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Attributes rendered onto the tag.
    #[serde(default)]
    pub props: Props,
    /// Nested elements. Nothing in the editing flow populates these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    /// Top-left corner on the canvas.
    #[serde(default)]
    pub position: Position,
    /// Explicit size; `None` keeps the element's natural size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl Element {
    /// Create an element of the given type with a fresh id, no props, at the origin.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            id: ElementId::generate(&kind),
            kind,
            props: Props::new(),
            children: Vec::new(),
            position: Position::default(),
            size: None,
        }
    }

    /// Replace the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Append a prop, keeping earlier props first.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Replace all props.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set an explicit size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Look up a string-valued prop.
    #[must_use]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(serde_json::Value::as_str)
    }

    /// Apply a partial update. Every field present in `update` replaces the
    /// current value wholesale.
    pub fn apply(&mut self, update: ElementUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(props) = update.props {
            self.props = props;
        }
        if let Some(children) = update.children {
            self.children = children;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
    }
}

/// Shallow partial update for an element.
///
/// Fields are replaced, never merged: setting `position` replaces both axes,
/// setting `props` replaces the whole map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementUpdate {
    /// New element type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// New props map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    /// New children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Element>>,
    /// New position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// New size; `Some(None)` (`"size": null` on the wire) resets to natural size.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub size: Option<Option<Size>>,
}

/// A field that is present deserializes to `Some`, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ElementUpdate {
    /// Update only the position.
    #[must_use]
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Update only the props.
    #[must_use]
    pub fn props(props: Props) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    /// Update only the size.
    #[must_use]
    pub fn size(size: Option<Size>) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = ElementId::generate("button");
        let b = ElementId::generate("button");
        assert!(a.as_str().starts_with("button-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_replaces_whole_position() {
        let mut element = Element::new("div").with_position(Position::new(10.0, 20.0));
        element.apply(ElementUpdate::position(Position::new(5.0, 5.0)));
        assert_eq!(element.position, Position::new(5.0, 5.0));
    }

    #[test]
    fn test_update_leaves_absent_fields() {
        let mut element = Element::new("p")
            .with_prop("children", "hi")
            .with_size(Size {
                width: 100.0,
                height: 40.0,
            });
        element.apply(ElementUpdate::position(Position::new(1.0, 2.0)));
        assert_eq!(element.prop_str("children"), Some("hi"));
        assert!(element.size.is_some());

        element.apply(ElementUpdate::size(None));
        assert!(element.size.is_none());
    }

    #[test]
    fn test_update_from_json_distinguishes_null_size() {
        let reset: ElementUpdate = serde_json::from_str(r#"{"size":null}"#).expect("deserialize");
        assert_eq!(reset, ElementUpdate::size(None));

        let untouched: ElementUpdate =
            serde_json::from_str(r#"{"position":{"x":1.0,"y":2.0}}"#).expect("deserialize");
        assert_eq!(untouched.size, None);

        let sized: ElementUpdate =
            serde_json::from_str(r#"{"size":{"width":10.0,"height":20.0}}"#).expect("deserialize");
        assert_eq!(
            sized.size,
            Some(Some(Size {
                width: 10.0,
                height: 20.0
            }))
        );

        let mut element = Element::new("img").with_size(Size {
            width: 100.0,
            height: 40.0,
        });
        element.apply(reset);
        assert!(element.size.is_none());
    }

    #[test]
    fn test_serde_uses_type_key_and_omits_empty() {
        let element = Element::new("h1")
            .with_id("h1-1")
            .with_prop("className", "text-4xl")
            .with_prop("style", json!({"color": "red"}));
        let value = serde_json::to_value(&element).expect("serialize");
        assert_eq!(value["type"], "h1");
        assert_eq!(value["id"], "h1-1");
        assert!(value.get("children").is_none());
        assert!(value.get("size").is_none());

        let back: Element = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, element);
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let element = Element::new("input")
            .with_prop("type", "text")
            .with_prop("placeholder", "Enter text...")
            .with_prop("className", "px-3");
        let keys: Vec<_> = element.props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "placeholder", "className"]);
    }
}
