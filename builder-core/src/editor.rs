//! Property panel helpers.
//!
//! Edits go through the store as whole-field replacements: a single prop
//! change reads the current props, changes one key and writes the full map
//! back; an axis change writes the full position.

use serde::{Deserialize, Serialize};

use crate::{Axis, BuilderStore, Element, ElementId, ElementUpdate, Position};

/// `type` values offered for `input` elements.
pub const INPUT_TYPES: &[&str] = &["text", "email", "password", "number", "tel", "url"];

/// Quick style: drop shadow.
pub const SHADOW_CLASS: &str = "shadow-lg";

/// Quick style: rounded corners.
pub const ROUNDED_CLASS: &str = "rounded-lg";

/// Widget the property panel uses for a prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum PropertyInput {
    /// Multi-line text.
    TextArea,
    /// Choice from a fixed list.
    Select(Vec<String>),
    /// Single-line text.
    Text,
}

/// Pick the input widget for `key` on an element of type `element_type`.
#[must_use]
pub fn input_kind(element_type: &str, key: &str, value: &serde_json::Value) -> PropertyInput {
    match key {
        "className" => PropertyInput::TextArea,
        "children" if value.is_string() => PropertyInput::TextArea,
        "type" if element_type == "input" => {
            PropertyInput::Select(INPUT_TYPES.iter().map(ToString::to_string).collect())
        }
        _ => PropertyInput::Text,
    }
}

/// Human label for a prop key: camelCase split into capitalized words.
///
/// `className` becomes `Class Name`.
#[must_use]
pub fn prop_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_ascii_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

/// Set one prop on an element, keeping the others and their order.
///
/// Returns the updated element, or `None` if the element does not exist.
pub fn set_prop<'a>(
    store: &'a mut BuilderStore,
    id: &ElementId,
    key: &str,
    value: serde_json::Value,
) -> Option<&'a Element> {
    let mut props = store.element(id)?.props.clone();
    props.insert(key.to_string(), value);
    store.update_element(id, ElementUpdate::props(props))
}

/// Set one axis of an element's position, keeping the other.
pub fn set_position_axis<'a>(
    store: &'a mut BuilderStore,
    id: &ElementId,
    axis: Axis,
    value: f64,
) -> Option<&'a Element> {
    let current = store.element(id)?.position;
    let position = match axis {
        Axis::X => Position::new(value, current.y),
        Axis::Y => Position::new(current.x, value),
    };
    store.update_element(id, ElementUpdate::position(position))
}

/// Append a CSS class to the element's `className`.
pub fn append_class<'a>(
    store: &'a mut BuilderStore,
    id: &ElementId,
    class: &str,
) -> Option<&'a Element> {
    let existing = store
        .element(id)?
        .prop_str("className")
        .unwrap_or_default()
        .to_string();
    let combined = format!("{existing} {class}").trim().to_string();
    set_prop(store, id, "className", combined.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_with(element: Element) -> (BuilderStore, ElementId) {
        let mut store = BuilderStore::new();
        let id = store.add_element(element).expect("add");
        (store, id)
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(
            input_kind("div", "className", &json!("p-4")),
            PropertyInput::TextArea
        );
        assert_eq!(
            input_kind("p", "children", &json!("hi")),
            PropertyInput::TextArea
        );
        assert_eq!(input_kind("p", "children", &json!(3)), PropertyInput::Text);
        match input_kind("input", "type", &json!("text")) {
            PropertyInput::Select(options) => assert_eq!(options.len(), INPUT_TYPES.len()),
            other => panic!("expected select, got {other:?}"),
        }
        assert_eq!(input_kind("button", "type", &json!("submit")), PropertyInput::Text);
        assert_eq!(input_kind("img", "src", &json!("a.png")), PropertyInput::Text);
    }

    #[test]
    fn test_prop_label() {
        assert_eq!(prop_label("className"), "Class Name");
        assert_eq!(prop_label("children"), "Children");
        assert_eq!(prop_label("ariaLabelledBy"), "Aria Labelled By");
        assert_eq!(prop_label(""), "");
    }

    #[test]
    fn test_set_prop_keeps_order() {
        let (mut store, id) = store_with(
            Element::new("button")
                .with_prop("className", "px-4")
                .with_prop("children", "Click me"),
        );
        let updated = set_prop(&mut store, &id, "children", json!("Submit")).expect("updated");
        let keys: Vec<_> = updated.props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["className", "children"]);
        assert_eq!(updated.prop_str("children"), Some("Submit"));

        set_prop(&mut store, &id, "disabled", json!(true));
        assert_eq!(store.element(&id).expect("exists").props.len(), 3);
    }

    #[test]
    fn test_set_position_axis() {
        let (mut store, id) =
            store_with(Element::new("div").with_position(Position::new(10.0, 20.0)));
        set_position_axis(&mut store, &id, Axis::X, 99.0);
        assert_eq!(
            store.element(&id).expect("exists").position,
            Position::new(99.0, 20.0)
        );
        set_position_axis(&mut store, &id, Axis::Y, -5.0);
        assert_eq!(
            store.element(&id).expect("exists").position,
            Position::new(99.0, -5.0)
        );
    }

    #[test]
    fn test_append_class() {
        let (mut store, id) = store_with(Element::new("div").with_prop("className", "p-4"));
        append_class(&mut store, &id, SHADOW_CLASS);
        append_class(&mut store, &id, ROUNDED_CLASS);
        assert_eq!(
            store.element(&id).expect("exists").prop_str("className"),
            Some("p-4 shadow-lg rounded-lg")
        );

        let (mut store, id) = store_with(Element::new("div"));
        append_class(&mut store, &id, SHADOW_CLASS);
        assert_eq!(
            store.element(&id).expect("exists").prop_str("className"),
            Some("shadow-lg")
        );
    }

    #[test]
    fn test_edits_on_missing_element() {
        let mut store = BuilderStore::new();
        let missing = ElementId::from("missing");
        assert!(set_prop(&mut store, &missing, "a", json!(1)).is_none());
        assert!(set_position_axis(&mut store, &missing, Axis::X, 1.0).is_none());
        assert!(append_class(&mut store, &missing, SHADOW_CLASS).is_none());
    }
}
