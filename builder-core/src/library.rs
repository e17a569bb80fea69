//! Component template library shown in the builder sidebar.
//!
//! | Category    | Template       | Tag      |
//! |-------------|----------------|----------|
//! | Layout      | Container      | `div`    |
//! | Layout      | Flex Container | `div`    |
//! | Layout      | Grid Container | `div`    |
//! | Typography  | Heading 1      | `h1`     |
//! | Typography  | Heading 2      | `h2`     |
//! | Typography  | Paragraph      | `p`      |
//! | Interactive | Button         | `button` |
//! | Interactive | Input          | `input`  |
//! | Media       | Image          | `img`    |

use serde::{Deserialize, Serialize};

use crate::{BuilderError, BuilderResult, ElementId, Props};

/// Payload carried from the sidebar to the canvas while a template is dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Tag of the element to create.
    #[serde(rename = "type")]
    pub kind: String,
    /// Default props copied onto the new element.
    pub props: Props,
    /// Id stamped when the drag started. Replaced on drop.
    pub id: ElementId,
}

/// A predefined component the user can drag onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Display name, also the search key.
    pub name: String,
    /// Tag of the created element.
    #[serde(rename = "type")]
    pub kind: String,
    /// Props the created element starts with.
    pub default_props: Props,
}

impl Template {
    fn new(name: &str, kind: &str, default_props: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            default_props: default_props
                .iter()
                .map(|(k, v)| ((*k).to_string(), serde_json::Value::from(*v)))
                .collect(),
        }
    }

    /// Start a drag of this template.
    #[must_use]
    pub fn payload(&self) -> DragPayload {
        DragPayload {
            kind: self.kind.clone(),
            props: self.default_props.clone(),
            id: ElementId::generate(&self.kind),
        }
    }
}

/// A named group of templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category title.
    pub name: String,
    /// Templates in display order.
    pub templates: Vec<Template>,
}

/// The full set of templates, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    categories: Vec<Category>,
}

impl Default for Library {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Library {
    /// Build a library from explicit categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in component library.
    #[must_use]
    pub fn builtin() -> Self {
        const PANEL: &str = "p-4 border border-gray-200 rounded-lg";
        Self::new(vec![
            Category {
                name: "Layout".to_string(),
                templates: vec![
                    Template::new(
                        "Container",
                        "div",
                        &[("className", PANEL), ("children", "Container")],
                    ),
                    Template::new(
                        "Flex Container",
                        "div",
                        &[
                            ("className", format!("flex gap-4 {PANEL}").as_str()),
                            ("children", "Flex Container"),
                        ],
                    ),
                    Template::new(
                        "Grid Container",
                        "div",
                        &[
                            ("className", format!("grid grid-cols-2 gap-4 {PANEL}").as_str()),
                            ("children", "Grid Container"),
                        ],
                    ),
                ],
            },
            Category {
                name: "Typography".to_string(),
                templates: vec![
                    Template::new(
                        "Heading 1",
                        "h1",
                        &[("className", "text-4xl font-bold"), ("children", "Heading 1")],
                    ),
                    Template::new(
                        "Heading 2",
                        "h2",
                        &[
                            ("className", "text-3xl font-semibold"),
                            ("children", "Heading 2"),
                        ],
                    ),
                    Template::new(
                        "Paragraph",
                        "p",
                        &[
                            ("className", "text-base text-gray-700"),
                            ("children", "This is a paragraph of text."),
                        ],
                    ),
                ],
            },
            Category {
                name: "Interactive".to_string(),
                templates: vec![
                    Template::new(
                        "Button",
                        "button",
                        &[
                            (
                                "className",
                                "px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600",
                            ),
                            ("children", "Click me"),
                        ],
                    ),
                    Template::new(
                        "Input",
                        "input",
                        &[
                            ("type", "text"),
                            ("placeholder", "Enter text..."),
                            (
                                "className",
                                "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                            ),
                        ],
                    ),
                ],
            },
            Category {
                name: "Media".to_string(),
                templates: vec![Template::new(
                    "Image",
                    "img",
                    &[
                        (
                            "src",
                            "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=400&h=300&fit=crop",
                        ),
                        ("alt", "Placeholder image"),
                        ("className", "w-full h-48 object-cover rounded-lg"),
                    ],
                )],
            },
        ])
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Iterate over every template.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.categories.iter().flat_map(|c| c.templates.iter())
    }

    /// Categories filtered to templates whose name contains `term`
    /// (case-insensitive). Categories left empty are dropped.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Category> {
        let needle = term.to_lowercase();
        self.categories
            .iter()
            .filter_map(|category| {
                let templates: Vec<_> = category
                    .templates
                    .iter()
                    .filter(|t| t.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!templates.is_empty()).then(|| Category {
                    name: category.name.clone(),
                    templates,
                })
            })
            .collect()
    }

    /// Find a template by exact name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownTemplate`] if no template matches.
    pub fn find(&self, name: &str) -> BuilderResult<&Template> {
        self.templates()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BuilderError::UnknownTemplate(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let library = Library::builtin();
        let names: Vec<_> = library.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Layout", "Typography", "Interactive", "Media"]);
        assert_eq!(library.templates().count(), 9);
    }

    #[test]
    fn test_search_is_case_insensitive_and_drops_empty() {
        let library = Library::builtin();
        let result = library.search("CONTAINER");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Layout");
        assert_eq!(result[0].templates.len(), 3);

        let result = library.search("heading");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].templates.len(), 2);

        assert!(library.search("nothing-matches").is_empty());
        assert_eq!(library.search("").len(), 4);
    }

    #[test]
    fn test_find_and_payload() {
        let library = Library::builtin();
        let input = library.find("input").expect("template");
        assert_eq!(input.kind, "input");
        let keys: Vec<_> = input.default_props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "placeholder", "className"]);

        let payload = input.payload();
        assert_eq!(payload.kind, "input");
        assert_eq!(payload.props, input.default_props);
        assert!(payload.id.as_str().starts_with("input-"));

        assert!(matches!(
            library.find("Carousel"),
            Err(BuilderError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_flex_container_class() {
        let library = Library::builtin();
        let flex = library.find("Flex Container").expect("template");
        assert_eq!(
            flex.default_props["className"],
            "flex gap-4 p-4 border border-gray-200 rounded-lg"
        );
    }
}
