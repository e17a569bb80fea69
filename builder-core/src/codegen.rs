//! Component code generation.
//!
//! Serializes the element list into a single React component source file.
//! Every top-level element becomes one JSX tag inside a wrapping `div`:
//!
//! ```text
//! import React from 'react';
//!
//! const GeneratedComponent = () => {
//!   return (
//!     <div className="min-h-screen">
//!       <h1 className="text-4xl font-bold" children="Heading 1" />
//!     </div>
//!   );
//! };
//!
//! export default GeneratedComponent;
//! ```
//!
//! String props are quoted; every other value is embedded as a JSON
//! expression (`key={...}`). Attribute order follows prop insertion order,
//! so output is deterministic for a given element list.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{BuilderError, BuilderResult, Element};

/// Deepest element nesting the generator will serialize.
pub const MAX_DEPTH: usize = 64;

/// Tags that never have children.
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr"];

/// Code generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Name of the exported component. Must start with an uppercase letter.
    pub component_name: String,
    /// `className` of the wrapping `div`.
    pub root_class_name: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            component_name: "GeneratedComponent".to_string(),
            root_class_name: "min-h-screen".to_string(),
            indent: 2,
        }
    }
}

impl CodegenConfig {
    /// Set the component name.
    #[must_use]
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// File name the generated source should be saved under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.component_name)
    }

    /// Check that the settings produce valid source text.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Serialization`] for a component name that is
    /// not a capitalized identifier or a root class containing a quote.
    pub fn validate(&self) -> BuilderResult<()> {
        if !is_component_name(&self.component_name) {
            return Err(BuilderError::Serialization(format!(
                "invalid component name: {:?}",
                self.component_name
            )));
        }
        if self.root_class_name.contains('"') {
            return Err(BuilderError::Serialization(format!(
                "invalid root class name: {:?}",
                self.root_class_name
            )));
        }
        Ok(())
    }
}

/// Whether `tag` is rendered without children (`img`, `input`, `br`, `hr`).
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Generate the component source for `elements`.
///
/// # Errors
///
/// Returns [`BuilderError::Serialization`] if an element type or prop key is
/// not a valid JSX name, a void element has children, nesting exceeds
/// [`MAX_DEPTH`], or the config is invalid.
pub fn generate_code(elements: &[Element], config: &CodegenConfig) -> BuilderResult<String> {
    config.validate()?;

    let mut body = String::new();
    for element in elements {
        render_element(&mut body, element, 3, 0, config)?;
    }

    let pad = |level: usize| " ".repeat(level * config.indent);
    let name = &config.component_name;

    let mut out = String::with_capacity(body.len() + 256);
    let _ = writeln!(out, "import React from 'react';");
    let _ = writeln!(out);
    let _ = writeln!(out, "const {name} = () => {{");
    let _ = writeln!(out, "{}return (", pad(1));
    let _ = writeln!(
        out,
        "{}<div className=\"{}\">",
        pad(2),
        config.root_class_name
    );
    out.push_str(&body);
    let _ = writeln!(out, "{}</div>", pad(2));
    let _ = writeln!(out, "{});", pad(1));
    let _ = writeln!(out, "}};");
    let _ = writeln!(out);
    let _ = writeln!(out, "export default {name};");

    tracing::debug!(
        elements = elements.len(),
        bytes = out.len(),
        "Generated component {name}"
    );
    Ok(out)
}

/// Render a single element (and its children) without the component wrapper.
///
/// # Errors
///
/// Same conditions as [`generate_code`].
pub fn render_markup(element: &Element, config: &CodegenConfig) -> BuilderResult<String> {
    let mut out = String::new();
    render_element(&mut out, element, 0, 0, config)?;
    Ok(out)
}

/// Render the attribute list of a props map, space separated.
///
/// # Errors
///
/// Returns [`BuilderError::Serialization`] if a key is not a valid attribute name.
pub fn render_attributes(props: &crate::Props) -> BuilderResult<String> {
    let mut out = String::new();
    for (key, value) in props {
        if !out.is_empty() {
            out.push(' ');
        }
        render_attribute(&mut out, key, value)?;
    }
    Ok(out)
}

fn render_element(
    out: &mut String,
    element: &Element,
    level: usize,
    depth: usize,
    config: &CodegenConfig,
) -> BuilderResult<()> {
    if depth >= MAX_DEPTH {
        return Err(BuilderError::Serialization(format!(
            "element {} nested deeper than {MAX_DEPTH} levels",
            element.id
        )));
    }
    if !is_tag_name(&element.kind) {
        return Err(BuilderError::Serialization(format!(
            "element {} has invalid type {:?}",
            element.id, element.kind
        )));
    }

    let pad = " ".repeat(level * config.indent);
    let tag = &element.kind;
    let attributes = render_attributes(&element.props)?;
    let open = if attributes.is_empty() {
        format!("<{tag}")
    } else {
        format!("<{tag} {attributes}")
    };

    if element.children.is_empty() {
        let _ = writeln!(out, "{pad}{open} />");
        return Ok(());
    }

    if is_void_element(tag) {
        return Err(BuilderError::Serialization(format!(
            "void element {} ({tag}) cannot have children",
            element.id
        )));
    }

    let _ = writeln!(out, "{pad}{open}>");
    for child in &element.children {
        render_element(out, child, level + 1, depth + 1, config)?;
    }
    let _ = writeln!(out, "{pad}</{tag}>");
    Ok(())
}

fn render_attribute(out: &mut String, key: &str, value: &serde_json::Value) -> BuilderResult<()> {
    if !is_attribute_name(key) {
        return Err(BuilderError::Serialization(format!(
            "invalid attribute name {key:?}"
        )));
    }
    match value {
        // Quoted JSX attributes cannot hold `"` and decode `&` entities.
        serde_json::Value::String(text) if !text.contains(['"', '&']) => {
            let _ = write!(out, "{key}=\"{text}\"");
        }
        other => {
            let json = serde_json::to_string(other)?;
            let _ = write!(out, "{key}={{{json}}}");
        }
    }
    Ok(())
}

/// `[A-Za-z][A-Za-z0-9_-]*`, or a member name such as `Card.Header`.
pub(crate) fn is_tag_name(name: &str) -> bool {
    if name.contains('.') {
        return name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.split('.').all(is_identifier);
    }
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '$'))
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$'))
}

/// `[A-Za-z_$][A-Za-z0-9_$:-]*`
pub(crate) fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '$'))
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | ':' | '-'))
}

fn is_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
