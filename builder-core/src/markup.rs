//! Parser for the markup produced by [`crate::codegen`].
//!
//! Accepts exactly the subset the generator emits: tags with quoted string
//! attributes, `{json}` expression attributes and bare boolean attributes,
//! self-closing or wrapping child tags. Text nodes are not supported.

use crate::{BuilderError, BuilderResult, Element, Props};

/// A parsed tag.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    /// Tag name.
    pub kind: String,
    /// Attributes in source order.
    pub props: Props,
    /// Nested tags.
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Convert into an element with a fresh id at the canvas origin.
    #[must_use]
    pub fn into_element(self) -> Element {
        let mut element = Element::new(self.kind).with_props(self.props);
        element.children = self
            .children
            .into_iter()
            .map(MarkupNode::into_element)
            .collect();
        element
    }
}

/// Parse an attribute list such as `className="p-4" style={{"color":"red"}}`.
///
/// # Errors
///
/// Returns [`BuilderError::Parse`] on malformed input and
/// [`BuilderError::Json`] if an expression is not valid JSON.
pub fn parse_attributes(input: &str) -> BuilderResult<Props> {
    let mut parser = Parser::new(input);
    let props = parser.attributes()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(parser.error("unexpected character in attribute list"));
    }
    Ok(props)
}

/// Parse a sequence of sibling tags.
///
/// # Errors
///
/// Returns [`BuilderError::Parse`] on malformed markup.
pub fn parse_markup(input: &str) -> BuilderResult<Vec<MarkupNode>> {
    let mut parser = Parser::new(input);
    let mut nodes = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.at_end() {
            return Ok(nodes);
        }
        nodes.push(parser.node(1)?);
    }
}

/// Parse a generated component file and return the tags inside its wrapper `div`.
///
/// # Errors
///
/// Returns [`BuilderError::Parse`] if the source has no `return (` block or
/// the wrapper markup is malformed.
pub fn parse_component(source: &str) -> BuilderResult<Vec<MarkupNode>> {
    let start = source
        .find("return (")
        .ok_or_else(|| BuilderError::Parse("missing `return (` block".to_string()))?;
    let mut parser = Parser::new(&source[start + "return (".len()..]);
    parser.skip_whitespace();
    // The wrapper does not count towards the nesting limit.
    let root = parser.node(0)?;
    Ok(root.children)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn error(&self, message: &str) -> BuilderError {
        BuilderError::Parse(format!("{message} at offset {}", self.pos))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, token: &str) -> BuilderResult<()> {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            Ok(())
        } else {
            Err(self.error(&format!("expected `{token}`")))
        }
    }

    fn name(&mut self) -> BuilderResult<&'a str> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b':' | b'-' | b'.'))
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("expected a name"));
        }
        Ok(&self.src[start..self.pos])
    }

    /// Parse one tag. `depth` is its nesting level, 1 for a top-level tag.
    fn node(&mut self, depth: usize) -> BuilderResult<MarkupNode> {
        if depth > crate::codegen::MAX_DEPTH {
            return Err(self.error("markup nested too deeply"));
        }
        self.expect("<")?;
        let kind = self.name()?.to_string();
        let props = self.attributes()?;
        self.skip_whitespace();

        if self.rest().starts_with("/>") {
            self.pos += 2;
            return Ok(MarkupNode {
                kind,
                props,
                children: Vec::new(),
            });
        }
        self.expect(">")?;

        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            if self.rest().starts_with("</") {
                self.pos += 2;
                let closing = self.name()?;
                if closing != kind {
                    return Err(self.error(&format!(
                        "closing tag `{closing}` does not match `{kind}`"
                    )));
                }
                self.skip_whitespace();
                self.expect(">")?;
                return Ok(MarkupNode {
                    kind,
                    props,
                    children,
                });
            }
            if self.at_end() {
                return Err(self.error(&format!("unclosed tag `{kind}`")));
            }
            if self.peek() != Some(b'<') {
                return Err(self.error("text content is not supported"));
            }
            children.push(self.node(depth + 1)?);
        }
    }

    fn attributes(&mut self) -> BuilderResult<Props> {
        let mut props = Props::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b'/' | b'>') => return Ok(props),
                Some(_) => {}
            }
            let key = self.name()?.to_string();
            let value = if self.peek() == Some(b'=') {
                self.pos += 1;
                self.attribute_value()?
            } else {
                // Bare attribute, as in `<input disabled />`.
                serde_json::Value::Bool(true)
            };
            props.insert(key, value);
        }
    }

    fn attribute_value(&mut self) -> BuilderResult<serde_json::Value> {
        match self.peek() {
            Some(b'"') => {
                self.pos += 1;
                let end = self
                    .rest()
                    .find('"')
                    .ok_or_else(|| self.error("unterminated string attribute"))?;
                let text = &self.src[self.pos..self.pos + end];
                self.pos += end + 1;
                Ok(serde_json::Value::String(text.to_string()))
            }
            Some(b'{') => {
                let start = self.pos + 1;
                let end = self.expression_end()?;
                let value = serde_json::from_str(&self.src[start..end])?;
                self.pos = end + 1;
                Ok(value)
            }
            _ => Err(self.error("expected `\"` or `{`")),
        }
    }

    /// Offset of the `}` closing the expression that starts at `self.pos`.
    fn expression_end(&self) -> BuilderResult<usize> {
        let bytes = self.src.as_bytes();
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        for (offset, &byte) in bytes[self.pos..].iter().enumerate() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if byte == b'\\' {
                    escaped = true;
                } else if byte == b'"' {
                    in_string = false;
                }
                continue;
            }
            match byte {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.pos + offset);
                    }
                }
                _ => {}
            }
        }
        Err(self.error("unterminated expression attribute"))
    }
}
