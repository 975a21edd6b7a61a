//! Tree-node element type and XML text rendering.
//!
//! [`Element`] is the report's atomic unit: a named node carrying
//! insertion-ordered string attributes, an ordered list of children, and an
//! optional scalar text value. Handlers build elements bottom-up and hand
//! them to a reporter, which renders them as pretty-printed XML.
//!
//! The same type doubles as the shape of plugin configuration subtrees on
//! the payload models, so configuration parameters can be copied into the
//! report verbatim.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Indentation written per nesting level when rendering.
const INDENT: &str = "  ";

/// A named tree node with attributes, children, and an optional text value.
///
/// Attribute order is insertion order; setting an attribute whose key is
/// already present replaces the value in place. Children keep their append
/// order. Equality is structural.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            value: None,
        }
    }

    /// Create an element carrying a scalar text value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.value = Some(value.into());
        element
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar text value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Set or replace the scalar text value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Set an attribute, replacing any existing value under the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    /// Attribute value under `key`, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with `key` is present.
    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == key)
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Append a child element.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child named `name`, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Children in append order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Render as pretty-printed XML, without a document declaration and
    /// without a trailing newline.
    #[must_use]
    pub fn to_xml(&self) -> String {
        self.to_xml_at(0)
    }

    /// Render as pretty-printed XML starting at the given nesting depth.
    ///
    /// Used by reporters that frame appended elements inside a document
    /// root of their own.
    #[must_use]
    pub fn to_xml_at(&self, depth: usize) -> String {
        let mut out = String::new();
        self.render(&mut out, depth);
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value, true));
            out.push('"');
        }

        if self.children.is_empty() {
            match &self.value {
                Some(value) => {
                    out.push('>');
                    out.push_str(&escape(value, false));
                    out.push_str("</");
                    out.push_str(&self.name);
                    out.push('>');
                }
                None => out.push_str("/>"),
            }
            return;
        }

        out.push('>');
        if let Some(value) = &self.value {
            out.push('\n');
            indent(out, depth + 1);
            out.push_str(&escape(value, false));
        }
        for child in &self.children {
            out.push('\n');
            child.render(out, depth + 1);
        }
        out.push('\n');
        indent(out, depth);
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Escape markup-significant characters; `attribute` additionally escapes
/// double quotes.
fn escape(raw: &str, attribute: bool) -> Cow<'_, str> {
    let needs_escape = raw
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>') || (attribute && c == '"'));
    if !needs_escape {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
