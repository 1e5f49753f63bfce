//! Declarative node attribute schema
//!
//! Each node type lists its attributes as a static slice of [`AttributeSpec`]
//! records. Parsing, rendering and generic attribute updates all walk that
//! list the same way, so adding an attribute is one more record.

use std::fmt;

use crate::html::Element;

/// A dynamically typed attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Text(String),
}

impl AttrValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text value; `Null` and empty strings read as `None`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(s) => AttrValue::Text(s.to_string()),
            None => AttrValue::Null,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Rendered HTML attributes, in insertion order
pub type HtmlAttributes = Vec<(String, String)>;

/// One attribute of a node type `N`
pub struct AttributeSpec<N> {
    /// Attribute key, as used by `update_attributes`
    pub key: &'static str,
    /// Value used when parsing finds nothing
    pub default: fn() -> AttrValue,
    /// Read the value from a parsed element
    pub parse: fn(&Element) -> AttrValue,
    /// HTML attributes to emit for a value
    pub render: fn(&AttrValue) -> HtmlAttributes,
    /// Read the value from a node
    pub get: fn(&N) -> AttrValue,
    /// Write the value to a node; false when the value has the wrong type
    pub set: fn(&mut N, AttrValue) -> bool,
}

/// Apply every attribute's parse rule to `node`, falling back to defaults
pub fn parse_attributes<N>(specs: &[AttributeSpec<N>], element: &Element, node: &mut N) {
    for spec in specs {
        let value = match (spec.parse)(element) {
            AttrValue::Null => (spec.default)(),
            value => value,
        };
        if !(spec.set)(node, value) {
            tracing::debug!(key = spec.key, "ignoring unparsable attribute value");
        }
    }
}

/// Collect the rendered HTML attributes of `node`
pub fn render_attributes<N>(specs: &[AttributeSpec<N>], node: &N) -> HtmlAttributes {
    specs
        .iter()
        .flat_map(|spec| (spec.render)(&(spec.get)(node)))
        .collect()
}

/// Set a single attribute by key. Unknown keys and mistyped values are refused.
pub fn update_attribute<N>(
    specs: &[AttributeSpec<N>],
    node: &mut N,
    key: &str,
    value: AttrValue,
) -> bool {
    match specs.iter().find(|spec| spec.key == key) {
        Some(spec) => (spec.set)(node, value),
        None => {
            tracing::debug!(key, "unknown attribute");
            false
        }
    }
}

/// Merge attribute lists; later values win, except `class` and `style` which concatenate
pub fn merge_attributes(base: &[(String, String)], extra: &[(String, String)]) -> HtmlAttributes {
    let mut merged: HtmlAttributes = base.to_vec();

    for (key, value) in extra {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) if key == "class" => {
                *existing = format!("{} {}", existing, value);
            }
            Some((_, existing)) if key == "style" => {
                let sep = if existing.trim_end().ends_with(';') { " " } else { "; " };
                *existing = format!("{}{}{}", existing, sep, value);
            }
            Some((_, existing)) => *existing = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HtmlAttributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_attributes_overrides() {
        let merged = merge_attributes(&attrs(&[("id", "a")]), &attrs(&[("id", "b")]));
        assert_eq!(merged, attrs(&[("id", "b")]));
    }

    #[test]
    fn test_merge_attributes_concatenates_class_and_style() {
        let merged = merge_attributes(
            &attrs(&[("class", "table_wp"), ("style", "width: 100%")]),
            &attrs(&[("class", "wide"), ("style", "color: red")]),
        );
        assert_eq!(
            merged,
            attrs(&[
                ("class", "table_wp wide"),
                ("style", "width: 100%; color: red")
            ])
        );
    }

    #[test]
    fn test_attr_value_text_empty_is_none() {
        assert_eq!(AttrValue::Text(String::new()).as_text(), None);
        assert_eq!(AttrValue::from("x").as_text(), Some("x"));
        assert_eq!(AttrValue::Null.as_bool(), None);
    }
}
