//! HTML serialization for documents
//!
//! The serialized form is plain HTML: `<p>` paragraphs, `<img>` images and
//! `<table>` blocks with an optional `<thead>` holding the header row.
//!
//! Parsing goes through a small tag scanner that builds an [`Element`] tree;
//! node types then read their attributes from that tree through the
//! [`schema`](crate::schema) records.

mod parser;
mod render;

pub use parser::{parse_document, parse_fragment, ParseError};
pub use render::{escape_html, render_block, render_document, render_document_with, HtmlOptions};

/// A parsed element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Lowercased tag name
    pub tag: String,
    /// Attributes in source order, names lowercased
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Content>,
}

/// Child content of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Content {
    pub fn into_element(self) -> Option<Element> {
        match self {
            Content::Element(el) => Some(el),
            Content::Text(_) => None,
        }
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Content::Element(el) => Some(el),
            Content::Text(_) => None,
        })
    }

    /// First descendant with the given tag, depth first
    pub fn query_selector(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.tag == tag {
                Some(child)
            } else {
                child.query_selector(tag)
            }
        })
    }

    /// All descendants with the given tag, in document order
    pub fn descendants(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                found.push(child);
            } else {
                child.collect_descendants(tag, found);
            }
        }
    }

    /// Concatenated text of all descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Content::Text(t) => out.push_str(t),
                Content::Element(el) => el.collect_text(out),
            }
        }
    }
}
