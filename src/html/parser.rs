//! Minimal HTML scanner
//!
//! Understands elements, attributes (quoted, unquoted and bare), void
//! elements, comments and the common character entities. It is strict
//! about nesting: mismatched or unclosed tags are errors rather than being
//! silently repaired.

use super::{Content, Element};
use crate::image::ImageNode;
use crate::model::{Block, Document};
use crate::table::TableNode;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

/// Elements whose text becomes a paragraph block
const TEXT_BLOCKS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "li",
];

/// Deepest element nesting accepted by the scanner
pub const MAX_DEPTH: usize = 512;

/// Error type for HTML parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset into the input
    pub offset: Option<usize>,
}

impl ParseError {
    fn at(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "HTML parse error at byte {}: {}", offset, self.message),
            None => write!(f, "HTML parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse an HTML fragment into a content tree
pub fn parse_fragment(input: &str) -> Result<Vec<Content>, ParseError> {
    let mut root: Vec<Content> = Vec::new();
    // Open elements with the offset of their start tag
    let mut stack: Vec<(Element, usize)> = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if rest.starts_with("<!--") {
            let end = rest
                .find("-->")
                .ok_or_else(|| ParseError::at("unterminated comment", pos))?;
            pos += end + 3;
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = rest
                .find('>')
                .ok_or_else(|| ParseError::at("unterminated declaration", pos))?;
            pos += end + 1;
            continue;
        }

        if rest.starts_with("</") {
            let end = rest
                .find('>')
                .ok_or_else(|| ParseError::at("unterminated closing tag", pos))?;
            let name = rest[2..end].trim().to_ascii_lowercase();
            pos += end + 1;

            if VOID_ELEMENTS.contains(&name.as_str()) {
                continue;
            }

            let (element, _) = stack.pop().ok_or_else(|| {
                ParseError::at(format!("unexpected closing tag </{}>", name), pos - end - 1)
            })?;
            if element.tag != name {
                return Err(ParseError::at(
                    format!("expected </{}>, found </{}>", element.tag, name),
                    pos - end - 1,
                ));
            }
            push_content(&mut stack, &mut root, Content::Element(element));
            continue;
        }

        if rest.len() > 1 && rest.as_bytes()[0] == b'<' && rest.as_bytes()[1].is_ascii_alphabetic()
        {
            let (element, self_closing, consumed) =
                parse_start_tag(rest).map_err(|message| ParseError::at(message, pos))?;
            let start = pos;
            pos += consumed;

            if self_closing || VOID_ELEMENTS.contains(&element.tag.as_str()) {
                push_content(&mut stack, &mut root, Content::Element(element));
            } else {
                if stack.len() >= MAX_DEPTH {
                    return Err(ParseError::at("nesting too deep", start));
                }
                stack.push((element, start));
            }
            continue;
        }

        // Text runs up to the next '<' (a lone '<' that starts no tag is text)
        let end = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '<')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        push_content(
            &mut stack,
            &mut root,
            Content::Text(decode_entities(&rest[..end])),
        );
        pos += end;
    }

    if let Some((element, offset)) = stack.pop() {
        return Err(ParseError::at(format!("unclosed <{}>", element.tag), offset));
    }

    Ok(root)
}

fn push_content(stack: &mut [(Element, usize)], root: &mut Vec<Content>, content: Content) {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(content),
        None => root.push(content),
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':')
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Parse `<tag attr="v" ...>` at the start of `rest`
///
/// Returns the element, whether it was self-closing (`/>`), and the number
/// of bytes consumed. Tag syntax is ASCII, so byte offsets are always on
/// char boundaries.
fn parse_start_tag(rest: &str) -> Result<(Element, bool, usize), String> {
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    let mut element = Element::new(&rest[1..i]);

    loop {
        i = skip_whitespace(bytes, i);
        match bytes.get(i) {
            None => return Err(format!("unterminated <{}> tag", element.tag)),
            Some(b'>') => return Ok((element, false, i + 1)),
            Some(b'/') if bytes.get(i + 1) == Some(&b'>') => return Ok((element, true, i + 2)),
            Some(b'/') => i += 1,
            Some(_) => {
                let start = i;
                while i < bytes.len()
                    && !bytes[i].is_ascii_whitespace()
                    && !matches!(bytes[i], b'=' | b'>' | b'/')
                {
                    i += 1;
                }
                if i == start {
                    return Err(format!("malformed attribute in <{}>", element.tag));
                }
                let name = rest[start..i].to_ascii_lowercase();

                i = skip_whitespace(bytes, i);
                let value = if bytes.get(i) == Some(&b'=') {
                    i = skip_whitespace(bytes, i + 1);
                    match bytes.get(i) {
                        Some(&quote) if quote == b'"' || quote == b'\'' => {
                            let value_start = i + 1;
                            let len = rest[value_start..]
                                .find(quote as char)
                                .ok_or_else(|| {
                                    format!("unterminated attribute value in <{}>", element.tag)
                                })?;
                            i = value_start + len + 1;
                            decode_entities(&rest[value_start..value_start + len])
                        }
                        _ => {
                            let value_start = i;
                            while i < bytes.len()
                                && !bytes[i].is_ascii_whitespace()
                                && bytes[i] != b'>'
                            {
                                i += 1;
                            }
                            decode_entities(&rest[value_start..i])
                        }
                    }
                } else {
                    String::new()
                };

                element.attrs.push((name, value));
            }
        }
    }
}

/// Decode the handful of entities the renderer produces (plus `&nbsp;`)
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Parse serialized HTML into a document
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let contents = parse_fragment(input)?;
    let mut blocks = Vec::new();
    collect_blocks(&contents, &mut blocks);
    tracing::debug!(blocks = blocks.len(), "parsed html document");
    Ok(Document::with_blocks(blocks))
}

fn collect_blocks(contents: &[Content], blocks: &mut Vec<Block>) {
    for content in contents {
        match content {
            Content::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    blocks.push(Block::paragraph(text));
                }
            }
            Content::Element(el) => match el.tag.as_str() {
                "table" => blocks.push(Block::Table(TableNode::from_element(el))),
                "img" => blocks.push(Block::Image(ImageNode::from_element(el))),
                tag if TEXT_BLOCKS.contains(&tag) => {
                    if el.query_selector("img").is_some() || el.query_selector("table").is_some()
                    {
                        collect_blocks(&el.children, blocks);
                    } else {
                        blocks.push(Block::paragraph(el.text().trim()));
                    }
                }
                _ => collect_blocks(&el.children, blocks),
            },
        }
    }
}
