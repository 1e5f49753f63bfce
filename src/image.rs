//! Image node with alignment, sizing and metadata attributes

use serde::{Deserialize, Serialize};

use crate::html::Element;
use crate::schema::{parse_attributes, AttrValue, AttributeSpec, HtmlAttributes};

/// Horizontal alignment of an image block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    Left,
    Center,
    Right,
}

impl ImageAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageAlign::Left => "left",
            ImageAlign::Center => "center",
            ImageAlign::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(ImageAlign::Left),
            "center" => Some(ImageAlign::Center),
            "right" => Some(ImageAlign::Right),
            _ => None,
        }
    }
}

/// Image node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<ImageAlign>,
}

/// Options for inserting an image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub align: Option<ImageAlign>,
}

impl ImageOptions {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_align(mut self, align: ImageAlign) -> Self {
        self.align = Some(align);
        self
    }
}

impl From<ImageOptions> for ImageNode {
    fn from(options: ImageOptions) -> Self {
        Self {
            src: Some(options.src),
            alt: options.alt,
            title: options.title,
            width: options.width,
            height: options.height,
            align: options.align,
        }
    }
}

fn text_of(value: &Option<String>) -> AttrValue {
    AttrValue::from_option(value.as_deref())
}

/// Store a text value; `Null` clears the field
fn store_text(field: &mut Option<String>, value: AttrValue) -> bool {
    match value {
        AttrValue::Null => {
            *field = None;
            true
        }
        AttrValue::Text(s) => {
            *field = if s.is_empty() { None } else { Some(s) };
            true
        }
        AttrValue::Bool(_) => false,
    }
}

/// Render `name="value"` when the value is non-empty
fn render_as(name: &str, value: &AttrValue) -> HtmlAttributes {
    match value.as_text() {
        Some(v) => vec![(name.to_string(), v.to_string())],
        None => HtmlAttributes::new(),
    }
}

/// Attributes of the `image` node
pub static IMAGE_ATTRIBUTES: &[AttributeSpec<ImageNode>] = &[
    AttributeSpec {
        key: "src",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("src")),
        render: |v| render_as("src", v),
        get: |img| text_of(&img.src),
        set: |img, v| store_text(&mut img.src, v),
    },
    AttributeSpec {
        key: "alt",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("alt")),
        render: |v| render_as("alt", v),
        get: |img| text_of(&img.alt),
        set: |img, v| store_text(&mut img.alt, v),
    },
    AttributeSpec {
        key: "title",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("title")),
        render: |v| render_as("title", v),
        get: |img| text_of(&img.title),
        set: |img, v| store_text(&mut img.title, v),
    },
    AttributeSpec {
        key: "width",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("width")),
        render: |v| render_as("width", v),
        get: |img| text_of(&img.width),
        set: |img, v| store_text(&mut img.width, v),
    },
    AttributeSpec {
        key: "height",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("height")),
        render: |v| render_as("height", v),
        get: |img| text_of(&img.height),
        set: |img, v| store_text(&mut img.height, v),
    },
    AttributeSpec {
        key: "align",
        default: || AttrValue::Null,
        parse: |el| AttrValue::from_option(el.attr("data-align")),
        render: |v| render_as("data-align", v),
        get: |img| AttrValue::from_option(img.align.map(ImageAlign::as_str)),
        set: |img, v| match v {
            AttrValue::Null => {
                img.align = None;
                true
            }
            AttrValue::Text(s) if s.is_empty() => {
                img.align = None;
                true
            }
            AttrValue::Text(s) => match ImageAlign::parse(&s) {
                Some(align) => {
                    img.align = Some(align);
                    true
                }
                None => false,
            },
            AttrValue::Bool(_) => false,
        },
    },
];

impl ImageNode {
    /// Build an image from a parsed `<img>` element
    pub fn from_element(element: &Element) -> Self {
        let mut image = ImageNode::default();
        parse_attributes(IMAGE_ATTRIBUTES, element, &mut image);
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use crate::schema::{render_attributes, update_attribute};

    fn img(html: &str) -> Element {
        parse_fragment(html)
            .unwrap()
            .remove(0)
            .into_element()
            .unwrap()
    }

    #[test]
    fn test_parse_all_attributes() {
        let image = ImageNode::from_element(&img(
            r#"<img src="a.png" alt="A" title="T" width="320" height="200" data-align="center">"#,
        ));

        assert_eq!(image.src.as_deref(), Some("a.png"));
        assert_eq!(image.alt.as_deref(), Some("A"));
        assert_eq!(image.title.as_deref(), Some("T"));
        assert_eq!(image.width.as_deref(), Some("320"));
        assert_eq!(image.height.as_deref(), Some("200"));
        assert_eq!(image.align, Some(ImageAlign::Center));
    }

    #[test]
    fn test_unknown_align_is_ignored() {
        let image = ImageNode::from_element(&img(r#"<img src="a.png" data-align="middle">"#));

        assert_eq!(image.align, None);
    }

    #[test]
    fn test_render_skips_missing() {
        let image = ImageNode::from(ImageOptions::new("a.png").with_align(ImageAlign::Right));

        assert_eq!(
            render_attributes(IMAGE_ATTRIBUTES, &image),
            vec![
                ("src".to_string(), "a.png".to_string()),
                ("data-align".to_string(), "right".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_align_rejects_unknown() {
        let mut image = ImageNode::from(ImageOptions::new("a.png"));

        assert!(!update_attribute(
            IMAGE_ATTRIBUTES,
            &mut image,
            "align",
            AttrValue::from("diagonal")
        ));
        assert!(update_attribute(
            IMAGE_ATTRIBUTES,
            &mut image,
            "align",
            AttrValue::from("left")
        ));
        assert_eq!(image.align, Some(ImageAlign::Left));
    }
}
