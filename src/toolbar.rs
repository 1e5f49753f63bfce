//! Toolbar model and image upload
//!
//! Customizations are passed in explicitly through [`ToolbarOptions`] when
//! the toolbar is built; nothing is looked up from ambient state.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::Engine;

use crate::config::ImageConfig;
use crate::image::ImageOptions;
use crate::model::{Document, NodeType};

/// Turns local files into image URLs
pub trait ImageUploader {
    /// Upload `files`, returning one URL per file in the same order
    fn upload(&mut self, files: &[PathBuf]) -> Result<Vec<String>>;
}

/// Default uploader: inlines files as `data:` URLs
///
/// When base64 sources are disallowed it falls back to `file://` URLs.
#[derive(Debug, Clone)]
pub struct DataUrlUploader {
    pub allow_base64: bool,
    pub max_file_size: u64,
}

impl DataUrlUploader {
    pub fn from_config(config: &ImageConfig) -> Self {
        Self {
            allow_base64: config.allow_base64,
            max_file_size: config.max_file_size,
        }
    }

    fn upload_one(&self, path: &Path) -> Result<String> {
        let size = std::fs::metadata(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .len();
        if size > self.max_file_size {
            bail!(
                "{} is {} bytes, larger than the {} byte limit",
                path.display(),
                size,
                self.max_file_size
            );
        }

        if !self.allow_base64 {
            let absolute = std::fs::canonicalize(path)
                .with_context(|| format!("Failed to resolve {}", path.display()))?;
            return Ok(format!("file://{}", absolute.display()));
        }

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:{};base64,{}", mime_type(path), encoded))
    }
}

impl ImageUploader for DataUrlUploader {
    fn upload(&mut self, files: &[PathBuf]) -> Result<Vec<String>> {
        files.iter().map(|path| self.upload_one(path)).collect()
    }
}

/// Guess an image MIME type from the file extension
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Explicit customizations for the toolbar
#[derive(Default)]
pub struct ToolbarOptions {
    /// Replaces the default data-URL uploader
    pub image_uploader: Option<Box<dyn ImageUploader>>,
}

impl fmt::Debug for ToolbarOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarOptions")
            .field("image_uploader", &self.image_uploader.is_some())
            .finish()
    }
}

/// Toolbar buttons this model knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarItem {
    /// Opens the table size picker
    Table,
    /// Opens the image uploader
    ImageUpload,
    /// Switches light/dark mode
    ThemeToggle,
}

/// Toolbar state
pub struct Toolbar {
    uploader: Box<dyn ImageUploader>,
    custom_uploader: bool,
}

impl fmt::Debug for Toolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolbar")
            .field("custom_uploader", &self.custom_uploader)
            .finish()
    }
}

impl Toolbar {
    pub fn new(options: ToolbarOptions, image: &ImageConfig) -> Self {
        match options.image_uploader {
            Some(uploader) => Self {
                uploader,
                custom_uploader: true,
            },
            None => Self {
                uploader: Box::new(DataUrlUploader::from_config(image)),
                custom_uploader: false,
            },
        }
    }

    /// Buttons in display order
    pub fn items(&self) -> &'static [ToolbarItem] {
        &[
            ToolbarItem::Table,
            ToolbarItem::ImageUpload,
            ToolbarItem::ThemeToggle,
        ]
    }

    /// Whether a button shows as active for the current selection
    pub fn is_active(&self, item: ToolbarItem, doc: &Document) -> bool {
        match item {
            ToolbarItem::Table => doc.is_active(NodeType::Table),
            ToolbarItem::ImageUpload => doc.is_active(NodeType::Image),
            ToolbarItem::ThemeToggle => false,
        }
    }

    /// Table button highlight: a table is focused
    pub fn table_button_active(&self, doc: &Document) -> bool {
        self.is_active(ToolbarItem::Table, doc)
    }

    pub fn has_custom_uploader(&self) -> bool {
        self.custom_uploader
    }

    /// Upload files through the configured uploader
    pub fn upload(&mut self, files: &[PathBuf]) -> Result<Vec<String>> {
        self.uploader.upload(files)
    }

    /// Upload files and insert one image per URL
    ///
    /// Returns the number of images inserted.
    pub fn upload_images(&mut self, doc: &mut Document, files: &[PathBuf]) -> Result<usize> {
        let urls = self.upload(files)?;
        Ok(insert_images(doc, &urls))
    }
}

/// Insert one image block per URL after the focused block
pub fn insert_images(doc: &mut Document, urls: &[String]) -> usize {
    let mut inserted = 0;
    for url in urls {
        if doc.chain().set_image(ImageOptions::new(url.as_str())).run() {
            inserted += 1;
        }
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedUploader(Vec<String>);

    impl ImageUploader for FixedUploader {
        fn upload(&mut self, _files: &[PathBuf]) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_custom_uploader_is_used() {
        let options = ToolbarOptions {
            image_uploader: Some(Box::new(FixedUploader(vec![
                "https://cdn.example/a.png".to_string(),
                "https://cdn.example/b.png".to_string(),
            ]))),
        };
        let mut toolbar = Toolbar::new(options, &ImageConfig::default());
        let mut doc = Document::new();

        assert!(toolbar.has_custom_uploader());
        assert_eq!(toolbar.upload_images(&mut doc, &[]).unwrap(), 2);
        assert_eq!(
            doc.block(1).unwrap().as_image().unwrap().src.as_deref(),
            Some("https://cdn.example/b.png")
        );
    }

    #[test]
    fn test_table_button_active() {
        let toolbar = Toolbar::new(ToolbarOptions::default(), &ImageConfig::default());
        let mut doc = Document::new();

        assert!(!toolbar.table_button_active(&doc));
        doc.chain().insert_table(2, 2, true).run();
        assert!(toolbar.table_button_active(&doc));
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn test_insert_images_counts_inserted_blocks() {
        let mut doc = Document::new();
        let urls = vec!["a.png".to_string(), String::new(), "b.png".to_string()];

        assert_eq!(insert_images(&mut doc, &urls), 2);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.focus().map(|f| f.block), Some(1));
    }
}
