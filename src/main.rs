use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use editcrafter::cli::{CliArgs, InputSource, OutputFormat, StartupConfig};
use editcrafter::html::{parse_document, render_document_with, HtmlOptions};
use editcrafter::markdown::import_markdown;
use editcrafter::model::Document;
use editcrafter::EditorConfig;

fn main() -> Result<()> {
    editcrafter::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    let config = EditorConfig::load();

    let mut doc = load_document(&startup.input)?;
    insert_table(&mut doc, &startup, &config);

    let output = match startup.format {
        OutputFormat::Html => {
            render_document_with(&doc, &HtmlOptions::from_image_config(&config.image))
        }
        OutputFormat::Json => doc.to_json().context("Failed to serialize document")?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

fn load_document(input: &InputSource) -> Result<Document> {
    match input {
        InputSource::Empty => Ok(Document::new()),
        InputSource::Html(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_document(&source).with_context(|| format!("Failed to parse {}", path.display()))
        }
        InputSource::Markdown(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(import_markdown(&source))
        }
    }
}

fn insert_table(doc: &mut Document, startup: &StartupConfig, config: &EditorConfig) {
    let Some(size) = startup.table else {
        return;
    };
    let with_header_row = startup
        .with_header_row
        .unwrap_or(config.table.with_header_row);

    if let Some(last) = doc.len().checked_sub(1) {
        doc.set_focus(last, None);
    }
    if doc
        .chain()
        .focus()
        .insert_table(size.rows, size.cols, with_header_row)
        .run()
    {
        tracing::info!(%size, with_header_row, "inserted table");
    }
}
