//! Command-line argument parsing for the editcrafter tool
//!
//! Supports:
//! - Loading an HTML or Markdown document
//! - Inserting a table of a given size
//! - Printing the result as HTML or JSON

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::grid_selector::GridSize;

/// Output format for the rendered document
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Load, edit and print editor documents
#[derive(Parser, Debug)]
#[command(
    name = "editcrafter",
    version,
    about = "Load, edit and print editor documents"
)]
pub struct CliArgs {
    /// HTML (or Markdown with --markdown) file to load
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Insert a table of ROWSxCOLS after the last block, e.g. 3x4
    #[arg(long, value_name = "ROWSxCOLS")]
    pub insert_table: Option<String>,

    /// Insert the table without a header row
    #[arg(long)]
    pub no_header: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Treat INPUT as Markdown
    #[arg(long)]
    pub markdown: bool,
}

/// Where the starting document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Start with an empty document
    Empty,
    Html(PathBuf),
    Markdown(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub input: InputSource,
    /// Table to insert, if any
    pub table: Option<GridSize>,
    /// Header override for the inserted table; `None` uses the config default
    pub with_header_row: Option<bool>,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let input = match self.input {
            None if self.markdown => return Err("--markdown requires an INPUT file".to_string()),
            None => InputSource::Empty,
            Some(path) if self.markdown => InputSource::Markdown(path),
            Some(path) => InputSource::Html(path),
        };

        let table = self
            .insert_table
            .as_deref()
            .map(parse_table_size)
            .transpose()?;

        Ok(StartupConfig {
            input,
            table,
            with_header_row: self.no_header.then_some(false),
            format: self.format,
        })
    }
}

/// Parse `ROWSxCOLS` (also accepts `X` and `×`)
pub fn parse_table_size(value: &str) -> Result<GridSize, String> {
    let invalid = || format!("Invalid table size '{}', expected ROWSxCOLS", value);

    let (rows, cols) = value
        .split_once(|c: char| c == 'x' || c == 'X' || c == '×')
        .ok_or_else(invalid)?;
    let rows: usize = rows.trim().parse().map_err(|_| invalid())?;
    let cols: usize = cols.trim().parse().map_err(|_| invalid())?;
    if rows == 0 || cols == 0 {
        return Err(format!("Table size '{}' must be at least 1x1", value));
    }
    Ok(GridSize::new(rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>) -> CliArgs {
        CliArgs {
            input: input.map(PathBuf::from),
            insert_table: None,
            no_header: false,
            format: OutputFormat::Html,
            markdown: false,
        }
    }

    #[test]
    fn test_empty_args_gives_empty_input() {
        let config = args(None).into_config().unwrap();
        assert_eq!(config.input, InputSource::Empty);
        assert_eq!(config.table, None);
        assert_eq!(config.with_header_row, None);
    }

    #[test]
    fn test_markdown_input() {
        let mut a = args(Some("notes.md"));
        a.markdown = true;
        let config = a.into_config().unwrap();
        assert_eq!(config.input, InputSource::Markdown(PathBuf::from("notes.md")));
    }

    #[test]
    fn test_markdown_without_input_is_error() {
        let mut a = args(None);
        a.markdown = true;
        assert!(a.into_config().is_err());
    }

    #[test]
    fn test_insert_table_without_header() {
        let mut a = args(Some("doc.html"));
        a.insert_table = Some("3x4".to_string());
        a.no_header = true;
        let config = a.into_config().unwrap();
        assert_eq!(config.table, Some(GridSize::new(3, 4)));
        assert_eq!(config.with_header_row, Some(false));
    }

    #[test]
    fn test_parse_table_size() {
        assert_eq!(parse_table_size("2x5"), Ok(GridSize::new(2, 5)));
        assert_eq!(parse_table_size("2 × 5"), Ok(GridSize::new(2, 5)));
        assert!(parse_table_size("0x5").is_err());
        assert!(parse_table_size("three").is_err());
        assert!(parse_table_size("3x").is_err());
    }

    #[test]
    fn test_clap_parsing() {
        let args = CliArgs::parse_from(["editcrafter", "--insert-table", "2x2", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.insert_table.as_deref(), Some("2x2"));
    }
}
