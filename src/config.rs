//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/editcrafter/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid_selector::{TOTAL_COLS, TOTAL_ROWS};
use crate::theme::ThemeMode;

/// Default upload size limit (5 MiB)
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Light or dark appearance
    #[serde(default)]
    pub theme: ThemeMode,
    /// Table size picker extent
    #[serde(default)]
    pub grid: GridConfig,
    /// Defaults for new tables
    #[serde(default)]
    pub table: TableConfig,
    /// Image insertion and upload settings
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_rows")]
    pub rows: usize,
    #[serde(default = "default_grid_cols")]
    pub cols: usize,
}

fn default_grid_rows() -> usize {
    TOTAL_ROWS
}

fn default_grid_cols() -> usize {
    TOTAL_COLS
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_grid_rows(),
            cols: default_grid_cols(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Whether tables inserted from the picker start with a header row
    #[serde(default = "default_true")]
    pub with_header_row: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            with_header_row: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Render images inside a paragraph instead of as bare `<img>` blocks
    #[serde(default)]
    pub inline: bool,
    /// Allow base64 `data:` URLs as image sources
    #[serde(default = "default_true")]
    pub allow_base64: bool,
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            inline: false,
            allow_base64: true,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            grid: GridConfig::default(),
            table: TableConfig::default(),
            image: ImageConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
