//! Typed laneboard settings

use crate::discovery::CONFIG_FILE_STEM;
use crate::error::{ConfigError, ConfigResult};
use laneboard_kanban::{ColumnId, LayoutMetrics, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Directory holding board data and project configuration
pub const DEFAULT_STORAGE_DIR: &str = ".laneboard";

/// Everything a laneboard front end needs to open and render a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory of the file blob store
    pub storage_dir: PathBuf,
    /// Key the card sequence is stored under
    pub storage_key: String,
    /// Rendered columns, left to right
    pub columns: Vec<String>,
    /// Grid geometry used when replaying drags
    pub layout: LayoutMetrics,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            columns: vec!["todo".into(), "in-progress".into(), "done".into()],
            layout: LayoutMetrics::default(),
        }
    }
}

impl BoardConfig {
    /// Columns as board identifiers
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| ColumnId::from(c.as_str())).collect()
    }

    /// Check that the settings describe a usable board
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::validation("storage_key must not be empty"));
        }
        // Blobs land next to project config files as `<key>.json`
        if self.storage_key.eq_ignore_ascii_case(CONFIG_FILE_STEM) {
            return Err(ConfigError::validation(format!(
                "storage_key '{}' would overwrite the configuration file",
                self.storage_key
            )));
        }

        if self.columns.is_empty() {
            return Err(ConfigError::validation("at least one column is required"));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.trim().is_empty() {
                return Err(ConfigError::validation("column names must not be empty"));
            }
            if !seen.insert(column.as_str()) {
                return Err(ConfigError::validation(format!(
                    "duplicate column '{}'",
                    column
                )));
            }
        }

        let layout = &self.layout;
        let sizes = [
            ("layout.column_width", layout.column_width),
            ("layout.card_height", layout.card_height),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::validation(format!(
                    "{} must be a positive number",
                    name
                )));
            }
        }
        let spacings = [
            ("layout.column_gap", layout.column_gap),
            ("layout.header_height", layout.header_height),
            ("layout.card_gap", layout.card_gap),
            ("layout.min_column_height", layout.min_column_height),
        ];
        for (name, value) in spacings {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::validation(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }

        Ok(())
    }
}
