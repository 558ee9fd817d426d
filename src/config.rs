//! Table configuration: column descriptors and pagination bar settings.
//!
//! Loaded from a JSON file, or derived from table headers when no file is given:
//!
//! ```json
//! {
//!   "columns": [
//!     { "id": "id", "sorter": "increasing" },
//!     { "id": "name", "name": "Name", "sorter": "increasing-or-decreasing" }
//!   ],
//!   "settings": { "window_size": 5, "min_pages": 7 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sort::{Column, Sorter};
use crate::window::RenderSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no columns configured")]
    NoColumns,
    #[error("unknown sort column '{0}'")]
    UnknownColumn(String),
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub settings: RenderSettings,
}

impl TableConfig {
    /// Every header becomes an ascending-first reversible column.
    pub fn from_headers(headers: &[String]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column::new(h.clone(), Sorter::IncreasingOrDecreasing))
                .collect(),
            settings: RenderSettings::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Initial sort column: `requested` if configured, else the first sortable
    /// column, else the first column.
    pub fn initial_sort_column(&self, requested: Option<&str>) -> Result<String, ConfigError> {
        if let Some(id) = requested {
            return self
                .columns
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.id.clone())
                .ok_or_else(|| ConfigError::UnknownColumn(id.to_string()));
        }
        self.columns
            .iter()
            .find(|c| c.sorter != Sorter::Unsortable)
            .or_else(|| self.columns.first())
            .map(|c| c.id.clone())
            .ok_or(ConfigError::NoColumns)
    }
}
