//! Land-cover class legend
//!
//! The legend file is a JSON object keyed by class code:
//!
//! ```json
//! { "3": { "PT": "Formação Florestal", "HEX_COL": "#1f8d49" } }
//! ```

use crate::domain::{MapExportError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Colour used for codes missing from the legend
pub const UNKNOWN_COLOUR: &str = "#808080";

/// One legend entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegendEntry {
    /// Display name
    #[serde(rename = "PT")]
    pub name: String,

    /// Hex colour, e.g. `#1f8d49`
    #[serde(rename = "HEX_COL")]
    pub colour: String,
}

/// Class code lookup
#[derive(Debug, Clone, Default)]
pub struct Legend {
    entries: HashMap<u64, LegendEntry>,
}

impl Legend {
    /// Loads a legend JSON file
    ///
    /// Keys that are not integer class codes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object
    /// of legend entries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MapExportError::Io(format!("Failed to read legend {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parses legend JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, LegendEntry> = serde_json::from_str(content)?;

        let entries = raw
            .into_iter()
            .filter_map(|(code, entry)| match code.trim().parse::<u64>() {
                Ok(code) => Some((code, entry)),
                Err(_) => {
                    tracing::debug!(key = %code, "Ignoring non-numeric legend key");
                    None
                }
            })
            .collect();

        Ok(Self { entries })
    }

    /// Loads the legend, or falls back to an empty one with a warning
    pub fn load_or_empty(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(legend) => {
                tracing::info!(path = %path, classes = legend.len(), "Loaded class legend");
                legend
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to load legend, using class codes");
                Self::default()
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the legend has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `code`, if any
    pub fn get(&self, code: u64) -> Option<&LegendEntry> {
        self.entries.get(&code)
    }

    /// Display name for `code`
    pub fn name(&self, code: u64) -> String {
        self.get(code)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| format!("Class {code} (not in legend)"))
    }

    /// Colour for `code`
    pub fn colour(&self, code: u64) -> &str {
        self.get(code)
            .map(|entry| entry.colour.as_str())
            .unwrap_or(UNKNOWN_COLOUR)
    }
}
