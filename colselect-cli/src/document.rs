//! On-disk widget document: configuration, catalog and caller state.

use std::path::Path;

use colselect_lib::model::validate_catalog;
use colselect_lib::{SelectOption, WidgetConfig, WidgetState};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Everything the CLI keeps between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub config: WidgetConfig,
    pub catalog: Vec<SelectOption>,
    pub state: WidgetState,
}

impl Document {
    /// Create a document with an empty selection.
    pub fn new(catalog: Vec<SelectOption>) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let document: Document =
            serde_json::from_str(&json).map_err(|e| CliError::json(path, e))?;
        if let Err(e) = validate_catalog(&document.catalog) {
            warn!("{}: {}", path.display(), e);
        }
        info!(
            "loaded {} options, {} selected from {}",
            document.catalog.len(),
            document.state.selection.len(),
            path.display()
        );
        Ok(document)
    }

    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| CliError::io(path, e))
    }
}

/// Read a bare catalog (a JSON array of options).
pub fn load_catalog(path: &Path) -> Result<Vec<SelectOption>, CliError> {
    let json = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| CliError::json(path, e))
}
