//! Widget configuration types.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::model::Limit;
use crate::model::Value;

/// Per-widget configuration.
///
/// Everything the engine needs besides the catalog and the caller-owned
/// state. Deserializes from partial JSON, missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Show the filter inputs and apply filter text.
    pub searchable: bool,

    /// Maximum selection size (negative = unlimited).
    pub limit: Limit,

    /// Values emphasized on the available side.
    pub highlight: Vec<Value>,

    /// Disable the whole widget: no action changes the state.
    pub disabled: bool,

    /// Offer a clear affordance on non-empty filter inputs.
    pub clearable: bool,

    /// Show the select-all / deselect-all controls.
    pub show_controls: bool,

    /// Texts shown by the presentation layer.
    pub labels: Labels,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            searchable: false,
            limit: Limit::UNLIMITED,
            highlight: Vec::new(),
            disabled: false,
            clearable: true,
            show_controls: false,
            labels: Labels::default(),
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Enable filtering.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Cap the selection size.
    pub fn limit(mut self, limit: impl Into<Limit>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Set the highlighted values.
    pub fn highlight(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.highlight = values.into_iter().map(Into::into).collect();
        self
    }

    /// Disable the whole widget.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set whether filter inputs can be cleared.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Show the bulk selection controls.
    pub fn show_controls(mut self) -> Self {
        self.show_controls = true;
        self
    }

    /// Replace the label texts.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Texts for the controls and filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub clear_filter: String,
    pub select_all: String,
    pub deselect_all: String,
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            clear_filter: "Clear".to_string(),
            select_all: "Select all".to_string(),
            deselect_all: "Deselect all".to_string(),
            placeholder: String::new(),
        }
    }
}
