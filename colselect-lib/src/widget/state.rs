//! Caller-owned widget state and the actions that change it.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// One of the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Options not selected yet.
    Available,
    /// Options already selected.
    Selected,
}

/// The mutable part of a widget, owned by the caller.
///
/// The engine reads it and returns a new one; it never keeps a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetState {
    /// Selected values.
    pub selection: Vec<Value>,
    /// Filter text of the available side.
    pub filter_available: String,
    /// Filter text of the selected side.
    pub filter_selected: String,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with an initial selection.
    pub fn with_selection(selection: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            selection: selection.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the filter text of one side.
    pub fn with_filter(mut self, side: Side, text: impl Into<String>) -> Self {
        *self.filter_mut(side) = text.into();
        self
    }

    /// Filter text of one side.
    pub fn filter(&self, side: Side) -> &str {
        match side {
            Side::Available => &self.filter_available,
            Side::Selected => &self.filter_selected,
        }
    }

    pub(crate) fn filter_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Available => &mut self.filter_available,
            Side::Selected => &mut self.filter_selected,
        }
    }
}

/// A user action coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click on an available option.
    SelectOption(Value),
    /// Click on a selected option.
    DeselectOption(Value),
    /// Select every visible available option.
    SelectAll,
    /// Deselect every visible selected option.
    DeselectAll,
    /// Type into a filter input.
    SetFilter(Side, String),
    /// Use the clear affordance of a filter input.
    ClearFilter(Side),
}
