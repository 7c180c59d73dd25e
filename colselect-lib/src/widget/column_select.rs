//! The stateless column select service.

use std::sync::Arc;

use log::{debug, trace};

use super::Action;
use super::ControlState;
use super::Side;
use super::WidgetConfig;
use super::WidgetState;
use crate::engine::mutate;
use crate::engine::{FilterPredicate, SubstringFilter, decorate, filter, partition, undecorated};
use crate::model::RenderedOption;
use crate::model::SelectOption;

/// The two rendered lists of a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lists<'a> {
    /// Visible options not yet selected, with derived flags.
    pub available: Vec<RenderedOption<'a>>,
    /// Visible selected options.
    pub selected: Vec<RenderedOption<'a>>,
}

/// A dual-list selection widget without any state of its own.
///
/// Holds only immutable configuration and the filter predicate. The caller
/// passes its catalog and [`WidgetState`] in on every call and stores the
/// state returned by [`apply`](Self::apply).
///
/// # Example
///
/// ```
/// use colselect_lib::{Action, ColumnSelect, SelectOption, Side, Value, WidgetConfig, WidgetState};
///
/// let catalog = vec![
///     SelectOption::new("Foo", 0),
///     SelectOption::new("Bar", 1),
///     SelectOption::new("Baz", 2),
/// ];
/// let widget = ColumnSelect::new(WidgetConfig::new().searchable());
///
/// let state = WidgetState::new();
/// let state = widget.apply(&catalog, &state, Action::SetFilter(Side::Available, "ba".into()));
/// let state = widget.apply(&catalog, &state, Action::SelectAll);
///
/// assert_eq!(state.selection, vec![Value::from(1), Value::from(2)]);
/// let lists = widget.lists(&catalog, &state);
/// assert!(lists.available.is_empty());
/// assert_eq!(lists.selected.len(), 2);
/// ```
#[derive(Clone)]
pub struct ColumnSelect {
    config: WidgetConfig,
    predicate: Arc<dyn FilterPredicate>,
}

impl ColumnSelect {
    /// Create a widget using the default substring filter.
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_predicate(config, SubstringFilter)
    }

    /// Create a widget with a custom filter predicate.
    pub fn with_predicate(config: WidgetConfig, predicate: impl FilterPredicate + 'static) -> Self {
        Self {
            config,
            predicate: Arc::new(predicate),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Compute both visible lists from one snapshot of catalog and state.
    pub fn lists<'a>(&self, catalog: &'a [SelectOption], state: &WidgetState) -> Lists<'a> {
        let (available, active) = partition(catalog, &state.selection);
        let available = self.render_available(&available, state);
        let selected = self.render_selected(&active, state);

        trace!(
            "lists: {} options, {} available visible, {} selected visible",
            catalog.len(),
            available.len(),
            selected.len()
        );

        Lists {
            available,
            selected,
        }
    }

    /// Visible available options.
    pub fn available<'a>(
        &self,
        catalog: &'a [SelectOption],
        state: &WidgetState,
    ) -> Vec<RenderedOption<'a>> {
        let (available, _) = partition(catalog, &state.selection);
        self.render_available(&available, state)
    }

    /// Visible selected options.
    pub fn selected<'a>(
        &self,
        catalog: &'a [SelectOption],
        state: &WidgetState,
    ) -> Vec<RenderedOption<'a>> {
        let (_, active) = partition(catalog, &state.selection);
        self.render_selected(&active, state)
    }

    /// Which controls are usable in `state`.
    pub fn controls(&self, catalog: &[SelectOption], state: &WidgetState) -> ControlState {
        ControlState::compute(catalog, state, &self.config)
    }

    fn render_available<'a>(
        &self,
        available: &[&'a SelectOption],
        state: &WidgetState,
    ) -> Vec<RenderedOption<'a>> {
        let decorated = decorate(
            available,
            state.selection.len(),
            self.config.limit,
            &self.config.highlight,
        );
        self.filter_side(decorated, state, Side::Available)
    }

    fn render_selected<'a>(
        &self,
        active: &[&'a SelectOption],
        state: &WidgetState,
    ) -> Vec<RenderedOption<'a>> {
        self.filter_side(undecorated(active), state, Side::Selected)
    }

    fn filter_side<'a>(
        &self,
        list: Vec<RenderedOption<'a>>,
        state: &WidgetState,
        side: Side,
    ) -> Vec<RenderedOption<'a>> {
        filter(
            list,
            state.filter(side),
            self.config.searchable,
            self.predicate.as_ref(),
        )
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Compute the state that results from `action`.
    ///
    /// A disabled widget ignores every action. Clicks on disabled options,
    /// including options disabled because the limit is reached, are ignored
    /// too, and so is select-all while its control is disabled.
    pub fn apply(&self, catalog: &[SelectOption], state: &WidgetState, action: Action) -> WidgetState {
        if self.config.disabled {
            debug!("ignoring {:?}: widget disabled", action);
            return state.clone();
        }

        let mut next = state.clone();
        match action {
            Action::SelectOption(value) => {
                if self.config.limit.is_reached(state.selection.len()) {
                    debug!("ignoring select of {}: limit reached", value);
                } else {
                    next.selection = mutate::add_one(&state.selection, catalog, &value);
                }
            }
            Action::DeselectOption(value) => {
                next.selection = mutate::remove_one(&state.selection, &value);
            }
            Action::SelectAll if !self.controls(catalog, state).select_all_enabled => {
                debug!("ignoring select all: control disabled");
            }
            Action::SelectAll => {
                let available = self.available(catalog, state);
                next.selection = mutate::select_all(&state.selection, &available, self.config.limit);
            }
            Action::DeselectAll => {
                let selected = self.selected(catalog, state);
                next.selection = mutate::deselect_all(&state.selection, &selected);
            }
            Action::SetFilter(side, text) => {
                *next.filter_mut(side) = text;
            }
            Action::ClearFilter(side) => {
                if self.controls(catalog, state).clear_visible(side) {
                    next.filter_mut(side).clear();
                }
            }
        }

        debug!(
            "selection {} -> {} entries",
            state.selection.len(),
            next.selection.len()
        );
        next
    }
}

impl std::fmt::Debug for ColumnSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSelect")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ColumnSelect {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}
