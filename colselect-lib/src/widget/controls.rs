//! Enablement of the widget controls.

use std::collections::HashSet;

use serde::Serialize;

use super::Side;
use super::WidgetConfig;
use super::WidgetState;
use crate::model::RenderedOption;
use crate::model::SelectOption;

/// Which controls a presentation layer should offer for a given state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// The whole widget is disabled.
    pub widget_disabled: bool,
    /// Select-all can be used.
    pub select_all_enabled: bool,
    /// Deselect-all can be used.
    pub deselect_all_enabled: bool,
    /// The bulk controls are shown at all.
    pub controls_visible: bool,
    /// The filter inputs are shown at all.
    pub filters_visible: bool,
    /// The filter inputs accept typing.
    pub filter_input_enabled: bool,
    /// The available-side filter shows a clear affordance.
    pub clear_available_visible: bool,
    /// The selected-side filter shows a clear affordance.
    pub clear_selected_visible: bool,
}

impl ControlState {
    /// Derive the control state from the configuration and current state.
    pub fn compute(catalog: &[SelectOption], state: &WidgetState, config: &WidgetConfig) -> Self {
        let selected = state.selection.len();
        let disabled = config.disabled;
        // stale values in the selection must not count as selected options
        let chosen: HashSet<_> = state.selection.iter().collect();
        let any_unselected = catalog.iter().any(|o| !chosen.contains(&o.value));

        Self {
            widget_disabled: disabled,
            select_all_enabled: !disabled
                && any_unselected
                && !config.limit.is_reached(selected),
            deselect_all_enabled: !disabled && selected > 0,
            controls_visible: config.show_controls,
            filters_visible: config.searchable,
            filter_input_enabled: !disabled,
            clear_available_visible: clear_visible(config, state, Side::Available),
            clear_selected_visible: clear_visible(config, state, Side::Selected),
        }
    }

    /// Whether the clear affordance of `side` is shown.
    pub fn clear_visible(&self, side: Side) -> bool {
        match side {
            Side::Available => self.clear_available_visible,
            Side::Selected => self.clear_selected_visible,
        }
    }

    /// Whether a click on `item` reaches the engine.
    pub fn item_clickable(&self, item: &RenderedOption<'_>) -> bool {
        !self.widget_disabled && !item.disabled
    }
}

fn clear_visible(config: &WidgetConfig, state: &WidgetState, side: Side) -> bool {
    config.clearable && !config.disabled && !state.filter(side).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Limit;

    fn catalog() -> Vec<SelectOption> {
        vec![SelectOption::new("Foo", 0), SelectOption::new("Bar", 1)]
    }

    #[test]
    fn test_empty_selection() {
        let controls = ControlState::compute(&catalog(), &WidgetState::new(), &WidgetConfig::new());
        assert!(controls.select_all_enabled);
        assert!(!controls.deselect_all_enabled);
        assert!(!controls.filters_visible);
        assert!(!controls.controls_visible);
    }

    #[test]
    fn test_everything_selected() {
        let state = WidgetState::with_selection([0, 1]);
        let controls = ControlState::compute(&catalog(), &state, &WidgetConfig::new());
        assert!(!controls.select_all_enabled);
        assert!(controls.deselect_all_enabled);
    }

    #[test]
    fn test_stale_selection_keeps_select_all_enabled() {
        let state = WidgetState::with_selection([0, 97, 98]);
        let controls = ControlState::compute(&catalog(), &state, &WidgetConfig::new());
        assert!(controls.select_all_enabled);
    }

    #[test]
    fn test_limit_reached() {
        let state = WidgetState::with_selection([0]);
        let config = WidgetConfig::new().limit(Limit::new(1));
        let controls = ControlState::compute(&catalog(), &state, &config);
        assert!(!controls.select_all_enabled);
    }

    #[test]
    fn test_unlimited_does_not_block_select_all() {
        let state = WidgetState::with_selection([0]);
        let controls = ControlState::compute(&catalog(), &state, &WidgetConfig::new());
        assert!(controls.select_all_enabled);
    }

    #[test]
    fn test_disabled_widget() {
        let state = WidgetState::with_selection([0]).with_filter(Side::Available, "f");
        let config = WidgetConfig::new().searchable().show_controls().disabled();
        let controls = ControlState::compute(&catalog(), &state, &config);
        assert!(controls.widget_disabled);
        assert!(!controls.select_all_enabled);
        assert!(!controls.deselect_all_enabled);
        assert!(!controls.filter_input_enabled);
        assert!(!controls.clear_visible(Side::Available));
        assert!(controls.filters_visible);
        assert!(controls.controls_visible);
    }

    #[test]
    fn test_clear_visibility() {
        let state = WidgetState::new().with_filter(Side::Selected, "x");
        let config = WidgetConfig::new().searchable();
        let controls = ControlState::compute(&catalog(), &state, &config);
        assert!(!controls.clear_visible(Side::Available));
        assert!(controls.clear_visible(Side::Selected));

        let controls = ControlState::compute(&catalog(), &state, &config.clearable(false));
        assert!(!controls.clear_visible(Side::Selected));
    }
}
