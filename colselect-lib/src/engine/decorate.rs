//! Derived flags for the available side

use std::collections::HashSet;

use crate::model::Limit;
use crate::model::RenderedOption;
use crate::model::SelectOption;
use crate::model::Value;

/// Renders the available side.
///
/// Once the selection has reached `limit`, every option is rendered disabled
/// on top of its static flag. Options whose value is in `highlight` are
/// rendered highlighted. The input options are left untouched.
pub fn decorate<'a>(
    available: &[&'a SelectOption],
    selection_size: usize,
    limit: Limit,
    highlight: &[Value],
) -> Vec<RenderedOption<'a>> {
    let limit_reached = limit.is_reached(selection_size);
    let highlight: HashSet<&Value> = highlight.iter().collect();

    available
        .iter()
        .map(|&option| {
            let mut rendered = RenderedOption::new(option);
            rendered.disabled |= limit_reached;
            rendered.highlight |= highlight.contains(&option.value);
            rendered
        })
        .collect()
}

/// Renders the selected side, which only ever shows static flags.
pub fn undecorated<'a>(active: &[&'a SelectOption]) -> Vec<RenderedOption<'a>> {
    active.iter().map(|&option| RenderedOption::new(option)).collect()
}
