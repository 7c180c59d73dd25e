//! Split the catalog into available and selected options

use std::collections::HashSet;

use crate::model::SelectOption;
use crate::model::Value;

/// Splits `catalog` into `(available, active)`.
///
/// Both lists keep catalog order, so an option that is deselected and
/// selected again returns to its catalog position rather than the end of the
/// list. Values in `selection` that match no option are ignored.
pub fn partition<'a>(
    catalog: &'a [SelectOption],
    selection: &[Value],
) -> (Vec<&'a SelectOption>, Vec<&'a SelectOption>) {
    let selected: HashSet<&Value> = selection.iter().collect();
    catalog
        .iter()
        .partition(|option| !selected.contains(&option.value))
}
