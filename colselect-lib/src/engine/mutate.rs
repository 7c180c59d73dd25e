//! Selection transitions
//!
//! Each function computes the next selection from the current one and never
//! fails. The result fully replaces the caller's stored selection.
//!
//! | Action       | Scope                    | Result order              |
//! |--------------|--------------------------|---------------------------|
//! | add one      | one option               | appended                  |
//! | remove one   | one value                | current order kept        |
//! | select all   | visible available list   | sorted ascending          |
//! | deselect all | visible selected list    | current order kept        |

use std::collections::HashSet;

use log::debug;

use crate::model::Limit;
use crate::model::RenderedOption;
use crate::model::SelectOption;
use crate::model::Value;

/// Appends `value` to the selection.
///
/// No-op when `value` is already selected, or when the catalog declares the
/// option disabled. A value missing from the catalog is appended; it just
/// never shows up on either side.
pub fn add_one(current: &[Value], catalog: &[SelectOption], value: &Value) -> Vec<Value> {
    if current.contains(value) {
        debug!("add_one: {} already selected", value);
        return current.to_vec();
    }
    if catalog.iter().any(|o| &o.value == value && o.disabled) {
        debug!("add_one: {} is disabled", value);
        return current.to_vec();
    }

    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(value.clone());
    next
}

/// Removes every occurrence of `value` from the selection.
pub fn remove_one(current: &[Value], value: &Value) -> Vec<Value> {
    current.iter().filter(|v| *v != value).cloned().collect()
}

/// Selects every enabled option of the visible available list.
///
/// Candidates are appended in list order, then the selection is cut down to
/// `limit` entries (so options earlier in the catalog win) and finally sorted
/// ascending. Only what is visible is selected: an active filter narrows the
/// candidates.
pub fn select_all(
    current: &[Value],
    visible_available: &[RenderedOption<'_>],
    limit: Limit,
) -> Vec<Value> {
    let mut next = current.to_vec();
    let mut seen: HashSet<&Value> = current.iter().collect();

    for option in visible_available {
        if !option.disabled && seen.insert(option.value()) {
            next.push(option.value().clone());
        }
    }

    if let Some(max) = limit.max() {
        next.truncate(max);
    }
    next.sort();

    debug!(
        "select_all: {} -> {} selected ({} visible)",
        current.len(),
        next.len(),
        visible_available.len()
    );
    next
}

/// Deselects every option of the visible selected list.
///
/// Selected values hidden by the filter stay selected.
pub fn deselect_all<T>(current: &[Value], visible_active: &[T]) -> Vec<Value>
where
    T: AsRef<SelectOption>,
{
    let visible: HashSet<&Value> = visible_active.iter().map(|o| &o.as_ref().value).collect();
    let next: Vec<Value> = current
        .iter()
        .filter(|v| !visible.contains(v))
        .cloned()
        .collect();

    debug!("deselect_all: {} -> {} selected", current.len(), next.len());
    next
}
