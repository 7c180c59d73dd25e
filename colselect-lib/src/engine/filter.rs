//! Per-side text filtering

use crate::model::SelectOption;

/// Decides whether an option matches a filter text.
///
/// The engine never inspects which predicate it was given; the default
/// [`SubstringFilter`] is just the value used when the caller supplies none.
/// Any `Fn(&SelectOption, &str) -> bool` closure is a predicate too:
///
/// ```
/// use colselect_lib::{filter, SelectOption};
///
/// let catalog = vec![SelectOption::new("Foo", 0), SelectOption::new("foo", 1)];
/// let exact = |option: &SelectOption, text: &str| option.name == text;
/// let visible = filter(catalog.iter().collect(), "foo", true, &exact);
/// assert_eq!(visible.len(), 1);
/// ```
pub trait FilterPredicate: Send + Sync {
    /// Returns `true` if `option` should stay visible for `text`.
    fn matches(&self, option: &SelectOption, text: &str) -> bool;
}

impl<F> FilterPredicate for F
where
    F: Fn(&SelectOption, &str) -> bool + Send + Sync,
{
    fn matches(&self, option: &SelectOption, text: &str) -> bool {
        self(option, text)
    }
}

/// Case-insensitive substring match on the option name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl FilterPredicate for SubstringFilter {
    fn matches(&self, option: &SelectOption, text: &str) -> bool {
        option.name.to_lowercase().contains(&text.to_lowercase())
    }
}

/// Exact-case substring match on the option name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSensitiveFilter;

impl FilterPredicate for CaseSensitiveFilter {
    fn matches(&self, option: &SelectOption, text: &str) -> bool {
        option.name.contains(text)
    }
}

/// Keeps the items of `list` that match `text`.
///
/// Returns `list` untouched when filtering is disabled (whatever `text` holds)
/// or when `text` is empty. Order is preserved.
pub fn filter<T, P>(list: Vec<T>, text: &str, enabled: bool, predicate: &P) -> Vec<T>
where
    T: AsRef<SelectOption>,
    P: FilterPredicate + ?Sized,
{
    if !enabled || text.is_empty() {
        return list;
    }

    list.into_iter()
        .filter(|item| predicate.matches(item.as_ref(), text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Foo", 0),
            SelectOption::new("Bar", 1),
            SelectOption::new("Baz", 2),
            SelectOption::new("Qux", 3),
            SelectOption::new("Quux", 4),
        ]
    }

    fn names(list: &[&SelectOption]) -> Vec<String> {
        list.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn test_substring_ignores_case() {
        let catalog = catalog();
        let visible = filter(catalog.iter().collect(), "BA", true, &SubstringFilter);
        assert_eq!(names(&visible), vec!["Bar", "Baz"]);
    }

    #[test]
    fn test_case_sensitive() {
        let catalog = catalog();
        let visible = filter(catalog.iter().collect(), "ba", true, &CaseSensitiveFilter);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_disabled_filter_is_bypass() {
        let catalog = catalog();
        let visible = filter(catalog.iter().collect(), "nothing matches", false, &SubstringFilter);
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn test_empty_text_keeps_everything() {
        let catalog = catalog();
        let never = |_: &SelectOption, _: &str| false;
        let visible = filter(catalog.iter().collect(), "", true, &never);
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn test_custom_predicate_sees_whole_option() {
        let catalog = catalog();
        let by_value = |option: &SelectOption, text: &str| option.value.to_string() == text;
        let visible = filter(catalog.iter().collect(), "3", true, &by_value);
        assert_eq!(names(&visible), vec!["Qux"]);
    }
}
