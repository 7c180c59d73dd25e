//! Fuzzy filter predicate using nucleo-matcher.

use std::cell::RefCell;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::FilterPredicate;
use crate::model::SelectOption;

thread_local! {
    static MATCHER: RefCell<Matcher> = RefCell::new(Matcher::new(Config::DEFAULT));
}

/// Fuzzy match on the option name, ignoring case.
///
/// `"qx"` matches both `"Qux"` and `"Quux"`. Only match/no-match is used, so
/// the list keeps catalog order instead of being ranked by score.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyFilter;

impl FuzzyFilter {
    pub fn new() -> Self {
        Self
    }

    /// Match score of `option` for `text`, higher is better.
    pub fn score(&self, option: &SelectOption, text: &str) -> Option<u32> {
        let pattern = Pattern::new(
            text,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut buf = Vec::new();
        let haystack = Utf32Str::new(&option.name, &mut buf);
        MATCHER.with(|matcher| pattern.score(haystack, &mut matcher.borrow_mut()))
    }
}

impl FilterPredicate for FuzzyFilter {
    fn matches(&self, option: &SelectOption, text: &str) -> bool {
        self.score(option, text).is_some()
    }
}
