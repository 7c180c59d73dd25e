//! Selection size cap

use serde::Deserialize;
use serde::Serialize;

/// Maximum number of selected options.
///
/// Stored as a signed integer so it round-trips through configuration as a
/// bare number: any negative value means unlimited.
///
/// # Example
///
/// ```
/// use colselect_lib::model::Limit;
///
/// assert_eq!(Limit::UNLIMITED.max(), None);
/// assert_eq!(Limit::new(3).max(), Some(3));
/// assert!(Limit::new(3).is_reached(3));
/// assert!(!Limit::new(-5).is_reached(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(i64);

impl Limit {
    /// No cap on the selection size.
    pub const UNLIMITED: Limit = Limit(-1);

    /// Creates a limit from its raw value. Negative means unlimited.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Creates a limit of at most `max` selected options.
    pub fn at_most(max: usize) -> Self {
        Self(i64::try_from(max).unwrap_or(i64::MAX))
    }

    /// Returns the raw value.
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Returns the cap, or `None` when unlimited.
    pub fn max(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Returns `true` if there is no cap.
    pub fn is_unlimited(self) -> bool {
        self.0 < 0
    }

    /// Returns `true` if a selection of `size` options has hit the cap.
    pub fn is_reached(self, size: usize) -> bool {
        self.max().is_some_and(|max| size >= max)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

impl From<i64> for Limit {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Option<usize>> for Limit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Self::UNLIMITED, Self::at_most)
    }
}
