//! Catalog validation errors

use thiserror::Error;

use crate::model::Value;

/// A catalog that breaks the unique-identifier invariant.
///
/// The engine tolerates such catalogs (they render duplicate rows). This
/// error is only produced by [`validate_catalog`](crate::model::validate_catalog)
/// for callers that want to reject them upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two options share the same value.
    #[error("duplicate option value {value} at positions {first} and {second}")]
    DuplicateValue {
        /// The repeated identifier.
        value: Value,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
}
