//! The selection engine
//!
//! Pure functions over borrowed catalog data. A full recomputation runs
//! [`partition`] → [`decorate`] → [`filter`] on each side; user actions go
//! through the transitions in [`mutate`].

mod decorate;
mod filter;
mod fuzzy;
pub mod mutate;
mod partition;

pub use decorate::*;
pub use filter::*;
pub use fuzzy::*;
pub use partition::*;
