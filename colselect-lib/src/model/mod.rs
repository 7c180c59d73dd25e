//! Option catalog types

mod limit;
mod option;
mod value;

pub use limit::*;
pub use option::*;
pub use value::*;
