//! Dual-list selection engine
//!
//! Splits a catalog of labeled options into an "available" and a "selected"
//! list, filters each side independently and computes the next selection for
//! single and bulk toggle actions. The engine is stateless: the caller owns
//! the selection and filter text and hands them in on every call.

pub mod engine;
pub mod error;
pub mod model;
pub mod widget;

pub use engine::*;
pub use model::*;
pub use widget::*;
