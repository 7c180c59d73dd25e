//! Widget orchestration
//!
//! Ties the engine together for a presentation layer:
//! - `config.rs` - immutable widget configuration
//! - `state.rs` - caller-owned selection and filter text, plus actions
//! - `controls.rs` - which controls are enabled or visible
//! - `column_select.rs` - the stateless service computing lists and transitions

mod column_select;
mod config;
mod controls;
mod state;

pub use column_select::*;
pub use config::*;
pub use controls::*;
pub use state::*;
