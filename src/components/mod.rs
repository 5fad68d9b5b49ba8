//! Leptos components for the project board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `ProjectStore` from context and keep their own
//! view models (`crate::state::list`, `crate::state::form`) in signals.

pub mod project_input;
pub mod project_item;
pub mod project_list;
pub mod shell;
