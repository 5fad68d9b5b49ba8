//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `web-sys` call lives here behind the `hydrate` feature so components
//! and tests compile natively with no-op fallbacks.

pub mod alert;
pub mod drag_data;
