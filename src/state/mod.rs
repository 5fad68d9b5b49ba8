//! Board state, independent of the DOM.
//!
//! DESIGN
//! ======
//! `store` owns the projects and notifies subscribers; `list` and `form` are
//! the view models for the status columns and the input form; `drag` reduces
//! drag-and-drop events to plain transitions. Components in
//! `crate::components` are thin wrappers that wire these to Leptos signals.

pub mod drag;
pub mod form;
pub mod list;
pub mod project;
pub mod store;
