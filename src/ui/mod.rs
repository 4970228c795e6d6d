//! Terminal presentation layer.
//!
//! State flows one way: the coordinator mutates [`crate::app::AppState`], the
//! state computes a view model, and the pure functions here turn that view
//! model into ANSI markup. Nothing in this layer mutates state or performs IO.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
