//! Application coordination layer.
//!
//! Owns the canonical state and the intent dispatch loop. The coordinator in
//! [`controller`] mediates between the service client, the user-interaction
//! capability, and the render layer; [`state`] holds the data it coordinates.

pub mod controller;
pub mod intent;
pub mod state;
pub mod view;

pub use controller::Controller;
pub use intent::Intent;
pub use state::AppState;
pub use view::NoteView;
