//! Core domain types shared across all layers.
//!
//! This module holds the note model, submission drafts, and the crate-wide
//! error type. Domain types are plain data with no knowledge of HTTP, the
//! terminal, or the coordinator that moves them around.

pub mod error;
pub mod note;

pub use error::{NotekeepError, Result};
pub use note::{Note, NoteDraft, MIN_BODY_CHARS, MIN_TITLE_CHARS};
