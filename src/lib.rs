//! notekeep: a terminal client for a remote notes service.
//!
//! Notes live server-side in two disjoint collections (active and archived);
//! this client lists them, creates new ones, and moves them between
//! collections, reloading both lists from the service after every mutation so
//! the screen never drifts from server-held truth.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     main (shim)                     │
//! │        read input → parse Intent → dispatch         │
//! └──────────────────────────┬──────────────────────────┘
//!                            │
//! ┌──────────────────────────▼──────────────────────────┐
//! │               app::Controller                       │
//! │   owns AppState · confirms · mutates · reloads      │
//! └───────┬──────────────────┬──────────────────┬───────┘
//!         │                  │                  │
//! ┌───────▼───────┐  ┌───────▼───────┐  ┌───────▼───────┐
//! │ api::NotesApi │  │ feedback::    │  │ ui::render    │
//! │ (HTTP client) │  │ Frontend      │  │ (pure, state  │
//! │               │  │ (confirm,     │  │  → markup)    │
//! │               │  │  notify)      │  │               │
//! └───────────────┘  └───────────────┘  └───────────────┘
//! ```
//!
//! The coordinator is generic over [`api::NotesApi`] and
//! [`feedback::Frontend`], so tests drive it with in-memory fakes while the
//! binary wires in [`api::ApiClient`] and [`feedback::ConsoleFrontend`].

pub mod api;
pub mod app;
pub mod domain;
pub mod feedback;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ApiClient, NotesApi};
pub use app::{AppState, Controller, Intent, NoteView};
pub use domain::{Note, NoteDraft, NotekeepError, Result};
pub use feedback::{ConsoleFrontend, Frontend, Notice};
pub use ui::{render, Theme};

/// Default base URL of the remote notes service.
pub const DEFAULT_BASE_URL: &str = "https://notes-api.dicoding.dev/v2";

/// Runtime configuration, read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the notes service.
    pub base_url: String,
    /// Tracing filter string (`EnvFilter` syntax).
    pub trace_level: String,
    /// Whether to write logs to a file under the data directory.
    pub log_to_file: bool,
    /// Optional path to a TOML theme file. `~/` is expanded.
    pub theme_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            trace_level: "info".to_string(),
            log_to_file: true,
            theme_file: None,
        }
    }
}

impl Config {
    /// Reads configuration from `NOTEKEEP_*` environment variables.
    ///
    /// Unset variables keep their defaults:
    /// - `NOTEKEEP_API_URL`: service base URL
    /// - `NOTEKEEP_LOG`: tracing filter (default `info`)
    /// - `NOTEKEEP_LOG_FILE`: `0`/`false` disables file logging
    /// - `NOTEKEEP_THEME`: path to a theme TOML file
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("NOTEKEEP_API_URL").unwrap_or(defaults.base_url),
            trace_level: std::env::var("NOTEKEEP_LOG").unwrap_or(defaults.trace_level),
            log_to_file: std::env::var("NOTEKEEP_LOG_FILE")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(defaults.log_to_file),
            theme_file: std::env::var("NOTEKEEP_THEME").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Loads the configured theme, falling back to the built-in palette.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Theme`] when a theme file is configured but
    /// cannot be read or parsed; a missing configuration is not an error.
    pub fn load_theme(&self) -> Result<Theme> {
        match &self.theme_file {
            Some(path) => Theme::from_file(infrastructure::expand_tilde(path)),
            None => Ok(Theme::default()),
        }
    }
}
