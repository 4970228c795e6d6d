//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the pure render functions; they contain no business logic, only
//! display-ready data.

use crate::app::view::NoteView;

/// Complete UI view model for rendering one frame.
///
/// Contains everything the component renderers need: header with stats, the
/// view switcher, the cards of the currently visible collection, an optional
/// empty state, and the footer command hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesViewModel {
    /// Header information (view title, note counts).
    pub header: HeaderInfo,

    /// View switcher affordance (per-view labels with counts, current view).
    pub switcher: SwitcherInfo,

    /// Cards for the currently visible collection, in service order.
    pub cards: Vec<NoteCard>,

    /// Empty state message when the visible collection has no notes.
    pub empty_state: Option<EmptyState>,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, naming the current view.
    pub title: String,

    /// Collection size statistics.
    pub stats: StatsInfo,
}

/// Note count statistics shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsInfo {
    /// Number of active notes.
    pub active: usize,
    /// Number of archived notes.
    pub archived: usize,
    /// Total across both collections.
    pub total: usize,
}

/// View switcher display information.
///
/// Two buttons with live counts; exactly one is marked current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherInfo {
    /// Label for the active view button, including its count.
    pub active_label: String,

    /// Label for the archived view button, including its count.
    pub archived_label: String,

    /// Which view is currently rendered.
    pub current: NoteView,
}

/// Display information for a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Server-assigned note id, shown so per-note commands can target it.
    pub id: String,

    /// Note title.
    pub title: String,

    /// Full body text (truncated at render time to fit the terminal).
    pub body: String,

    /// Creation timestamp, pre-formatted for display.
    pub created: String,

    /// Whether the note is archived (renders a marker).
    pub archived: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No active notes").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hint text.
    pub commands: String,
}
