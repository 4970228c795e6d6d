//! Application state container and view model computation.
//!
//! This module defines [`AppState`], the canonical in-memory copy of the two
//! note collections, plus the current view selection and theme. It is the
//! single source of truth between reloads: every mutation path discards and
//! rebuilds the collections wholesale from the service rather than patching
//! them incrementally, so the client can never drift from server-held truth.
//!
//! # State Components
//!
//! - **Active notes**: the non-archived collection, in service order
//! - **Archived notes**: the archived collection, in service order
//! - **Current view**: which collection is rendered
//! - **Theme**: color palette used by the render functions
//!
//! View models are computed on demand from state snapshots; see
//! [`AppState::compute_viewmodel`].

use crate::app::view::NoteView;
use crate::domain::Note;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, NoteCard, NotesViewModel, StatsInfo, SwitcherInfo,
};

/// Canonical client-side state: both note collections plus view selection.
///
/// Mutated only by the coordinator, never shared across tasks; ownership
/// through `&mut` is the whole synchronization story.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active (non-archived) notes, as returned by the list-active call.
    pub active_notes: Vec<Note>,

    /// Archived notes, as returned by the list-archived call.
    pub archived_notes: Vec<Note>,

    /// Which collection is currently rendered.
    pub current_view: NoteView,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state showing the active view.
    ///
    /// Collections stay empty until the first successful reload.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            active_notes: vec![],
            archived_notes: vec![],
            current_view: NoteView::Active,
            theme,
        }
    }

    /// Replaces both collections wholesale.
    ///
    /// This is the only way note data enters the state: a full rebuild after
    /// a successful concurrent fetch of both lists.
    pub fn replace_collections(&mut self, active: Vec<Note>, archived: Vec<Note>) {
        tracing::debug!(
            active = active.len(),
            archived = archived.len(),
            "collections replaced"
        );
        self.active_notes = active;
        self.archived_notes = archived;
    }

    /// Looks up a note by id across both collections.
    ///
    /// Used to name the note in confirmation prompts. Returns `None` for ids
    /// unknown to either collection (stale input).
    #[must_use]
    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.active_notes
            .iter()
            .chain(self.archived_notes.iter())
            .find(|note| note.id == id)
    }

    /// The collection selected by the current view.
    #[must_use]
    pub fn visible_notes(&self) -> &[Note] {
        match self.current_view {
            NoteView::Active => &self.active_notes,
            NoteView::Archived => &self.archived_notes,
        }
    }

    /// Total note count across both collections.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.active_notes.len() + self.archived_notes.len()
    }

    /// Switches the rendered view. Local state only; no network involved.
    pub fn switch_view(&mut self, view: NoteView) {
        if self.current_view != view {
            tracing::debug!(view = view.as_str(), "view switched");
        }
        self.current_view = view;
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Deterministic: equal states produce equal view models, which keeps
    /// rendering idempotent.
    #[must_use]
    pub fn compute_viewmodel(&self) -> NotesViewModel {
        let stats = StatsInfo {
            active: self.active_notes.len(),
            archived: self.archived_notes.len(),
            total: self.total_count(),
        };

        let header = HeaderInfo {
            title: format!(" {} ", self.current_view.label()),
            stats,
        };

        let switcher = SwitcherInfo {
            active_label: format!("Active ({})", stats.active),
            archived_label: format!("Archived ({})", stats.archived),
            current: self.current_view,
        };

        let cards: Vec<NoteCard> = self
            .visible_notes()
            .iter()
            .map(|note| NoteCard {
                id: note.id.clone(),
                title: note.title.clone(),
                body: note.body.clone(),
                created: note.created_short(),
                archived: note.archived,
            })
            .collect();

        let empty_state = if cards.is_empty() {
            Some(match self.current_view {
                NoteView::Active => EmptyState {
                    message: "No active notes".to_string(),
                    subtitle: "Type `add` to create your first note".to_string(),
                },
                NoteView::Archived => EmptyState {
                    message: "No archived notes".to_string(),
                    subtitle: "Archive a note with `archive <id>`".to_string(),
                },
            })
        } else {
            None
        };

        let footer = FooterInfo {
            commands: "add  delete <id>  archive <id>  unarchive <id>  view <active|archived>  refresh  quit"
                .to_string(),
        };

        NotesViewModel {
            header,
            switcher,
            cards,
            empty_state,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, archived: bool) -> Note {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "body": "0123456789",
            "createdAt": "2024-03-01T14:05:00.000Z",
            "archived": archived,
        }))
        .unwrap()
    }

    fn populated_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.replace_collections(
            vec![note("1", "First", false), note("2", "Second", false)],
            vec![note("3", "Third", true)],
        );
        state
    }

    #[test]
    fn find_note_searches_both_collections() {
        let state = populated_state();
        assert_eq!(state.find_note("1").unwrap().title, "First");
        assert_eq!(state.find_note("3").unwrap().title, "Third");
        assert!(state.find_note("99").is_none());
    }

    #[test]
    fn visible_notes_follow_current_view() {
        let mut state = populated_state();
        assert_eq!(state.visible_notes().len(), 2);
        state.switch_view(NoteView::Archived);
        assert_eq!(state.visible_notes().len(), 1);
        assert_eq!(state.visible_notes()[0].id, "3");
    }

    #[test]
    fn viewmodel_carries_counts_and_switcher_labels() {
        let state = populated_state();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.stats.active, 2);
        assert_eq!(vm.header.stats.archived, 1);
        assert_eq!(vm.header.stats.total, 3);
        assert_eq!(vm.switcher.active_label, "Active (2)");
        assert_eq!(vm.switcher.archived_label, "Archived (1)");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_reports_empty_state_per_view() {
        let mut state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No active notes");

        state.switch_view(NoteView::Archived);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No archived notes");
    }

    #[test]
    fn switch_view_is_idempotent() {
        let mut state = populated_state();
        state.switch_view(NoteView::Archived);
        let first = state.compute_viewmodel();
        state.switch_view(NoteView::Archived);
        let second = state.compute_viewmodel();
        assert_eq!(first, second);
    }
}
