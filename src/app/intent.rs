//! Typed intent messages from the presentation layer to the coordinator.
//!
//! Presentational surfaces (the command shim, a form, a note card) emit
//! intents describing a requested action; the coordinator subscribes and
//! dispatches. This replaces ambient event bubbling with an explicit upward
//! message-passing contract: child emits, parent decides.

use crate::app::view::NoteView;

/// A requested action, with its payload.
///
/// Intents carry raw user input; validation and confirmation happen in the
/// coordinator, not at the emitting surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A completed note submission with title and body text.
    SubmitNote {
        /// Raw title input (trimmed during draft construction).
        title: String,
        /// Raw body input (trimmed during draft construction).
        body: String,
    },

    /// Deletion requested for the note with this id. Requires confirmation.
    DeleteRequested {
        /// Id of the note to delete.
        id: String,
    },

    /// Archival requested for the note with this id. Requires confirmation.
    ArchiveRequested {
        /// Id of the note to archive.
        id: String,
    },

    /// Unarchival requested for the note with this id. Requires confirmation.
    UnarchiveRequested {
        /// Id of the note to unarchive.
        id: String,
    },

    /// Switch the rendered collection. Pure local state change, no network.
    SwitchView {
        /// The view to show.
        view: NoteView,
    },

    /// Reload both collections from the service without mutating anything.
    Refresh,
}
