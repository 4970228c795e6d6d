//! Intent handling and state synchronization logic.
//!
//! This module implements the coordinator that owns [`AppState`], mediates
//! between intent-emitting surfaces and the remote service, and keeps view
//! state consistent after every mutation by unconditionally reloading both
//! collections from the server.
//!
//! # Architecture
//!
//! The coordinator follows a unidirectional data flow pattern:
//! 1. Intents arrive from the presentation layer
//! 2. [`Controller::dispatch`] pattern-matches the intent
//! 3. Mutations run against the remote service, guarded by a loading
//!    indicator and (for destructive actions) a confirmation dialog
//! 4. Both collections are refetched concurrently and joined
//! 5. The caller re-renders when `dispatch` says so
//!
//! Reloading everything after every mutation trades an extra round-trip for
//! the guarantee that the client never diverges from server-held truth; no
//! optimistic update ever touches the collections, so failures need no
//! rollback.
//!
//! # Operation serialization
//!
//! All operations take `&mut self`, so a single controller instance cannot
//! interleave two mutations; each one fully completes its reload before the
//! next starts.

use crate::api::NotesApi;
use crate::app::intent::Intent;
use crate::app::state::AppState;
use crate::app::view::NoteView;
use crate::domain::{NoteDraft, Result};
use crate::feedback::{Frontend, LoadingGuard, Notice};
use crate::ui::theme::Theme;

/// Coordinator owning the canonical note collections.
///
/// Generic over the service client and the user-interaction capability so
/// tests can drive it with in-memory fakes.
#[derive(Debug)]
pub struct Controller<A, F> {
    api: A,
    frontend: F,
    state: AppState,
}

impl<A: NotesApi, F: Frontend> Controller<A, F> {
    /// Creates a controller with empty collections and the active view.
    #[must_use]
    pub fn new(api: A, frontend: F, theme: Theme) -> Self {
        Self {
            api,
            frontend,
            state: AppState::new(theme),
        }
    }

    /// Read access to the current state, for rendering.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Routes an intent to the matching operation.
    ///
    /// Returns `true` if state changed and the caller should re-render.
    pub async fn dispatch(&mut self, intent: Intent) -> bool {
        tracing::debug!(intent = ?intent, "dispatching intent");
        match intent {
            Intent::SubmitNote { title, body } => self.add(NoteDraft::new(&title, &body)).await,
            Intent::DeleteRequested { id } => self.delete(&id).await,
            Intent::ArchiveRequested { id } => self.archive(&id).await,
            Intent::UnarchiveRequested { id } => self.unarchive(&id).await,
            Intent::SwitchView { view } => self.switch_view(view),
            Intent::Refresh => self.refresh().await,
        }
    }

    /// Loads both collections for the first time.
    ///
    /// The two list fetches run concurrently and are joined; if either fails,
    /// initialization as a whole fails, the collections stay empty, and the
    /// error is reported. No partial collection is ever rendered.
    pub async fn initialize(&mut self) -> bool {
        self.load_all("loading notes").await
    }

    /// Manually reloads both collections without mutating anything.
    ///
    /// On failure the previously held collections are kept as-is.
    pub async fn refresh(&mut self) -> bool {
        self.load_all("refreshing notes").await
    }

    /// Creates a note from a draft, then reloads and switches to the active
    /// view.
    ///
    /// The draft's minimal length checks run first; an invalid draft is
    /// reported without any network traffic. The created-record echo from the
    /// service is ignored beyond logging, since the subsequent reload is the
    /// source of truth.
    pub async fn add(&mut self, draft: NoteDraft) -> bool {
        if let Err(e) = draft.validate() {
            tracing::debug!(error = %e, "draft rejected before submission");
            self.frontend.notify(Notice::Error, &e.to_string());
            return false;
        }

        let result = {
            let _loading = LoadingGuard::begin(&self.frontend, "adding note");
            match self.api.create(&draft).await {
                Ok(note) => {
                    tracing::debug!(id = %note.id, "note created");
                    Self::reload(&self.api, &mut self.state).await
                }
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(()) => {
                self.state.switch_view(NoteView::Active);
                self.frontend.notify(Notice::Success, "note added");
                true
            }
            Err(e) => self.report(&e),
        }
    }

    /// Deletes a note after confirmation. The view does not change.
    pub async fn delete(&mut self, id: &str) -> bool {
        let Some(title) = self.note_title(id) else {
            return false;
        };
        let question = format!("Delete note \"{title}\"? This cannot be undone.");
        if !self.frontend.confirm("Delete note", &question) {
            tracing::debug!(id = %id, "deletion declined");
            return false;
        }

        let result = {
            let _loading = LoadingGuard::begin(&self.frontend, "deleting note");
            match self.api.remove(id).await {
                Ok(()) => Self::reload(&self.api, &mut self.state).await,
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(()) => {
                self.frontend.notify(Notice::Success, "note deleted");
                true
            }
            Err(e) => self.report(&e),
        }
    }

    /// Archives a note after confirmation, then switches to the archived view.
    pub async fn archive(&mut self, id: &str) -> bool {
        let Some(title) = self.note_title(id) else {
            return false;
        };
        let question = format!("Archive note \"{title}\"?");
        if !self.frontend.confirm("Archive note", &question) {
            tracing::debug!(id = %id, "archival declined");
            return false;
        }

        let result = {
            let _loading = LoadingGuard::begin(&self.frontend, "archiving note");
            match self.api.archive(id).await {
                Ok(()) => Self::reload(&self.api, &mut self.state).await,
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(()) => {
                self.state.switch_view(NoteView::Archived);
                self.frontend.notify(Notice::Success, "note archived");
                true
            }
            Err(e) => self.report(&e),
        }
    }

    /// Unarchives a note after confirmation, then switches to the active view.
    pub async fn unarchive(&mut self, id: &str) -> bool {
        let Some(title) = self.note_title(id) else {
            return false;
        };
        let question = format!("Unarchive note \"{title}\"?");
        if !self.frontend.confirm("Unarchive note", &question) {
            tracing::debug!(id = %id, "unarchival declined");
            return false;
        }

        let result = {
            let _loading = LoadingGuard::begin(&self.frontend, "unarchiving note");
            match self.api.unarchive(id).await {
                Ok(()) => Self::reload(&self.api, &mut self.state).await,
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(()) => {
                self.state.switch_view(NoteView::Active);
                self.frontend.notify(Notice::Success, "note unarchived");
                true
            }
            Err(e) => self.report(&e),
        }
    }

    /// Switches the rendered view. No network call; idempotent.
    pub fn switch_view(&mut self, view: NoteView) -> bool {
        self.state.switch_view(view);
        true
    }

    /// Fetches both collections concurrently and joins the results.
    ///
    /// State is only overwritten after both fetches succeed; a failure of
    /// either leaves the previously held collections untouched.
    async fn reload(api: &A, state: &mut AppState) -> Result<()> {
        let (active, archived) = tokio::try_join!(api.list_active(), api.list_archived())?;
        state.replace_collections(active, archived);
        Ok(())
    }

    /// Shared body of `initialize` and `refresh`.
    async fn load_all(&mut self, message: &str) -> bool {
        let result = {
            let _loading = LoadingGuard::begin(&self.frontend, message);
            Self::reload(&self.api, &mut self.state).await
        };

        match result {
            Ok(()) => true,
            Err(e) => self.report(&e),
        }
    }

    /// Looks up the title for a per-note intent, logging stale ids.
    fn note_title(&self, id: &str) -> Option<String> {
        let title = self.state.find_note(id).map(|note| note.title.clone());
        if title.is_none() {
            tracing::warn!(id = %id, "intent for unknown note id ignored");
        }
        title
    }

    /// Reports an operation failure to the user. Always returns `false`.
    fn report(&self, error: &crate::domain::NotekeepError) -> bool {
        tracing::error!(error = %error, "operation failed");
        self.frontend.notify(Notice::Error, &error.to_string());
        false
    }
}
