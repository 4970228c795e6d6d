//! Note domain model and submission drafts.
//!
//! This module defines the core [`Note`] type as it travels over the wire, and
//! [`NoteDraft`], the pre-submission payload with the client's minimal length
//! checks. Identity (`id`) and timestamps (`created_at`) are assigned by the
//! remote service; the client never generates either.

use serde::{Deserialize, Serialize};

use crate::domain::error::{NotekeepError, Result};

/// Minimum number of characters in a note title, counted after trimming.
pub const MIN_TITLE_CHARS: usize = 3;

/// Minimum number of characters in a note body, counted after trimming.
pub const MIN_BODY_CHARS: usize = 10;

/// A persisted note as returned by the remote service.
///
/// A note is a member of exactly one of two disjoint collections at any time,
/// active or archived, determined solely by its `archived` flag. The flag is
/// mutated only server-side via the archive/unarchive endpoints; the client
/// treats notes as immutable records between reloads.
///
/// Wire field names are camelCase (`createdAt`), matching the service contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque identifier assigned by the remote service. Unique, immutable.
    pub id: String,
    /// Note title. The service enforces its own rules; the client only checks
    /// the minimum length before submission.
    pub title: String,
    /// Note body text.
    pub body: String,
    /// ISO-8601 creation timestamp assigned by the remote service.
    pub created_at: String,
    /// Whether the note lives in the archived collection. `false` on creation.
    pub archived: bool,
}

impl Note {
    /// Formats the creation timestamp for display.
    ///
    /// Parses the ISO-8601 `created_at` string and renders it as a short local
    /// date/time (`"2024-03-01 14:05"`). Falls back to the raw string if the
    /// service ever hands back something unparseable; presentation must not
    /// fail on bad server data.
    #[must_use]
    pub fn created_short(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// A note submission payload before it is sent to the service.
///
/// Drafts carry the only client-side validation in the system: trimmed minimum
/// lengths for title and body. Everything beyond that (uniqueness, content
/// rules, id assignment) belongs to the remote service.
///
/// # Examples
///
/// ```
/// use notekeep::domain::NoteDraft;
///
/// let draft = NoteDraft::new("  Groceries  ", "milk, eggs, bread");
/// assert!(draft.is_submittable());
/// assert_eq!(draft.title, "Groceries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    /// Trimmed title text.
    pub title: String,
    /// Trimmed body text.
    pub body: String,
}

impl NoteDraft {
    /// Creates a draft from raw input, trimming both fields.
    #[must_use]
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Returns `true` if the draft passes the minimal length checks.
    ///
    /// The submission affordance in the UI is enabled exactly when this holds:
    /// trimmed title of at least [`MIN_TITLE_CHARS`] characters and trimmed
    /// body of at least [`MIN_BODY_CHARS`] characters.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the minimal length requirements, naming the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Draft`] describing which field is too short.
    pub fn validate(&self) -> Result<()> {
        if self.title.chars().count() < MIN_TITLE_CHARS {
            return Err(NotekeepError::Draft(format!(
                "title must be at least {MIN_TITLE_CHARS} characters"
            )));
        }
        if self.body.chars().count() < MIN_BODY_CHARS {
            return Err(NotekeepError::Draft(format!(
                "body must be at least {MIN_BODY_CHARS} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, body: &str) -> NoteDraft {
        NoteDraft::new(title, body)
    }

    #[test]
    fn draft_at_thresholds_is_submittable() {
        assert!(draft("abc", "0123456789").is_submittable());
    }

    #[test]
    fn draft_below_title_threshold_is_rejected() {
        let err = draft("ab", "0123456789").validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn draft_below_body_threshold_is_rejected() {
        let err = draft("abc", "012345678").validate().unwrap_err();
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn lengths_are_counted_after_trimming() {
        // Whitespace padding must not buy a draft past the minimums.
        assert!(!draft("ab ", " 012345678 ").is_submittable());
        assert!(draft("  abc  ", "  0123456789  ").is_submittable());
    }

    #[test]
    fn lengths_are_counted_in_characters_not_bytes() {
        // Three multibyte characters satisfy the title minimum.
        assert!(draft("äöü", "0123456789").is_submittable());
    }

    #[test]
    fn note_deserializes_camel_case_wire_names() {
        let note: Note = serde_json::from_str(
            r#"{
                "id": "notes-1",
                "title": "A",
                "body": "aaaaaaaaaa",
                "createdAt": "2024-03-01T14:05:00.000Z",
                "archived": false
            }"#,
        )
        .unwrap();
        assert_eq!(note.id, "notes-1");
        assert_eq!(note.created_at, "2024-03-01T14:05:00.000Z");
        assert!(!note.archived);
    }

    #[test]
    fn created_short_formats_rfc3339_and_passes_through_garbage() {
        let mut note: Note = serde_json::from_str(
            r#"{"id":"n","title":"t","body":"b","createdAt":"2024-03-01T14:05:00.000Z","archived":false}"#,
        )
        .unwrap();
        assert_eq!(note.created_short(), "2024-03-01 14:05");

        note.created_at = "not-a-date".to_string();
        assert_eq!(note.created_short(), "not-a-date");
    }
}
