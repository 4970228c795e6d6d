//! View selection state for the note collections.
//!
//! This module defines the state machine enum controlling which of the two
//! disjoint collections is rendered. The view changes either explicitly (the
//! user switches) or implicitly after a mutation (adding activates the active
//! view, archiving activates the archived view).

/// Which note collection is currently rendered.
///
/// Mirrors the service's two list endpoints: every note belongs to exactly one
/// of the two views at any time, determined solely by its `archived` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteView {
    /// Shows the non-archived notes. The startup view.
    #[default]
    Active,

    /// Shows the archived notes.
    Archived,
}

impl NoteView {
    /// Short machine-friendly name ("active" / "archived").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    /// Human-facing view title for headers and switchers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active Notes",
            Self::Archived => "Archived Notes",
        }
    }

    /// Parses a view name as typed by the user.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "archived" | "archive" => Some(Self::Archived),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_views_case_insensitively() {
        assert_eq!(NoteView::parse("Active"), Some(NoteView::Active));
        assert_eq!(NoteView::parse(" archived "), Some(NoteView::Archived));
        assert_eq!(NoteView::parse("trash"), None);
    }

    #[test]
    fn default_view_is_active() {
        assert_eq!(NoteView::default(), NoteView::Active);
    }
}
