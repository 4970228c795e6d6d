//! Note composition form renderer.

use crate::domain::{NoteDraft, MIN_BODY_CHARS, MIN_TITLE_CHARS};
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;

/// Renders a draft preview with per-field validation hints.
///
/// Mirrors the minimal length rules used on submission so the user sees the
/// same verdict the coordinator will reach.
#[must_use]
pub fn render_form(draft: &NoteDraft, theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;

    let title_hint = field_hint(draft.title.chars().count(), MIN_TITLE_CHARS, theme);
    let body_hint = field_hint(draft.body.chars().count(), MIN_BODY_CHARS, theme);

    let submit = if draft.is_submittable() {
        format!(
            "{}ready to submit{}",
            Theme::fg(&colors.success_fg),
            Theme::reset()
        )
    } else {
        format!(
            "{}{}not yet submittable{}",
            Theme::dim(),
            Theme::fg(&colors.text_dim),
            Theme::reset()
        )
    };

    format!(
        "Title: {} {title_hint}\nBody:  {} {body_hint}\n{submit}\n",
        truncate_chars(&draft.title, cols.saturating_sub(20)),
        truncate_chars(&draft.body, cols.saturating_sub(20)),
    )
}

fn field_hint(len: usize, min: usize, theme: &Theme) -> String {
    let colors = &theme.colors;
    if len >= min {
        format!("{}({len}){}", Theme::fg(&colors.text_dim), Theme::reset())
    } else {
        format!(
            "{}({len}/{min}){}",
            Theme::fg(&colors.warning_fg),
            Theme::reset()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_is_marked_submittable() {
        let draft = NoteDraft::new("Groceries", "milk, eggs, bread");
        let out = render_form(&draft, &Theme::default(), 60);
        assert!(out.contains("ready to submit"));
    }

    #[test]
    fn short_fields_show_progress_hints() {
        let draft = NoteDraft::new("ab", "short");
        let out = render_form(&draft, &Theme::default(), 60);
        assert!(out.contains("(2/3)"));
        assert!(out.contains("(5/10)"));
        assert!(out.contains("not yet submittable"));
    }
}
