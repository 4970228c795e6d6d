//! Note card list renderer.

use crate::ui::helpers::{body_preview, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoteCard;

/// Renders one card per visible note, separated by a border rule.
#[must_use]
pub fn render_list(cards: &[NoteCard], theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;
    let rule = format!(
        "{}{}{}\n",
        Theme::fg(&colors.border),
        "─".repeat(cols),
        Theme::reset()
    );

    let mut out = String::new();
    for card in cards {
        out.push_str(&rule);
        out.push_str(&render_card(card, theme, cols));
    }
    if !cards.is_empty() {
        out.push_str(&rule);
    }
    out
}

fn render_card(card: &NoteCard, theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;

    let marker = if card.archived {
        format!(
            " {}[archived]{}",
            Theme::fg(&colors.archived_fg),
            Theme::reset()
        )
    } else {
        String::new()
    };

    // Title line keeps room for the id on the right.
    let title = truncate_chars(&card.title, cols.saturating_sub(card.id.chars().count() + 14));
    let title_line = format!(
        "{}{}{title}{}{marker}  {}#{}{}\n",
        Theme::bold(),
        Theme::fg(&colors.title_fg),
        Theme::reset(),
        Theme::fg(&colors.text_dim),
        card.id,
        Theme::reset()
    );

    let body_line = format!(
        "{}{}{}\n",
        Theme::fg(&colors.text_normal),
        body_preview(&card.body, cols.saturating_sub(2)),
        Theme::reset()
    );

    let created_line = format!(
        "{}{}{}{}\n",
        Theme::dim(),
        Theme::fg(&colors.text_dim),
        card.created,
        Theme::reset()
    );

    format!("{title_line}{body_line}{created_line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(archived: bool) -> NoteCard {
        NoteCard {
            id: "notes-1".to_string(),
            title: "Groceries".to_string(),
            body: "milk, eggs, bread".to_string(),
            created: "2024-03-01 14:05".to_string(),
            archived,
        }
    }

    #[test]
    fn card_shows_title_id_body_and_timestamp() {
        let out = render_list(&[card(false)], &Theme::default(), 60);
        assert!(out.contains("Groceries"));
        assert!(out.contains("#notes-1"));
        assert!(out.contains("milk, eggs, bread"));
        assert!(out.contains("2024-03-01 14:05"));
        assert!(!out.contains("[archived]"));
    }

    #[test]
    fn archived_card_carries_marker() {
        let out = render_list(&[card(true)], &Theme::default(), 60);
        assert!(out.contains("[archived]"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_list(&[], &Theme::default(), 60), "");
    }
}
