//! View switcher renderer: two tabs with live counts.

use crate::app::view::NoteView;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SwitcherInfo;

/// Renders the two view tabs, highlighting the current one.
#[must_use]
pub fn render_switcher(switcher: &SwitcherInfo, theme: &Theme) -> String {
    let active = tab(
        &switcher.active_label,
        switcher.current == NoteView::Active,
        theme,
    );
    let archived = tab(
        &switcher.archived_label,
        switcher.current == NoteView::Archived,
        theme,
    );
    format!("{active}  {archived}\n")
}

fn tab(label: &str, selected: bool, theme: &Theme) -> String {
    let colors = &theme.colors;
    if selected {
        format!(
            "{}{}[{label}]{}",
            Theme::bold(),
            Theme::fg(&colors.title_fg),
            Theme::reset()
        )
    } else {
        format!("{} {label} {}", Theme::fg(&colors.text_dim), Theme::reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_tab_is_bracketed() {
        let switcher = SwitcherInfo {
            active_label: "Active (2)".to_string(),
            archived_label: "Archived (1)".to_string(),
            current: NoteView::Archived,
        };
        let out = render_switcher(&switcher, &Theme::default());
        assert!(out.contains("[Archived (1)]"));
        assert!(!out.contains("[Active (2)]"));
    }
}
