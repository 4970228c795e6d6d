//! Empty state renderer.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered empty state message with its hint line.
#[must_use]
pub fn render_empty(empty: &EmptyState, theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;
    format!(
        "\n{}{}{}{}\n{}{}{}{}\n",
        Theme::bold(),
        Theme::fg(&colors.empty_state_fg),
        center(&empty.message, cols),
        Theme::reset(),
        Theme::dim(),
        Theme::fg(&colors.text_dim),
        center(&empty.subtitle, cols),
        Theme::reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_shows_message_and_subtitle() {
        let empty = EmptyState {
            message: "No active notes".to_string(),
            subtitle: "Type `add` to create your first note".to_string(),
        };
        let out = render_empty(&empty, &Theme::default(), 60);
        assert!(out.contains("No active notes"));
        assert!(out.contains("create your first note"));
    }
}
