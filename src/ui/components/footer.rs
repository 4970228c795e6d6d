//! Footer renderer: available command hints.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the dimmed command hint line under a border rule.
#[must_use]
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;
    format!(
        "{}{}{}\n{}{}{}{}\n",
        Theme::fg(&colors.border),
        "─".repeat(cols),
        Theme::reset(),
        Theme::dim(),
        Theme::fg(&colors.text_dim),
        footer.commands,
        Theme::reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lists_commands() {
        let footer = FooterInfo {
            commands: "add  quit".to_string(),
        };
        let out = render_footer(&footer, &Theme::default(), 40);
        assert!(out.contains("add  quit"));
    }
}
