//! Header bar renderer: view title plus collection statistics.

use crate::ui::helpers::pad_to;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header: a filled title bar and a stats badge line.
#[must_use]
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let colors = &theme.colors;
    let bg = colors
        .header_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    let title_bar = format!(
        "{bg}{}{}{}{}",
        Theme::fg(&colors.header_fg),
        Theme::bold(),
        pad_to(&header.title, cols),
        Theme::reset()
    );

    let stats = &header.stats;
    let badge = format!(
        "{}{} {} active · {} archived · {} total {}",
        Theme::fg(&colors.badge_fg),
        Theme::bg(&colors.badge_bg),
        stats.active,
        stats.archived,
        stats.total,
        Theme::reset()
    );

    format!("{title_bar}\n{badge}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::StatsInfo;

    fn header() -> HeaderInfo {
        HeaderInfo {
            title: " Active Notes ".to_string(),
            stats: StatsInfo {
                active: 2,
                archived: 1,
                total: 3,
            },
        }
    }

    #[test]
    fn header_carries_title_and_counts() {
        let out = render_header(&header(), &Theme::default(), 60);
        assert!(out.contains("Active Notes"));
        assert!(out.contains("2 active"));
        assert!(out.contains("1 archived"));
        assert!(out.contains("3 total"));
    }
}
