//! Frame composition: state in, markup out.
//!
//! [`render`] is the single entry point for drawing. It is a pure function of
//! the application state: no IO, no hidden inputs, so rendering the same state
//! twice yields byte-identical output and a re-render is always safe.

use crate::app::state::AppState;
use crate::ui::components::{render_empty, render_footer, render_header, render_list, render_switcher};

/// Renders a complete frame of markup for the given state.
///
/// `cols` is the target terminal width in characters. Output is deterministic:
/// equal states render to equal strings.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let vm = state.compute_viewmodel();
    let theme = &state.theme;

    let mut frame = String::new();
    frame.push_str(&render_header(&vm.header, theme, cols));
    frame.push_str(&render_switcher(&vm.switcher, theme));

    match &vm.empty_state {
        Some(empty) => frame.push_str(&render_empty(empty, theme, cols)),
        None => frame.push_str(&render_list(&vm.cards, theme, cols)),
    }

    frame.push_str(&render_footer(&vm.footer, theme, cols));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::NoteView;
    use crate::domain::Note;
    use crate::ui::theme::Theme;

    fn note(id: &str, title: &str, archived: bool) -> Note {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "body": "0123456789",
            "createdAt": "2024-03-01T14:05:00.000Z",
            "archived": archived,
        }))
        .unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.replace_collections(
            vec![note("1", "First", false)],
            vec![note("2", "Second", true)],
        );
        state
    }

    #[test]
    fn render_is_idempotent() {
        let state = state();
        assert_eq!(render(&state, 60), render(&state, 60));
    }

    #[test]
    fn render_shows_only_visible_collection() {
        let mut state = state();
        let out = render(&state, 60);
        assert!(out.contains("First"));
        assert!(!out.contains("Second"));

        state.switch_view(NoteView::Archived);
        let out = render(&state, 60);
        assert!(out.contains("Second"));
        assert!(!out.contains("First"));
    }

    #[test]
    fn render_falls_back_to_empty_state() {
        let state = AppState::new(Theme::default());
        let out = render(&state, 60);
        assert!(out.contains("No active notes"));
        assert!(out.contains("Active (0)"));
    }
}
