//! Terminal implementation of the [`Frontend`] capability.
//!
//! Confirmation dialogs become styled y/n prompts on stdin, notifications
//! become colored one-liners, and the loading indicator is a transient line
//! that is erased when the operation finishes.

use std::io::{self, BufRead, Write};

use crate::feedback::{Frontend, Notice};
use crate::ui::theme::Theme;

/// Console frontend: stdin prompts and ANSI-styled stdout output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFrontend {
    theme: Theme,
}

impl ConsoleFrontend {
    /// Creates a console frontend rendering with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn flush() {
        let _ = io::stdout().flush();
    }
}

impl Frontend for ConsoleFrontend {
    /// Prints the question and reads one line from stdin.
    ///
    /// Only an explicit `y` or `yes` (case-insensitive) confirms; anything
    /// else, including EOF, declines. Destructive defaults stay safe.
    fn confirm(&self, title: &str, text: &str) -> bool {
        print!(
            "{}{}{}{} {text} [y/N] ",
            Theme::bold(),
            Theme::fg(&self.theme.colors.warning_fg),
            title,
            Theme::reset(),
        );
        Self::flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, notice: Notice, message: &str) {
        let (symbol, color) = match notice {
            Notice::Success => ("✓", &self.theme.colors.success_fg),
            Notice::Error => ("✗", &self.theme.colors.error_fg),
        };
        println!("{}{symbol} {message}{}", Theme::fg(color), Theme::reset());
    }

    fn loading_started(&self, message: &str) {
        print!(
            "{}{}… {message}{}",
            Theme::dim(),
            Theme::fg(&self.theme.colors.text_dim),
            Theme::reset(),
        );
        Self::flush();
    }

    /// Erases the loading line so completed output starts on a clean row.
    fn loading_finished(&self) {
        print!("\r\u{1b}[2K");
        Self::flush();
    }
}
