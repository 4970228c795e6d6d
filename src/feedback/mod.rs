//! User feedback capabilities: confirmation, notification, loading.
//!
//! This module defines the [`Frontend`] trait, the capability surface the
//! coordinator uses to talk to a human: yes/no confirmation dialogs, transient
//! success/error notifications, and a loading indicator. The concrete
//! presentation is swappable; [`ConsoleFrontend`] is the terminal
//! implementation, and tests inject recording fakes.
//!
//! # Loading discipline
//!
//! A loading indicator must be visible for the whole duration of every
//! network-involving operation and hidden afterward regardless of outcome.
//! [`LoadingGuard`] encodes that as scoped acquisition/release: construction
//! shows the indicator, `Drop` hides it, so early returns and error paths
//! cannot leak a spinner.

pub mod console;

pub use console::ConsoleFrontend;

/// Kind of a transient notification shown after an operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The operation succeeded.
    Success,
    /// The operation failed; the message carries the error text.
    Error,
}

/// Capability surface for user interaction.
///
/// Injected into the coordinator so that business logic never knows how
/// dialogs or notifications are presented.
pub trait Frontend {
    /// Asks the user a yes/no question and returns their answer.
    ///
    /// `title` is a short heading (e.g. "Delete note"); `text` is the full
    /// question, typically quoting the note title.
    fn confirm(&self, title: &str, text: &str) -> bool;

    /// Shows a transient success or error notification.
    fn notify(&self, notice: Notice, message: &str);

    /// Shows the loading indicator with a short progress message.
    ///
    /// Prefer [`LoadingGuard::begin`] over calling this directly.
    fn loading_started(&self, message: &str);

    /// Hides the loading indicator.
    fn loading_finished(&self);
}

/// Scoped loading indicator: shown on construction, hidden on drop.
///
/// # Examples
///
/// ```
/// use notekeep::feedback::{Frontend, LoadingGuard, Notice};
///
/// fn fetch_something(frontend: &impl Frontend) -> Result<(), String> {
///     let _loading = LoadingGuard::begin(frontend, "fetching");
///     Err("boom".to_string()) // indicator is still hidden on this path
/// }
/// ```
pub struct LoadingGuard<'a, F: Frontend + ?Sized> {
    frontend: &'a F,
}

impl<'a, F: Frontend + ?Sized> LoadingGuard<'a, F> {
    /// Shows the loading indicator and returns the guard that hides it.
    pub fn begin(frontend: &'a F, message: &str) -> Self {
        frontend.loading_started(message);
        Self { frontend }
    }
}

impl<F: Frontend + ?Sized> Drop for LoadingGuard<'_, F> {
    fn drop(&mut self) {
        self.frontend.loading_finished();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingFrontend {
        started: AtomicUsize,
        finished: AtomicUsize,
    }

    impl Frontend for CountingFrontend {
        fn confirm(&self, _title: &str, _text: &str) -> bool {
            true
        }
        fn notify(&self, _notice: Notice, _message: &str) {}
        fn loading_started(&self, _message: &str) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }
        fn loading_finished(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn guard_releases_on_scope_exit() {
        let frontend = CountingFrontend::default();
        {
            let _loading = LoadingGuard::begin(&frontend, "working");
            assert_eq!(frontend.started.load(Ordering::SeqCst), 1);
            assert_eq!(frontend.finished.load(Ordering::SeqCst), 0);
        }
        assert_eq!(frontend.finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn guard_releases_on_error_path() {
        fn failing_operation(frontend: &impl Frontend) -> Result<(), ()> {
            let _loading = LoadingGuard::begin(frontend, "working");
            Err(())
        }

        let frontend = CountingFrontend::default();
        assert!(failing_operation(&frontend).is_err());
        assert_eq!(frontend.started.load(Ordering::SeqCst), 1);
        assert_eq!(frontend.finished.load(Ordering::SeqCst), 1);
    }
}
