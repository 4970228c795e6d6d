//! Tracing setup.
//!
//! Log output goes to a daily-rotated file under the data directory rather
//! than stderr, which the terminal UI owns. Levels are controlled by the
//! configured filter string (standard `EnvFilter` syntax, e.g. `info` or
//! `notekeep=debug`).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::data_dir;

/// Initializes the global tracing subscriber.
///
/// Returns the appender worker guard; dropping it flushes buffered log lines,
/// so the caller must hold it for the life of the process. Returns `None`
/// (with tracing disabled) when file logging is off or the log directory
/// cannot be created; the app keeps running either way.
pub fn init_tracing(filter: &str, log_to_file: bool) -> Option<WorkerGuard> {
    if !log_to_file {
        return None;
    }

    let dir = data_dir().join("logs");
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    Some(init_with_dir(filter, &dir))
}

fn init_with_dir(filter: &str, dir: &Path) -> WorkerGuard {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = tracing_appender::rolling::daily(dir, "notekeep.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_falls_back_to_info() {
        // EnvFilter rejects this syntax; init must not panic on it.
        assert!(EnvFilter::try_new("not==valid==filter").is_err());
        let dir = tempfile::tempdir().unwrap();
        let _guard = init_with_dir("not==valid==filter", dir.path());
        tracing::info!("smoke");
    }
}
