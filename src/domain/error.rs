//! Error types for the Notekeep client.
//!
//! This module defines the centralized error type [`NotekeepError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Notekeep operations.
///
/// This enum consolidates all error conditions that can occur while talking to the
/// remote notes service or interacting with the local environment. Remote failures
/// deliberately collapse into a single variant: the service contract makes no
/// distinction between transport failures and service-reported failures, so
/// neither does the client.
///
/// # Examples
///
/// ```
/// use notekeep::domain::NotekeepError;
///
/// let err = NotekeepError::remote("failed to archive note", "note not found");
/// assert_eq!(err.to_string(), "failed to archive note: note not found");
/// ```
#[derive(Debug, Error)]
pub enum NotekeepError {
    /// A remote operation failed.
    ///
    /// Covers transport errors, non-2xx responses, and response envelopes whose
    /// status field is not `"success"`. The message is a fixed operation-specific
    /// prefix concatenated with the underlying message.
    #[error("{operation}: {message}")]
    Remote {
        /// Operation-specific prefix (e.g. "failed to load notes").
        operation: &'static str,
        /// Underlying transport or service message.
        message: String,
    },

    /// A note draft failed the minimal pre-submission checks.
    ///
    /// Only length minimums are enforced client-side; everything else is the
    /// remote service's responsibility.
    #[error("invalid draft: {0}")]
    Draft(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a custom theme file cannot be read or parsed. The string
    /// contains a description of what went wrong, including the underlying I/O
    /// or parse error.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl NotekeepError {
    /// Builds a [`NotekeepError::Remote`] from an operation prefix and any
    /// displayable cause.
    pub fn remote(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Remote {
            operation,
            message: cause.to_string(),
        }
    }
}

/// A specialized `Result` type for Notekeep operations.
///
/// This is a type alias for `std::result::Result<T, NotekeepError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, NotekeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_concatenates_prefix_and_cause() {
        let err = NotekeepError::remote("failed to create note", "title is required");
        assert_eq!(err.to_string(), "failed to create note: title is required");
    }
}
