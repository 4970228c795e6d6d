//! Remote notes service abstraction.
//!
//! This module defines the [`NotesApi`] trait that abstracts over the remote
//! notes service, and the HTTP implementation used in production. The trait
//! exists so the coordinator can be exercised against an in-memory fake in
//! tests without changing business logic.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the service contract one-to-one: six
//! operations, no retries, no timeouts beyond transport defaults, no
//! partial-success handling. This is a pass-through, not a resilience layer.

pub mod client;

pub use client::ApiClient;

use crate::domain::{Note, NoteDraft, Result};

/// Abstraction over the remote notes service.
///
/// Implementations must surface every failure (transport, non-2xx, or a
/// non-`"success"` envelope status) as a single error kind carrying an
/// operation-specific prefix and the underlying message.
///
/// # Implementations
///
/// - [`ApiClient`]: HTTP client against the REST service (default)
pub trait NotesApi {
    /// Lists all active (non-archived) notes, in service order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn list_active(&self) -> impl std::future::Future<Output = Result<Vec<Note>>> + Send;

    /// Lists all archived notes, in service order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn list_archived(&self) -> impl std::future::Future<Output = Result<Vec<Note>>> + Send;

    /// Creates a note from a draft, returning the created record echo.
    ///
    /// The service assigns the id and creation timestamp. Callers that rely on
    /// reload-after-mutation may ignore the returned note.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn create(&self, draft: &NoteDraft) -> impl std::future::Future<Output = Result<Note>> + Send;

    /// Deletes the note with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn remove(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Moves the note with the given id into the archived collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn archive(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Moves the note with the given id back into the active collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports failure.
    fn unarchive(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}
