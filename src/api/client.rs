//! HTTP implementation of the notes service contract.
//!
//! This module implements [`NotesApi`] over the REST service using `reqwest`.
//! Every response body is a `{status, message?, data?}` envelope; any envelope
//! whose status field is not `"success"` is a failure carrying `message`.
//! Transport failures and non-2xx responses surface through the same single
//! error kind, prefixed per operation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::NotesApi;
use crate::domain::{Note, NoteDraft, NotekeepError, Result};

/// Operation prefixes for remote errors. One per service operation, fixed.
const OP_LIST_ACTIVE: &str = "failed to load notes";
const OP_LIST_ARCHIVED: &str = "failed to load archived notes";
const OP_CREATE: &str = "failed to create note";
const OP_REMOVE: &str = "failed to delete note";
const OP_ARCHIVE: &str = "failed to archive note";
const OP_UNARCHIVE: &str = "failed to unarchive note";

/// Response envelope used by every service endpoint.
///
/// `message` accompanies failures (and some successes); `data` is present on
/// successful reads and creates, absent on acknowledgement-only responses.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Accepts a successful envelope, rejecting any non-`"success"` status.
    fn accept(self, operation: &'static str) -> Result<Option<T>> {
        if self.status == "success" {
            Ok(self.data)
        } else {
            let message = self
                .message
                .unwrap_or_else(|| format!("service reported status {:?}", self.status));
            Err(NotekeepError::remote(operation, message))
        }
    }

    /// Accepts a successful envelope that must carry data.
    fn accept_data(self, operation: &'static str) -> Result<T> {
        self.accept(operation)?
            .ok_or_else(|| NotekeepError::remote(operation, "response carried no data"))
    }
}

/// HTTP client for the remote notes service.
///
/// Thin request/response wrapper: one method per endpoint, shared envelope
/// decoding, no local state. Cloning is cheap (`reqwest::Client` is an `Arc`
/// internally).
///
/// # Examples
///
/// ```no_run
/// use notekeep::api::{ApiClient, NotesApi};
///
/// # async fn run() -> notekeep::domain::Result<()> {
/// let api = ApiClient::new("https://notes-api.dicoding.dev/v2");
/// let active = api.list_active().await?;
/// println!("{} active notes", active.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured service base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and decodes the response envelope.
    ///
    /// Transport errors, unparseable bodies, and non-2xx responses without a
    /// readable envelope all map to the operation's error prefix.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| NotekeepError::remote(operation, e))?;

        let http_status = response.status();
        response.json::<Envelope<T>>().await.map_err(|e| {
            if http_status.is_success() {
                NotekeepError::remote(operation, e)
            } else {
                NotekeepError::remote(operation, format!("service responded with {http_status}"))
            }
        })
    }
}

impl NotesApi for ApiClient {
    #[tracing::instrument(name = "api_list_active", level = "debug", skip_all)]
    async fn list_active(&self) -> Result<Vec<Note>> {
        let request = self.http.get(self.url("/notes"));
        let notes = self
            .send::<Vec<Note>>(OP_LIST_ACTIVE, request)
            .await?
            .accept_data(OP_LIST_ACTIVE)?;
        tracing::debug!(count = notes.len(), "active notes loaded");
        Ok(notes)
    }

    #[tracing::instrument(name = "api_list_archived", level = "debug", skip_all)]
    async fn list_archived(&self) -> Result<Vec<Note>> {
        let request = self.http.get(self.url("/notes/archived"));
        let notes = self
            .send::<Vec<Note>>(OP_LIST_ARCHIVED, request)
            .await?
            .accept_data(OP_LIST_ARCHIVED)?;
        tracing::debug!(count = notes.len(), "archived notes loaded");
        Ok(notes)
    }

    #[tracing::instrument(name = "api_create", level = "debug", skip_all)]
    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        let request = self.http.post(self.url("/notes")).json(draft);
        let note = self
            .send::<Note>(OP_CREATE, request)
            .await?
            .accept_data(OP_CREATE)?;
        tracing::debug!(id = %note.id, "note created");
        Ok(note)
    }

    #[tracing::instrument(name = "api_remove", level = "debug", skip(self))]
    async fn remove(&self, id: &str) -> Result<()> {
        let request = self.http.delete(self.url(&format!("/notes/{id}")));
        self.send::<serde_json::Value>(OP_REMOVE, request)
            .await?
            .accept(OP_REMOVE)?;
        tracing::debug!("note deleted");
        Ok(())
    }

    #[tracing::instrument(name = "api_archive", level = "debug", skip(self))]
    async fn archive(&self, id: &str) -> Result<()> {
        let request = self.http.post(self.url(&format!("/notes/{id}/archive")));
        self.send::<serde_json::Value>(OP_ARCHIVE, request)
            .await?
            .accept(OP_ARCHIVE)?;
        tracing::debug!("note archived");
        Ok(())
    }

    #[tracing::instrument(name = "api_unarchive", level = "debug", skip(self))]
    async fn unarchive(&self, id: &str) -> Result<()> {
        let request = self.http.post(self.url(&format!("/notes/{id}/unarchive")));
        self.send::<serde_json::Value>(OP_UNARCHIVE, request)
            .await?
            .accept(OP_UNARCHIVE)?;
        tracing::debug!("note unarchived");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = ApiClient::new("https://example.test/v2/");
        assert_eq!(api.base_url(), "https://example.test/v2");
        assert_eq!(api.url("/notes"), "https://example.test/v2/notes");
    }

    #[test]
    fn success_envelope_yields_data() {
        let envelope: Envelope<Vec<Note>> = serde_json::from_str(
            r#"{
                "status": "success",
                "message": "Notes retrieved",
                "data": [{
                    "id": "notes-1",
                    "title": "A",
                    "body": "aaaaaaaaaa",
                    "createdAt": "2024-03-01T14:05:00.000Z",
                    "archived": false
                }]
            }"#,
        )
        .unwrap();

        let notes = envelope.accept_data(OP_LIST_ACTIVE).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "notes-1");
    }

    #[test]
    fn failure_envelope_carries_service_message_with_prefix() {
        let envelope: Envelope<Note> = serde_json::from_str(
            r#"{"status": "fail", "message": "Note tidak ditemukan"}"#,
        )
        .unwrap();

        let err = envelope.accept(OP_ARCHIVE).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.starts_with(OP_ARCHIVE));
        assert!(rendered.contains("Note tidak ditemukan"));
    }

    #[test]
    fn failure_envelope_without_message_still_fails() {
        let envelope: Envelope<Note> =
            serde_json::from_str(r#"{"status": "error"}"#).unwrap();

        let err = envelope.accept(OP_CREATE).unwrap_err();
        assert!(err.to_string().contains("error"));
    }

    #[test]
    fn success_envelope_without_expected_data_is_an_error() {
        let envelope: Envelope<Note> =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();

        let err = envelope.accept_data(OP_CREATE).unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[test]
    fn ack_envelope_without_data_is_accepted() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"status": "success", "message": "Note deleted"}"#).unwrap();

        assert!(envelope.accept(OP_REMOVE).unwrap().is_none());
    }
}
