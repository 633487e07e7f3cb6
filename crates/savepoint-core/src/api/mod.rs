//! REST client for the clip API.
//!
//! Every request carries the session's bearer token. Non-2xx responses are
//! failures; the body is inspected for a JSON `message`/`error` field and
//! falls back to a generic message. No automatic retries: a retried create
//! is not idempotent, so the user re-triggers the action explicitly.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::draft::NewClipPayload;
use crate::models::{Clip, ClipId};
use crate::util::{compact_text, is_http_url, normalize_text_option};

/// Errors from the clip API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The `{ "data": ... }` envelope every clip endpoint responds with.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Bearer-token authenticated client for `/api/clips`.
#[derive(Debug, Clone)]
pub struct ClipApiClient {
    base_url: String,
    client: Client,
}

impl ClipApiClient {
    /// Build a client for the given API base URL.
    ///
    /// The URL is trimmed and must carry an http(s) scheme; a trailing
    /// slash is dropped so route formatting stays uniform.
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        Ok(Self {
            base_url,
            client: Client::builder().build()?,
        })
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full clip collection.
    pub async fn list_clips(&self, token: &str) -> ApiResult<Vec<Clip>> {
        let url = self.route("/api/clips");
        tracing::debug!(%url, "listing clips");
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<DataEnvelope<Vec<Clip>>>().await?.data)
    }

    /// Create a clip; the server assigns id, creation time, and default type.
    pub async fn create_clip(&self, token: &str, payload: &NewClipPayload) -> ApiResult<Clip> {
        let url = self.route("/api/clips");
        tracing::debug!(%url, "creating clip");
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<DataEnvelope<Clip>>().await?.data)
    }

    /// Replace a clip wholesale; returns the canonical stored record.
    pub async fn update_clip(&self, token: &str, clip: &Clip) -> ApiResult<Clip> {
        let url = self.route(&format!("/api/clips/{}", clip.id));
        tracing::debug!(%url, "updating clip");
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(clip)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<DataEnvelope<Clip>>().await?.data)
    }

    /// Delete a clip. Any 2xx counts as success; no body is required.
    pub async fn delete_clip(&self, token: &str, id: &ClipId) -> ApiResult<()> {
        let url = self.route(&format!("/api/clips/{id}"));
        tracing::debug!(%url, "deleting clip");
        let response = self.client.delete(&url).bearer_auth(token).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn route(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status,
        message: extract_error_message(status, &body),
    })
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers a JSON `message` field, then `error`, then the raw body
/// (truncated), and finally a generic status-only message.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) =
            normalize_text_option(parsed.message).or_else(|| normalize_text_option(parsed.error))
        {
            return message;
        }
    }

    let body = compact_text(body);
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        format!("request failed with status {status}: {body}")
    }
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_rejects_empty_and_schemeless_urls() {
        let empty = ClipApiClient::new("   ").unwrap_err();
        assert!(empty.to_string().contains("must not be empty"));

        let schemeless = ClipApiClient::new("api.savepoint.dev").unwrap_err();
        assert!(schemeless.to_string().contains("http:// or https://"));
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = ClipApiClient::new("https://api.savepoint.dev/").unwrap();
        assert_eq!(client.base_url(), "https://api.savepoint.dev");
        assert_eq!(client.route("/api/clips"), "https://api.savepoint.dev/api/clips");
    }

    #[test]
    fn error_message_prefers_message_field() {
        let message = extract_error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "Title is required", "error": "validation"}"#,
        );
        assert_eq!(message, "Title is required");
    }

    #[test]
    fn error_message_falls_back_to_error_field() {
        let message =
            extract_error_message(StatusCode::UNAUTHORIZED, r#"{"error": "invalid token"}"#);
        assert_eq!(message, "invalid token");
    }

    #[test]
    fn error_message_falls_back_to_generic_text() {
        let message = extract_error_message(StatusCode::BAD_GATEWAY, "");
        assert_eq!(message, "request failed with status 502 Bad Gateway");

        let message = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(message.contains("<html>oops</html>"));
    }

    #[test]
    fn error_message_ignores_blank_json_fields() {
        let message =
            extract_error_message(StatusCode::NOT_FOUND, r#"{"message": "  ", "error": null}"#);
        assert!(message.starts_with("request failed with status 404"));
    }

    #[test]
    fn envelope_unwraps_clip_lists() {
        let body = r#"{"data": [{
            "id": "1",
            "title": "Grid",
            "content": "css grid",
            "type": "code",
            "tags": ["css"],
            "createdAt": "2024-05-01T09:00:00Z"
        }]}"#;
        let envelope: DataEnvelope<Vec<Clip>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].title, "Grid");
    }
}
