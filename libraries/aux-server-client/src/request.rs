//! Replayable request descriptions.
//!
//! The retry protocols may send the same logical request more than once
//! (after a token refresh, or after the provider-retry delay), so every
//! endpoint method builds a description that can be turned into a fresh
//! `reqwest` request per attempt instead of a one-shot builder.

use reqwest::Method;

use crate::types::ErrorBody;

/// External provider a request ultimately talks to.
///
/// Provider-specific retry handling is keyed on this marker, set by the
/// sub-client that owns the endpoint, rather than on path sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Provider {
    Spotify,
}

/// Request body variants the client sends.
#[derive(Debug, Clone)]
pub(crate) enum Body {
    None,
    Json(serde_json::Value),
    Multipart(Vec<PartSpec>),
}

/// One part of a multipart form, held as owned data so it can be replayed.
#[derive(Debug, Clone)]
pub(crate) struct PartSpec {
    pub name: String,
    pub kind: PartKind,
}

#[derive(Debug, Clone)]
pub(crate) enum PartKind {
    Text(String),
    Bytes {
        bytes: Vec<u8>,
        file_name: String,
        mime: String,
    },
}

/// A backend request the dispatch loop can rebuild per attempt.
#[derive(Debug, Clone)]
pub(crate) struct RequestSpec {
    pub method: Method,
    /// Path relative to the base URL, starting with '/'
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub provider: Option<Provider>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Body::None,
            provider: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter when the value is present.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    /// Attach a serializable value as the JSON body.
    pub fn json_of<T: serde::Serialize>(self, value: &T) -> crate::error::Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| crate::error::ClientError::Parse(e.to_string()))?;
        Ok(self.json(value))
    }

    /// Attach a multipart body.
    pub fn multipart(mut self, parts: Vec<PartSpec>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    /// Mark the request as targeting Spotify through the backend.
    pub fn spotify(mut self) -> Self {
        self.provider = Some(Provider::Spotify);
        self
    }
}

/// Error detail substrings that identify a Spotify token race.
const PROVIDER_RETRY_HINTS: &[&str] = &["token", "spotify", "expired", "invalid", "not connected"];

/// Whether a failed Spotify-bound request should be retried once after
/// the provider-retry delay.
///
/// The backend owns Spotify token refresh; a request can land just
/// before that refresh completes and fail with one of these messages.
pub(crate) fn provider_retryable(status: u16, detail: Option<&str>) -> bool {
    if status != 400 && status != 401 {
        return false;
    }
    let Some(detail) = detail else {
        return false;
    };
    let detail = detail.to_lowercase();
    PROVIDER_RETRY_HINTS.iter().any(|hint| detail.contains(hint))
}

/// Pull the backend's `{"detail": ...}` message out of an error response.
///
/// Falls back to the raw body text when the backend sent something that
/// is not the standard error shape.
pub(crate) async fn read_detail(response: reqwest::Response) -> Option<String> {
    let text = response.text().await.ok()?;
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.detail,
        Err(_) => Some(text),
    }
}
