//! Buffered HTTP response.
//!
//! A [`Response`] is what a [`Transport`](crate::net::Transport) returns once
//! the whole body has been read. Any status code is a valid response here: a
//! `404` with a JSON body is as much a result as a `200`. Deciding what a
//! status means is left to whoever reads the body.
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Reason phrase, `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers (case-insensitive names).
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with no headers. Mostly useful for transports that
    /// do not speak HTTP on the wire.
    pub fn new(url: url::Url, status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();

        Self {
            url,
            status,
            status_text,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON, regardless of status code or `Content-Type`.
    ///
    /// The body is decoded as UTF-8 first, the way browsers do: a leading BOM
    /// is dropped and invalid sequences become U+FFFD instead of failing.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text())
    }

    /// Body as UTF-8 text, leading BOM stripped, lossy on invalid bytes.
    pub fn text(&self) -> Cow<'_, str> {
        let body = self.body.strip_prefix(UTF8_BOM).unwrap_or(&self.body[..]);
        String::from_utf8_lossy(body)
    }
}
