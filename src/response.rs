//! The uniform response entity.
//!
//! One [`Response`] describes an HTTP response the same way everywhere: a
//! status code from the catalog, a human-readable message, and four
//! optional annotation fields. Build one (usually through a premade
//! constructor like [`Response::not_found`]), annotate it, then either
//! encode it with [`Response::to_json`] or hand it to a framework handle
//! with [`Response::send`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dispatch::{self, ServerHandle};
use crate::error::Error;
use crate::status::Status;

// ── Response ─────────────────────────────────────────────────────────────────

/// A uniform, serializable HTTP response description.
///
/// The message defaults to the catalog phrase for the status code; every
/// other field starts empty and is filled with the consuming `with_*`
/// setters. Encoding is compact JSON with camelCase keys, in declaration
/// order, with absent optionals omitted entirely:
///
/// ```rust
/// use canned::{Response, Status};
///
/// let response = Response::new(Status::NotFound).with_cause("no row for id 42");
///
/// assert_eq!(response.message(), "Not Found");
/// assert_eq!(
///     response.to_json().unwrap(),
///     r#"{"statusCode":404,"message":"Not Found","cause":"no row for id 42"}"#,
/// );
/// ```
///
/// A `Response` is inert data. Sending it never consumes it, so one value
/// can annotate a log line, feed a test assertion, and answer the request
/// that produced it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    status_code: Status,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl Response {
    /// A response for `status` with the catalog message and no annotations.
    pub fn new(status: Status) -> Self {
        Self {
            status_code: status,
            message: status.reason().to_owned(),
            cause: None,
            metadata: None,
            reference: None,
            request_id: None,
        }
    }

    // ── Builder setters ───────────────────────────────────────────────────────

    /// Replaces the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches the underlying reason, e.g. which check failed.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Attaches an arbitrary JSON payload. Pass `serde_json::json!` output
    /// directly, or `serde_json::to_value` for your own types.
    pub fn with_metadata(mut self, metadata: impl Into<Value>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Attaches a documentation link for the consumer of the response.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Attaches the correlation id of the request being answered.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn status_code(&self) -> Status {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    // ── Encoding and sending ──────────────────────────────────────────────────

    /// Encodes the response as compact JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the response as a JSON value, for handles that take
    /// structured bodies rather than text. Serializing the value yields
    /// the same bytes as [`Response::to_json`], keys in the same order.
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Sends the response through `handle` using the configured framework
    /// convention. See the [`dispatch`](crate::dispatch) module for the
    /// exact call sequence each convention produces.
    ///
    /// ```rust
    /// use canned::{KoaResponse, Response, ServerHandle, ServerKind, set_server_kind};
    ///
    /// set_server_kind(ServerKind::Koa);
    ///
    /// let mut koa = KoaResponse::default();
    /// Response::ok().send(&mut ServerHandle::Koa(&mut koa)).unwrap();
    ///
    /// assert_eq!(koa.status, 200);
    /// ```
    pub fn send(&self, handle: &mut ServerHandle<'_>) -> Result<(), Error> {
        dispatch::send(self, handle)
    }
}
