//! Framework dispatch: one response, five sending conventions.
//!
//! Server frameworks disagree about how a response leaves the building.
//! This module hides the disagreement behind [`ServerHandle`]: wrap
//! whatever reply object your framework gave you, and [`send`] drives it
//! with the call sequence the configured [`ServerKind`] expects.
//!
//! | Kind | Handle wraps | Call sequence |
//! |---|---|---|
//! | `http` | `dyn RawHttpResponse` | `write_head(code, [("Content-Type", "application/json")])`, then `end(json)` |
//! | `express` | `dyn ExpressResponse` | `status(code)`, then `json(value)` |
//! | `fastify` | `dyn FastifyReply` | `code(code)`, then `send(value)` |
//! | `koa` | `KoaResponse` | assign `status`, then `body` |
//! | `hapi` | `dyn HapiToolkit` | `response(value)`, then `code(code)` |
//!
//! The configuration decides the convention; the handle merely has to be
//! able to speak it. Handing over a handle of the wrong shape is refused
//! as [`Error::HandleMismatch`] before any call is made, and the body is
//! encoded before the first call too, so a failed dispatch leaves the
//! handle exactly as it arrived.
//!
//! # Bring your own handle
//!
//! The capability traits are small on purpose. Adapting a real framework
//! reply object (or a test recorder) is a couple of method bodies:
//!
//! ```rust
//! use canned::{ExpressResponse, Response, ServerHandle, ServerKind, set_server_kind};
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct Recorder {
//!     status: Option<u16>,
//!     body: Option<Value>,
//! }
//!
//! impl ExpressResponse for Recorder {
//!     fn status(&mut self, status: u16) -> &mut dyn ExpressResponse {
//!         self.status = Some(status);
//!         self
//!     }
//!
//!     fn json(&mut self, body: Value) {
//!         self.body = Some(body);
//!     }
//! }
//!
//! set_server_kind(ServerKind::Express);
//!
//! let mut recorder = Recorder::default();
//! Response::created().send(&mut ServerHandle::Express(&mut recorder)).unwrap();
//!
//! assert_eq!(recorder.status, Some(201));
//! ```

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::{self, ConfigSources, ServerKind};
use crate::error::Error;
use crate::response::Response;

const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

// ── Capability traits ─────────────────────────────────────────────────────────

/// A response object speaking the raw `http` convention.
pub trait RawHttpResponse {
    /// Writes the status line and headers, returning the receiver so the
    /// body write can chain.
    fn write_head(&mut self, status: u16, headers: &[(&str, &str)]) -> &mut dyn RawHttpResponse;

    /// Writes the body and finishes the response.
    fn end(&mut self, body: &str);
}

/// A response object speaking the `express` convention.
pub trait ExpressResponse {
    fn status(&mut self, status: u16) -> &mut dyn ExpressResponse;

    fn json(&mut self, body: Value);
}

/// A reply object speaking the `fastify` convention.
pub trait FastifyReply {
    fn code(&mut self, status: u16) -> &mut dyn FastifyReply;

    fn send(&mut self, body: Value);
}

/// A response toolkit speaking the `hapi` convention. Note the inverted
/// order: the body is wrapped first, then the status is applied.
pub trait HapiToolkit {
    fn response(&mut self, body: Value) -> &mut dyn HapiToolkit;

    fn code(&mut self, status: u16);
}

/// A response object speaking the `koa` convention, which is plain field
/// assignment rather than method calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KoaResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl KoaResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

// ── ServerHandle ──────────────────────────────────────────────────────────────

/// A framework reply object, wrapped in the convention it speaks.
///
/// Borrows the underlying object for the duration of the send; the
/// framework keeps ownership.
pub enum ServerHandle<'a> {
    Http(&'a mut dyn RawHttpResponse),
    Express(&'a mut dyn ExpressResponse),
    Fastify(&'a mut dyn FastifyReply),
    Koa(&'a mut KoaResponse),
    Hapi(&'a mut dyn HapiToolkit),
}

impl ServerHandle<'_> {
    /// The convention this handle speaks.
    pub fn kind(&self) -> ServerKind {
        match self {
            Self::Http(_)    => ServerKind::Http,
            Self::Express(_) => ServerKind::Express,
            Self::Fastify(_) => ServerKind::Fastify,
            Self::Koa(_)     => ServerKind::Koa,
            Self::Hapi(_)    => ServerKind::Hapi,
        }
    }
}

impl fmt::Debug for ServerHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServerHandle").field(&self.kind()).finish()
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Sends `response` through `handle` using the process-wide configured
/// server kind. [`Response::send`] is this function with the arguments
/// flipped.
pub fn send(response: &Response, handle: &mut ServerHandle<'_>) -> Result<(), Error> {
    send_via(config::active_server_kind()?, response, handle)
}

/// Sends `response` through `handle`, resolving the server kind from
/// explicit `sources` instead of the process-wide value. No memoization;
/// the sources are consulted on every call.
pub fn send_with(
    sources: &ConfigSources,
    response: &Response,
    handle: &mut ServerHandle<'_>,
) -> Result<(), Error> {
    send_via(sources.resolve()?, response, handle)
}

fn send_via(
    kind: ServerKind,
    response: &Response,
    handle: &mut ServerHandle<'_>,
) -> Result<(), Error> {
    if handle.kind() != kind {
        return Err(Error::HandleMismatch {
            expected: kind,
            found: handle.kind(),
        });
    }

    let status = response.status_code().code();
    match handle {
        ServerHandle::Http(res) => {
            let body = response.to_json()?;
            res.write_head(status, &[JSON_CONTENT_TYPE]).end(&body);
        }
        ServerHandle::Express(res) => {
            let body = response.to_value()?;
            res.status(status).json(body);
        }
        ServerHandle::Fastify(reply) => {
            let body = response.to_value()?;
            reply.code(status).send(body);
        }
        ServerHandle::Koa(ctx) => {
            let body = response.to_value()?;
            ctx.status = status;
            ctx.body = Some(body);
        }
        ServerHandle::Hapi(toolkit) => {
            let body = response.to_value()?;
            toolkit.response(body).code(status);
        }
    }

    debug!(%kind, status, "sent response");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::status::Status;

    #[derive(Debug, PartialEq)]
    enum Call {
        Status(u16),
        Json(Value),
        Code(u16),
        Send(Value),
        Response(Value),
    }

    #[derive(Default)]
    struct RawDouble {
        calls: Vec<String>,
    }

    impl RawHttpResponse for RawDouble {
        fn write_head(
            &mut self,
            status: u16,
            headers: &[(&str, &str)],
        ) -> &mut dyn RawHttpResponse {
            self.calls.push(format!("write_head({status}, {headers:?})"));
            self
        }

        fn end(&mut self, body: &str) {
            self.calls.push(format!("end({body})"));
        }
    }

    #[derive(Default)]
    struct ExpressDouble {
        calls: Vec<Call>,
    }

    impl ExpressResponse for ExpressDouble {
        fn status(&mut self, status: u16) -> &mut dyn ExpressResponse {
            self.calls.push(Call::Status(status));
            self
        }

        fn json(&mut self, body: Value) {
            self.calls.push(Call::Json(body));
        }
    }

    #[derive(Default)]
    struct FastifyDouble {
        calls: Vec<Call>,
    }

    impl FastifyReply for FastifyDouble {
        fn code(&mut self, status: u16) -> &mut dyn FastifyReply {
            self.calls.push(Call::Code(status));
            self
        }

        fn send(&mut self, body: Value) {
            self.calls.push(Call::Send(body));
        }
    }

    #[derive(Default)]
    struct HapiDouble {
        calls: Vec<Call>,
    }

    impl HapiToolkit for HapiDouble {
        fn response(&mut self, body: Value) -> &mut dyn HapiToolkit {
            self.calls.push(Call::Response(body));
            self
        }

        fn code(&mut self, status: u16) {
            self.calls.push(Call::Code(status));
        }
    }

    #[test]
    fn http_convention_writes_head_then_body() {
        let response = Response::new(Status::NotFound).with_cause("no such route");
        let mut raw = RawDouble::default();

        send_via(ServerKind::Http, &response, &mut ServerHandle::Http(&mut raw)).unwrap();

        assert_eq!(
            raw.calls,
            vec![
                r#"write_head(404, [("Content-Type", "application/json")])"#.to_owned(),
                format!("end({})", response.to_json().unwrap()),
            ],
        );
    }

    #[test]
    fn express_convention_sets_status_then_json() {
        let response = Response::ok();
        let mut express = ExpressDouble::default();

        send_via(
            ServerKind::Express,
            &response,
            &mut ServerHandle::Express(&mut express),
        )
        .unwrap();

        assert_eq!(
            express.calls,
            vec![
                Call::Status(200),
                Call::Json(json!({ "statusCode": 200, "message": "OK" })),
            ],
        );
    }

    #[test]
    fn fastify_convention_codes_then_sends() {
        let response = Response::created().with_request_id("req-11");
        let mut fastify = FastifyDouble::default();

        send_via(
            ServerKind::Fastify,
            &response,
            &mut ServerHandle::Fastify(&mut fastify),
        )
        .unwrap();

        assert_eq!(
            fastify.calls,
            vec![
                Call::Code(201),
                Call::Send(json!({
                    "statusCode": 201,
                    "message": "Created",
                    "requestId": "req-11",
                })),
            ],
        );
    }

    #[test]
    fn koa_convention_assigns_status_then_body() {
        let response = Response::im_a_teapot();
        let mut koa = KoaResponse::new();

        send_via(ServerKind::Koa, &response, &mut ServerHandle::Koa(&mut koa)).unwrap();

        assert_eq!(koa.status, 418);
        assert_eq!(
            koa.body,
            Some(json!({ "statusCode": 418, "message": "I'm a teapot" })),
        );
    }

    #[test]
    fn hapi_convention_wraps_body_then_codes() {
        let response = Response::service_unavailable();
        let mut hapi = HapiDouble::default();

        send_via(ServerKind::Hapi, &response, &mut ServerHandle::Hapi(&mut hapi)).unwrap();

        assert_eq!(
            hapi.calls,
            vec![
                Call::Response(json!({
                    "statusCode": 503,
                    "message": "Service unavailable",
                })),
                Call::Code(503),
            ],
        );
    }

    #[test]
    fn mismatched_handle_is_refused_untouched() {
        let mut raw = RawDouble::default();

        let err = send_via(
            ServerKind::Express,
            &Response::ok(),
            &mut ServerHandle::Http(&mut raw),
        )
        .unwrap_err();

        match err {
            Error::HandleMismatch { expected, found } => {
                assert_eq!(expected, ServerKind::Express);
                assert_eq!(found, ServerKind::Http);
            }
            other => panic!("wrong error: {other}"),
        }
        assert!(raw.calls.is_empty());
    }

    #[test]
    fn sending_twice_produces_identical_sequences() {
        let response = Response::too_many_requests().with_cause("burst limit hit");
        let mut first = FastifyDouble::default();
        let mut second = FastifyDouble::default();

        send_via(
            ServerKind::Fastify,
            &response,
            &mut ServerHandle::Fastify(&mut first),
        )
        .unwrap();
        send_via(
            ServerKind::Fastify,
            &response,
            &mut ServerHandle::Fastify(&mut second),
        )
        .unwrap();

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn handle_reports_its_own_kind() {
        let mut koa = KoaResponse::new();
        assert_eq!(ServerHandle::Koa(&mut koa).kind(), ServerKind::Koa);

        let mut raw = RawDouble::default();
        assert_eq!(ServerHandle::Http(&mut raw).kind(), ServerKind::Http);
    }

    #[test]
    fn unresolved_configuration_leaves_the_handle_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let sources = ConfigSources::from_dir(dir.path());
        let mut raw = RawDouble::default();

        let err =
            send_with(&sources, &Response::ok(), &mut ServerHandle::Http(&mut raw)).unwrap_err();

        assert!(matches!(err, Error::ConfigurationNotFound));
        assert!(raw.calls.is_empty());
    }

    #[test]
    fn unsupported_kind_leaves_the_handle_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("canned.config.json"),
            r#"{ "serverType": "carrier-pigeon" }"#,
        )
        .unwrap();
        let sources = ConfigSources::from_dir(dir.path());
        let mut express = ExpressDouble::default();

        let err = send_with(
            &sources,
            &Response::ok(),
            &mut ServerHandle::Express(&mut express),
        )
        .unwrap_err();

        match err {
            Error::UnsupportedServerType(value) => assert_eq!(value, "carrier-pigeon"),
            other => panic!("wrong error: {other}"),
        }
        assert!(express.calls.is_empty());
    }
}
