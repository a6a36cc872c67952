//! # canned
//!
//! Canned HTTP responses for services that answer through someone else's
//! framework. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your framework owns the sockets, the routing, and the request
//! lifecycle. canned owns exactly one thing: what a response *is*, and how
//! it leaves through the reply object you already have. Build a
//! [`Response`], annotate it, send it — configuration decides which
//! framework convention the send speaks, so handler code never does.
//!
//! What your framework already owns — canned intentionally ignores:
//!
//! - **Transport** — sockets, TLS, HTTP parsing
//! - **Routing** — which handler runs for which path
//! - **Request lifecycle** — middleware, extraction, scheduling
//!
//! What's left for canned — the part that repeats in every service:
//!
//! - A closed catalog of 64 statuses with ready-made messages — [`Status`]
//! - One serializable response shape with optional annotations — [`Response`]
//! - Config-driven dispatch through five framework conventions — [`ServerHandle`]
//!
//! ## Quick start
//!
//! ```rust
//! use canned::{KoaResponse, Response, ServerHandle, ServerKind, set_server_kind};
//! use serde_json::json;
//!
//! // Once, at startup. Deployments usually configure this in Cargo.toml
//! // or canned.config.json instead; see the config module docs.
//! set_server_kind(ServerKind::Koa);
//!
//! // In a handler: build, annotate, send.
//! let mut reply = KoaResponse::new();
//! Response::not_found()
//!     .with_cause("no user with id 42")
//!     .with_metadata(json!({ "id": 42 }))
//!     .with_request_id("req-7f3a")
//!     .send(&mut ServerHandle::Koa(&mut reply))
//!     .unwrap();
//!
//! assert_eq!(reply.status, 404);
//! assert_eq!(reply.body.unwrap()["message"], "Not Found");
//! ```

mod error;
mod premade;
mod response;
mod status;

pub mod config;
pub mod dispatch;

pub use config::{
    ConfigSources, ServerKind, active_server_kind, reset_server_kind, set_server_kind,
};
pub use dispatch::{
    ExpressResponse, FastifyReply, HapiToolkit, KoaResponse, RawHttpResponse, ServerHandle,
};
pub use error::Error;
pub use response::Response;
pub use status::Status;
