//! Minimal canned example — one response shape, three framework conventions.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! The recorders below stand in for real framework reply objects. In a
//! service you would wrap whatever object your framework hands the
//! handler, and configure the server type in Cargo.toml or
//! canned.config.json instead of calling set_server_kind.

use canned::{
    ExpressResponse, KoaResponse, RawHttpResponse, Response, ServerHandle, ServerKind,
    set_server_kind,
};
use serde_json::{Value, json};

// Stands in for an express `res`.
#[derive(Default)]
struct ExpressRecorder {
    status: u16,
    body: Option<Value>,
}

impl ExpressResponse for ExpressRecorder {
    fn status(&mut self, status: u16) -> &mut dyn ExpressResponse {
        self.status = status;
        self
    }

    fn json(&mut self, body: Value) {
        self.body = Some(body);
    }
}

// Stands in for a node-style raw `res`.
#[derive(Default)]
struct PlainHttp {
    wire: Vec<String>,
}

impl RawHttpResponse for PlainHttp {
    fn write_head(&mut self, status: u16, headers: &[(&str, &str)]) -> &mut dyn RawHttpResponse {
        self.wire.push(format!("HTTP {status} {headers:?}"));
        self
    }

    fn end(&mut self, body: &str) {
        self.wire.push(body.to_owned());
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // express: status(code).json(body)
    set_server_kind(ServerKind::Express);
    let mut express = ExpressRecorder::default();
    Response::not_found()
        .with_cause("no user with id 42")
        .with_metadata(json!({ "id": 42 }))
        .with_request_id("req-7f3a")
        .send(&mut ServerHandle::Express(&mut express))
        .expect("express send");
    println!("express -> {} {:?}", express.status, express.body);

    // koa: plain field assignment
    set_server_kind(ServerKind::Koa);
    let mut koa = KoaResponse::new();
    Response::created()
        .with_metadata(json!({ "location": "/users/99" }))
        .send(&mut ServerHandle::Koa(&mut koa))
        .expect("koa send");
    println!("koa     -> {} {:?}", koa.status, koa.body);

    // raw http: write_head(code, headers).end(json)
    set_server_kind(ServerKind::Http);
    let mut raw = PlainHttp::default();
    Response::internal_server_error()
        .with_cause("upstream payment service timed out")
        .send(&mut ServerHandle::Http(&mut raw))
        .expect("http send");
    println!("http    -> {:?}", raw.wire);

    // The configuration, not the handle, decides the convention. A koa
    // handle under an express configuration is refused before any call.
    set_server_kind(ServerKind::Express);
    let mut stray = KoaResponse::new();
    if let Err(err) = Response::ok().send(&mut ServerHandle::Koa(&mut stray)) {
        println!("refused -> {err}");
    }
}
