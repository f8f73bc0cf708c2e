//! # Web API Handlers
//!
//! Request handlers organized by endpoint group.

pub mod analytics;
pub mod config;
pub mod health;
pub mod tasks;

use axum::body::Bytes;
use serde_json::{Map, Value};

/// Parse a request body leniently
///
/// Malformed or absent JSON, and any non-object document, is treated as an
/// empty mapping so callers fall back to their defaults. A bad body is never
/// a fatal error on this API.
pub(crate) fn parse_lenient_body(body: &Bytes) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::Object(Map::new()),
    }
}
