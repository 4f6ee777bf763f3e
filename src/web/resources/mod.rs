// SPDX-License-Identifier: GPL-3.0-or-later

//! The resources this server exposes, one module per mount point.

pub mod ai;
pub mod projects;

use rocket::serde::json::Json;
use serde_json::{json, Value};

/// Build the JSON error body used across resources and catchers; e.g.
/// `{"error": "API key not set"}`.
pub(crate) fn error_body(info: &str) -> Json<Value> {
    Json(json!({ "error": info }))
}
