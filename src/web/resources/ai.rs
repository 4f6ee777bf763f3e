// SPDX-License-Identifier: GPL-3.0-or-later

//! AI Proxy Resource (/ai)
//! -----------------------
//! A thin CORS proxy in front of the Gemini generation endpoint. The
//! browser never sees the credential: the server validates the request
//! body, attaches the key it holds, forwards the call and relays the
//! upstream JSON verbatim --status included. Every local failure comes
//! back as a JSON error object, never a silent success.

use crate::{config, web::resources::error_body};
use rocket::{http::Status, options, post, routes, serde::json::Json, State};
use serde_json::{json, Value};
use tracing::{debug, error, instrument, warn};

#[doc(hidden)]
pub fn routes() -> Vec<rocket::Route> {
    routes![generate, preflight]
}

/// The `reqwest` client used for the upstream call, built once and handed
/// to Rocket as managed state.
pub(crate) struct Upstream(reqwest::Client);

impl Upstream {
    pub(crate) fn new() -> Self {
        Upstream(
            reqwest::Client::builder()
                .timeout(config().http_timeout)
                .build()
                .expect("Failed creating upstream HTTP client"),
        )
    }
}

#[instrument(skip_all)]
#[post("/generate", format = "json", data = "<body>")]
async fn generate(body: Json<Value>, upstream: &State<Upstream>) -> (Status, Json<Value>) {
    debug!("...");

    // a usable body has a `contents` member...
    let Some(contents) = body.get("contents") else {
        warn!("Proxy request w/o 'contents'");
        return (Status::BadRequest, error_body("Invalid request."));
    };

    let Some(api_key) = config().gemini_api_key.as_deref() else {
        error!("GEMINI_API_KEY not set");
        return (Status::InternalServerError, error_body("API key not set"));
    };

    let generation_config = body
        .get("generationConfig")
        .cloned()
        .unwrap_or(json!({ "temperature": 1.3 }));
    let payload = json!({
        "contents": contents,
        "generationConfig": generation_config,
    });

    let resp = match upstream.0.post(config().gemini_url(api_key)).json(&payload).send().await {
        Ok(x) => x,
        Err(x) => {
            error!("Failed contacting upstream: {}", x);
            return (Status::BadGateway, error_body("Failed to contact Gemini API"));
        }
    };

    // relay the upstream answer verbatim, error or not...
    let status = Status::new(resp.status().as_u16());
    match resp.json::<Value>().await {
        Ok(x) => (status, Json(x)),
        Err(x) => {
            error!("Failed reading upstream response: {}", x);
            (Status::BadGateway, error_body("Failed to contact Gemini API"))
        }
    }
}

/// CORS preflight for the proxy. The actual `Access-Control-Allow-*`
/// headers ride on every response via the server's CORS fairing.
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}
