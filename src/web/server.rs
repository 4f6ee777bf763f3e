// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    config,
    web::{resources, resources::error_body, timing::Timing},
    ContentApi, MockApi, WpClient,
};
use rocket::{
    catch, catchers,
    fairing::AdHoc,
    http::Header,
    serde::json::Json,
    time::{format_description::well_known::Rfc2822, OffsetDateTime},
    Build, Request, Rocket,
};
use serde_json::Value;
use std::{sync::Arc, time::SystemTime};
use tracing::{debug, error, info};

/// Entry point for constructing a Local Rocket and use it for either
/// testing or not. When `testing` is TRUE a mock content API is injected;
/// otherwise requests hit the real WordPress install from the
/// configuration.
pub fn build(testing: bool) -> Rocket<Build> {
    let api: Arc<dyn ContentApi> = if testing {
        Arc::new(MockApi::with_fixtures())
    } else {
        Arc::new(WpClient::new().expect("Failed creating WP client"))
    };

    let port: u16 = config().port.parse().expect("Failed parsing FOLIO_PORT");
    let figment = rocket::Config::figment().merge(("port", port));
    rocket::custom(figment)
        .mount("/projects", resources::projects::routes())
        .mount("/ai", resources::ai::routes())
        .manage(api)
        .manage(resources::ai::Upstream::new())
        // startup hook
        .attach(AdHoc::on_liftoff("Liftoff Hook", move |_| {
            Box::pin(async move {
                let now: OffsetDateTime = SystemTime::now().into();
                info!(
                    "folio {} starting up on {:?}",
                    env!("CARGO_PKG_VERSION"),
                    now.format(&Rfc2822).unwrap()
                );
                info!("WP content API at '{}'", config().wp_base_url);
            })
        }))
        // the site and the WordPress install run on different origins, so
        // every response carries permissive CORS headers...
        .attach(AdHoc::on_response("CORS response headers", |_, resp| {
            Box::pin(async move {
                resp.set_header(Header::new("Access-Control-Allow-Origin", "*"));
                resp.set_header(Header::new(
                    "Access-Control-Allow-Methods",
                    "GET, POST, OPTIONS",
                ));
                resp.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
            })
        }))
        // shutdown hook
        .attach(AdHoc::on_shutdown("Shutdown Hook", |_| {
            Box::pin(async move {
                let now: OffsetDateTime = SystemTime::now().into();
                info!(
                    "folio {} shutting down on {:?}",
                    env!("CARGO_PKG_VERSION"),
                    now.format(&Rfc2822).unwrap()
                );
            })
        }))
        // response timing fairing
        .attach(Timing)
        // wire the catchers...
        .register("/", catchers![bad_request, not_found, unknown_route])
}

#[catch(400)]
fn bad_request(req: &Request) -> Json<Value> {
    error!("----- 400 -----");
    debug!("req = {:?}", req);
    error_body("Invalid request.")
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    error!("----- 404 -----");
    debug!("req = {:?}", req);
    error_body("Resource not found")
}

#[catch(422)]
fn unknown_route(req: &Request) -> Json<Value> {
    error!("----- 422 -----");
    debug!("req = {:?}", req);
    error_body("Invalid request.")
}
