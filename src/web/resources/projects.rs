// SPDX-License-Identifier: GPL-3.0-or-later

//! Projects Resource (/projects)
//! -----------------------------
//! Serves the per-page project view model and the total project count.
//!
//! Missing content is data, not an error: an unknown id still answers 200
//! w/ `null` members so the page can render its not-found state. Only the
//! count call --which has no degraded rendering to fall back on-- maps an
//! upstream failure to a 502.

use crate::{load_view, ContentApi, ProjectCount, ProjectView};
use rocket::{get, http::Status, routes, serde::json::Json, State};
use std::sync::Arc;
use tracing::{debug, error, instrument};

#[doc(hidden)]
pub fn routes() -> Vec<rocket::Route> {
    routes![get, count]
}

#[instrument(skip(api))]
#[get("/<id>")]
async fn get(id: u64, api: &State<Arc<dyn ContentApi>>) -> Json<ProjectView> {
    debug!("...");

    Json(load_view(api.inner().as_ref(), id).await)
}

#[instrument(skip(api))]
#[get("/count")]
async fn count(api: &State<Arc<dyn ContentApi>>) -> Result<Json<ProjectCount>, Status> {
    debug!("...");

    match api.project_count().await {
        Ok(x) => Ok(Json(ProjectCount::new(x))),
        Err(x) => {
            error!("Failed fetching project count: {}", x);
            Err(Status::BadGateway)
        }
    }
}
