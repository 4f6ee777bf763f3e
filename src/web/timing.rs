// SPDX-License-Identifier: GPL-3.0-or-later

use rocket::{
    fairing::{Fairing, Info, Kind},
    Data, Request, Response,
};
use std::time::Instant;
use tracing::debug;

/// Record how long we took to process each request and surface it in an
/// `X-Response-Time` response header.
pub(crate) struct Timing;

#[derive(Copy, Clone)]
struct Arrival(Option<Instant>);

#[rocket::async_trait]
impl Fairing for Timing {
    fn info(&self) -> Info {
        Info {
            name: "Response Timing",
            kind: Kind::Request | Kind::Response,
        }
    }

    /// Store arrival time in request-local state.
    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| Arrival(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let value = match req.local_cache(|| Arrival(None)).0 {
            Some(arrived) => {
                format!("{:.3} ms", arrived.elapsed().as_secs_f64() * 1_000.0)
            }
            None => "---".into(),
        };
        debug!("X-Response-Time: {}", value);
        res.set_raw_header("X-Response-Time", value);
    }
}
