// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{config, runtime_error, ContentApi, FolioError, Media, Project};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Name of the header WordPress uses to report a collection's total size.
const WP_TOTAL_HDR: &str = "X-WP-Total";

/// [ContentApi] implementation over the WP REST API.
///
/// One `reqwest` client is built at startup and reused for every read. No
/// retries; the only resilience knob is the client-level request timeout
/// so a dead WordPress install can't pin request handlers forever.
#[derive(Debug)]
pub struct WpClient {
    inner: reqwest::Client,
}

impl WpClient {
    /// Construct a new instance w/ the timeout from [Config][crate::Config].
    pub fn new() -> Result<Self, FolioError> {
        let inner = reqwest::Client::builder()
            .timeout(config().http_timeout)
            .build()?;
        Ok(WpClient { inner })
    }

    /// GET a single WP resource. Map a non-success status to `Ok(None)`;
    /// transport and deserialization failures remain errors for the caller
    /// to log + degrade.
    async fn fetch<T: DeserializeOwned>(&self, partial: &str) -> Result<Option<T>, FolioError> {
        let url = config().wp_api_url(partial);
        debug!("GET {}", url);
        let resp = self.inner.get(&url).send().await?;
        if !resp.status().is_success() {
            debug!("GET {} -> {}", url, resp.status());
            return Ok(None);
        }
        Ok(Some(resp.json::<T>().await?))
    }
}

#[rocket::async_trait]
impl ContentApi for WpClient {
    async fn project(&self, id: u64) -> Result<Option<Project>, FolioError> {
        self.fetch(&format!("project/{}", id)).await
    }

    async fn media(&self, id: u64) -> Result<Option<Media>, FolioError> {
        self.fetch(&format!("media/{}", id)).await
    }

    async fn project_count(&self) -> Result<u64, FolioError> {
        // the count lives in a response header of the collection endpoint;
        // `_fields=id` keeps the body we discard small...
        let url = config().wp_api_url("project?per_page=1&_fields=id");
        debug!("GET {}", url);
        let resp = self.inner.get(&url).send().await?.error_for_status()?;
        match resp.headers().get(WP_TOTAL_HDR) {
            Some(x) => Ok(x
                .to_str()
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0)),
            None => runtime_error!("Missing {} header in '{}' response", WP_TOTAL_HDR, url),
        }
    }
}
