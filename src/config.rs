// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Locale;
use dotenvy::var;
use std::{sync::OnceLock, time::Duration};

// NOTE - if these values change make sure the documentation in
// `.env.template` matches...
const DEFAULT_WP_BASE_URL: &str = "http://localhost/portfolio-wp";
const DEFAULT_EXTERNAL_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_HTTP_TIMEOUT_SECS: &str = "10";

static CONFIG: OnceLock<Config> = OnceLock::new();
/// This server configuration Singleton.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// A structure that provides the current configuration settings.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Config {
    /// Base URL of the WordPress install that owns the project records.
    pub wp_base_url: String,

    /// The base of this server's external URL as seen by its users.
    pub external_url: String,
    pub(crate) port: String,

    /// The display language used when none was explicitly selected.
    pub default_locale: Locale,

    pub(crate) gemini_api_key: Option<String>,
    pub(crate) gemini_model: String,

    pub(crate) http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let mut wp_base_url = var("WP_BASE_URL").unwrap_or(DEFAULT_WP_BASE_URL.to_string());
        while wp_base_url.ends_with('/') {
            wp_base_url.pop();
        }

        let mut external_url =
            var("FOLIO_EXTERNAL_URL").unwrap_or(DEFAULT_EXTERNAL_URL.to_string());
        if external_url.ends_with('/') {
            external_url.pop();
        }
        let port = var("FOLIO_PORT").unwrap_or(DEFAULT_PORT.to_string());

        let default_locale = Locale::from_code(
            &var("DEFAULT_LOCALE").unwrap_or(DEFAULT_LOCALE.to_string()),
        )
        .expect("Failed parsing DEFAULT_LOCALE");

        // absent key is not fatal here; the proxy resource reports it per
        // request w/ a 500 + JSON error body...
        let gemini_api_key = var("GEMINI_API_KEY").ok().filter(|x| !x.trim().is_empty());
        let gemini_model = var("GEMINI_MODEL").unwrap_or(DEFAULT_GEMINI_MODEL.to_string());

        let http_timeout = Duration::from_secs(
            var("HTTP_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .expect("Failed parsing HTTP_TIMEOUT_SECS"),
        );

        Self {
            wp_base_url,
            external_url,
            port,
            default_locale,
            gemini_api_key,
            gemini_model,
            http_timeout,
        }
    }
}

impl Config {
    /// Construct the WP REST API URL for a given resource path; e.g.
    /// `wp_api_url("project/42")`.
    pub(crate) fn wp_api_url(&self, partial: &str) -> String {
        format!(
            "{}/{}/{}",
            self.wp_base_url,
            crate::WP_API_PATH,
            partial.trim_start_matches('/')
        )
    }

    /// Construct the upstream generation endpoint URL, key included.
    pub(crate) fn gemini_url(&self, api_key: &str) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.gemini_model, api_key
        )
    }
}
