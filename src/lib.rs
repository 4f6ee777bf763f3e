// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//!
//! This project re-implements the content machinery of a bilingual
//! (English/Farsi) portfolio site as a Rust service.
//!
//! It consists of three main modules: (a) an i18n layer holding the active
//! display language and a statically-embedded translation catalog, (b) a
//! WordPress content layer that reads project records and media assets over
//! the WP REST API, and (c) a Web server exposing the page view models and
//! a CORS proxy in front of a generative-AI endpoint.
//!
//! # Third-party crates
//!
//! Here's a list of the most important ones:
//!
//! 1. Deserialization and Serialization:
//!     * [serde][1]: for the basic serialization + deserialization capabilities.
//!     * [serde_json][2]: for the JSON format bindings.
//!     * [serde_with][3]: for custom helpers.
//!
//! 2. HTTP:
//!     * [rocket][4]: for the server side.
//!     * [reqwest][5]: for the client side --both the WordPress reads and
//!       the proxy's upstream call.
//!
//! 3. URLs:
//!     * [url][6]: for parsing and carrying media asset locations.
//!
//! 4. Observability:
//!     * [tracing][7] + [tracing-subscriber][8]: for structured logging to
//!       console and file.
//!
//! [1]: https://crates.io/crates/serde
//! [2]: https://crates.io/crates/serde_json
//! [3]: https://crates.io/crates/serde_with
//! [4]: https://crates.io/crates/rocket
//! [5]: https://crates.io/crates/reqwest
//! [6]: https://crates.io/crates/url
//! [7]: https://crates.io/crates/tracing
//! [8]: https://crates.io/crates/tracing-subscriber
//!

#![doc = include_str!("../doc/I18N_README.md")]
#![doc = include_str!("../doc/WP_README.md")]
#![doc = include_str!("../doc/WEB_README.md")]

mod config;
mod data;
mod error;
mod i18n;
mod web;
mod wp;

pub use config::*;
pub use data::*;
pub use error::FolioError;
pub use i18n::{LanguageStore, Locale};
pub use web::build;
pub use wp::*;

/// Path prefix of the WordPress REST API, relative to the install base URL.
pub const WP_API_PATH: &str = "wp-json/wp/v2";

/// Generate a message (in the style of `format!` macro), log it at level
/// _error_ and raise a [runtime error][crate::FolioError#variant.Runtime].
#[macro_export]
macro_rules! runtime_error {
    ( $( $arg: tt )* ) => {
        {
            let msg = std::fmt::format(core::format_args!($($arg)*));
            tracing::error!("{}", msg);
            return Err($crate::FolioError::Runtime(msg.into()));
        }
    }
}
