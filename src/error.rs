// SPDX-License-Identifier: GPL-3.0-or-later

use std::{borrow::Cow, io};
use thiserror::Error;

/// Enumeration of different error types raised by this crate.
#[derive(Debug, Error)]
pub enum FolioError {
    /// HTTP client error while talking to the WordPress API or the
    /// generative-AI upstream.
    #[error("Remote call error: {0}")]
    Remote(
        #[doc(hidden)]
        #[from]
        reqwest::Error,
    ),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JSON(
        #[doc(hidden)]
        #[from]
        serde_json::Error,
    ),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    URL(
        #[doc(hidden)]
        #[from]
        url::ParseError,
    ),

    /// Unexpected runtime error.
    #[error("{0}")]
    Runtime(#[doc(hidden)] Cow<'static, str>),

    /// I/O error.
    #[error("I/O error: {0}")]
    IO(
        #[doc(hidden)]
        #[from]
        io::Error,
    ),
}
