// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use url::Url;

/// A WP media record, reduced to the one field this site consumes.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Media {
    id: u64,
    source_url: Url,
}

impl Media {
    /// Construct a new instance.
    pub fn new(id: u64, source_url: Url) -> Self {
        Media { id, source_url }
    }

    /// Numeric identifier of this asset in the content API.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Concrete URL of the asset.
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Consume this record, yielding the asset URL.
    pub fn into_source_url(self) -> Url {
        self.source_url
    }
}
