// SPDX-License-Identifier: GPL-3.0-or-later

//! A Mock [ContentApi] to use while testing, pre-loaded w/ a small set of
//! canned records exercising every shape a page load can encounter.

use crate::{ContentApi, FolioError, Media, Project};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

/// Id of the fixture project that has a resolvable image.
pub const MOCK_PROJECT_WITH_IMAGE: u64 = 1;
/// Id of the fixture project that has no image reference at all.
pub const MOCK_PROJECT_NO_IMAGE: u64 = 2;
/// Id of the fixture project whose image reference points at nothing.
pub const MOCK_PROJECT_DANGLING_IMAGE: u64 = 3;
/// Id of the fixture project whose image resolution fails w/ an error.
pub const MOCK_PROJECT_BROKEN_MEDIA: u64 = 4;

const MOCK_IMAGE_ID: u64 = 117;
const BROKEN_MEDIA_ID: u64 = 666;

/// URL the mock resolves [MOCK_PROJECT_WITH_IMAGE]'s image to.
pub const MOCK_IMAGE_URL: &str = "http://localhost/portfolio-wp/wp-content/uploads/2024/11/cover.png";

/// An in-memory stand-in for the WordPress install, injected by
/// [build][crate::build] when testing. Mirrors the content API's observable
/// behaviour: unknown ids are a non-success status --i.e. `Ok(None)`-- and
/// one designated media id fails w/ a transport-ish error.
#[derive(Debug, Default)]
pub struct MockApi {
    projects: HashMap<u64, Project>,
    media: HashMap<u64, Media>,
}

impl MockApi {
    /// Construct an instance pre-loaded w/ the canned fixture records.
    pub fn with_fixtures() -> Self {
        let mut result = MockApi::default();
        result.add_project(MOCK_PROJECT_WITH_IMAGE, "Chess Engine", Some(MOCK_IMAGE_ID));
        result.add_project(MOCK_PROJECT_NO_IMAGE, "Weather CLI", None);
        result.add_project(MOCK_PROJECT_DANGLING_IMAGE, "Old Blog", Some(999));
        result.add_project(MOCK_PROJECT_BROKEN_MEDIA, "Flaky One", Some(BROKEN_MEDIA_ID));
        result.add_media(MOCK_IMAGE_ID, MOCK_IMAGE_URL);
        result
    }

    fn add_project(&mut self, id: u64, title: &str, image: Option<u64>) {
        let record = json!({
            "id": id,
            "link": format!("http://localhost/portfolio-wp/project/{}/", id),
            "title": { "rendered": title },
            "content": { "rendered": format!("<p>{}.</p>", title) },
            "acf": { "images": image }
        });
        let project = serde_json::from_value(record).expect("Failed building mock project");
        self.projects.insert(id, project);
    }

    fn add_media(&mut self, id: u64, source_url: &str) {
        let media = Media::new(id, source_url.parse().expect("Failed parsing mock media URL"));
        self.media.insert(id, media);
    }
}

#[rocket::async_trait]
impl ContentApi for MockApi {
    async fn project(&self, id: u64) -> Result<Option<Project>, FolioError> {
        debug!("mock project #{}", id);
        Ok(self.projects.get(&id).cloned())
    }

    async fn media(&self, id: u64) -> Result<Option<Media>, FolioError> {
        debug!("mock media #{}", id);
        if id == BROKEN_MEDIA_ID {
            return Err(FolioError::Runtime("Mock media transport failure".into()));
        }
        Ok(self.media.get(&id).cloned())
    }

    async fn project_count(&self) -> Result<u64, FolioError> {
        Ok(self.projects.len() as u64)
    }
}
