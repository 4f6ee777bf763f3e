// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{FolioError, Media, Project, ProjectView};
use tracing::{debug, warn};

/// The reads this site needs from its content API.
///
/// The seam exists so the Web layer can be wired w/ a [MockApi][1] while
/// testing and the real [WpClient][2] otherwise.
///
/// [1]: crate::MockApi
/// [2]: crate::WpClient
#[rocket::async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch the project record w/ the given id. `Ok(None)` means the
    /// content API answered w/ a non-success status for that id.
    async fn project(&self, id: u64) -> Result<Option<Project>, FolioError>;

    /// Resolve a media asset id to its record. `Ok(None)` means the content
    /// API answered w/ a non-success status for that id.
    async fn media(&self, id: u64) -> Result<Option<Media>, FolioError>;

    /// Total number of published projects.
    async fn project_count(&self) -> Result<u64, FolioError>;
}

/// Populate one project page's view model.
///
/// Two sequential reads at most: the project record first then, only when
/// it references an image, the media record resolving that image to a URL.
/// Failure of either read --non-success status or transport error-- maps
/// to the corresponding absent member of the result; an image failure is
/// tolerated independently of a successfully fetched project. This
/// function itself never fails.
pub async fn load_view(api: &dyn ContentApi, id: u64) -> ProjectView {
    let project = match api.project(id).await {
        Ok(x) => x,
        Err(x) => {
            warn!("Failed fetching project #{}: {}", id, x);
            None
        }
    };

    let image_url = match project.as_ref().and_then(|p| p.image_ref()) {
        Some(media_id) => match api.media(media_id).await {
            Ok(Some(m)) => Some(m.into_source_url()),
            Ok(None) => {
                debug!("Project #{} references unknown media #{}", id, media_id);
                None
            }
            Err(x) => {
                warn!("Failed resolving media #{} of project #{}: {}", media_id, id, x);
                None
            }
        },
        None => None,
    };

    let view = ProjectView::new(project, image_url);
    debug!("view = {}", view);
    view
}
