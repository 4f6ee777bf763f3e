// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Project;
use core::fmt;
use serde::{Deserialize, Serialize};
use url::Url;

/// The view model of a single project page, as produced by the
/// [loader][crate::load_view].
///
/// Both members are deliberately optional: an unknown project id yields
/// `(None, None)` and the page renders its not-found state; a project w/o a
/// resolvable image yields `(Some, None)` and the page renders w/o one.
/// Absence is data here, not an error, so both members serialize as
/// explicit `null`s.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectView {
    project: Option<Project>,
    image_url: Option<Url>,
}

impl ProjectView {
    /// Construct a new instance.
    pub fn new(project: Option<Project>, image_url: Option<Url>) -> Self {
        ProjectView { project, image_url }
    }

    /// The project record, or `None` when the content API had nothing for
    /// the requested id.
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Resolved URL of the project's image, or `None` when the record has
    /// no image or resolving it failed.
    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }
}

impl fmt::Display for ProjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.project, &self.image_url) {
            (Some(p), Some(u)) => write!(f, "ProjectView{{ {}, {} }}", p, u),
            (Some(p), None) => write!(f, "ProjectView{{ {}, no image }}", p),
            _ => write!(f, "ProjectView{{ absent }}"),
        }
    }
}

/// Total number of published projects --the Rust rendition of the original
/// site's `[project_count]` shortcode.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectCount {
    count: u64,
}

impl ProjectCount {
    /// Construct a new instance.
    pub fn new(count: u64) -> Self {
        ProjectCount { count }
    }

    /// The count proper.
    pub fn count(&self) -> u64 {
        self.count
    }
}
