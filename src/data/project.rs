// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// A structured content entity describing one portfolio item.
///
/// This is a partial binding of the WP REST `project` custom post type;
/// fields we never read are ignored on deserialization. The record is not
/// owned by this system --it's read transiently, once per page view.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    id: u64,
    title: Rendered,
    #[serde(default)]
    content: Rendered,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    acf: Acf,
}

/// WordPress wraps user-visible text in an object w/ a `rendered` member.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Rendered {
    #[serde(default)]
    rendered: String,
}

/// The ACF (Advanced Custom Fields) block of a project record.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Acf {
    // ACF emits `false` --not `null`-- for an unset image field, hence the
    // lenient deserializer...
    #[serde(default, deserialize_with = "image_ref")]
    images: Option<u64>,
    #[serde(default)]
    live_demo_url: Option<String>,
}

/// Accept a positive integer as a media id; coerce `false`, `null`, `0` and
/// anything else ACF may emit for an unset field to `None`.
fn image_ref<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(v.as_u64().filter(|x| *x > 0))
}

impl Project {
    /// Numeric identifier of this record in the content API.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Rendered project title.
    pub fn title(&self) -> &str {
        &self.title.rendered
    }

    /// Rendered project description (the post body).
    pub fn description(&self) -> &str {
        &self.content.rendered
    }

    /// Permalink of the project on the WordPress side, if any.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Media asset identifier of the project's image, if one is attached.
    pub fn image_ref(&self) -> Option<u64> {
        self.acf.images
    }

    /// Live demo URL, if the project has one.
    pub fn live_demo_url(&self) -> Option<&str> {
        self.acf.live_demo_url.as_deref()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project#{}{{ \"{}\" }}", self.id, self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "id": 42,
        "date": "2024-11-02T10:00:00",
        "link": "http://localhost/portfolio-wp/project/sample/",
        "title": { "rendered": "Sample" },
        "content": { "rendered": "<p>A sample project.</p>", "protected": false },
        "acf": { "images": 117, "live_demo_url": "https://example.net/demo" }
    }"#;

    #[test]
    fn test_deserialize_tolerates_unknown_fields() {
        let p: Project = serde_json::from_str(JSON).unwrap();
        assert_eq!(p.id(), 42);
        assert_eq!(p.title(), "Sample");
        assert_eq!(p.description(), "<p>A sample project.</p>");
        assert_eq!(p.image_ref(), Some(117));
        assert_eq!(p.live_demo_url(), Some("https://example.net/demo"));
    }

    #[test]
    fn test_acf_false_means_no_image() {
        let p: Project = serde_json::from_str(
            r#"{ "id": 7, "title": { "rendered": "t" }, "acf": { "images": false } }"#,
        )
        .unwrap();
        assert_eq!(p.image_ref(), None);
    }

    #[test]
    fn test_missing_acf_block() {
        let p: Project =
            serde_json::from_str(r#"{ "id": 7, "title": { "rendered": "t" } }"#).unwrap();
        assert_eq!(p.image_ref(), None);
        assert_eq!(p.live_demo_url(), None);
        assert_eq!(p.link(), None);
        assert_eq!(p.description(), "");
    }
}
