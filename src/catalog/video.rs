use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog entry as it appears in a catalog file.
///
/// This is the serde-facing shape; `tags` may be omitted entirely in the
/// source data. The catalog converts records into [`Video`]s at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An immutable video known to the catalog.
///
/// Identity is the id; title and tags are display metadata. Videos are owned
/// exclusively by the catalog and handed out by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: String,
    title: String,
    tags: Vec<String>,
}

impl Video {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The display form used everywhere a video is shown:
    /// `title (id) [tag1 tag2 ...]`, with empty brackets when untagged.
    pub fn description(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

impl From<VideoRecord> for Video {
    fn from(record: VideoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            tags: record.tags,
        }
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, tags: &[&str]) -> Video {
        Video::from(VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    #[test]
    fn test_description_with_tags() {
        let v = video("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]);
        assert_eq!(
            v.description(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_description_without_tags() {
        let v = video("nothing_video_id", "Video about nothing", &[]);
        assert_eq!(v.description(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_record_tags_default_to_empty() {
        let record: VideoRecord =
            serde_json::from_str(r#"{"id": "v1", "title": "Titanic"}"#).unwrap();
        assert!(record.tags.is_empty());
    }
}
