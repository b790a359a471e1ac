//! Hashtag model.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::traits::ProjectScoped;

/// A hashtag attached to projects and other content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hashtag {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Number of projects using this hashtag.
    #[serde(rename = "usedInProjectsCount", default, deserialize_with = "null_as_default")]
    pub usage_count: u32,

    #[serde(rename = "hashtagCategory", default)]
    pub category: Option<HashtagCategory>,

    /// The canonical hashtag this one is an alias of.
    #[serde(rename = "hashtagMetaTag", default)]
    pub metatag: Option<Box<Hashtag>>,
}

/// Category grouping hashtags (genre, platform, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagCategory {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Hashtag {
    /// The canonical name: the metatag's name if there is one.
    pub fn canonical_name(&self) -> &str {
        self.metatag.as_ref().map_or(&self.name, |m| &m.name)
    }
}

impl ProjectScoped for Hashtag {
    const PROJECT_SEGMENT: &'static str = "hashtags";
}
