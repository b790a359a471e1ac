//! Rating model.

use serde::{Deserialize, Serialize};

use crate::codec::{null_as_default, Timestamp};
use crate::traits::{ProjectScoped, UserScoped};

use super::User;

/// A user's rating of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: u64,

    /// The rating value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i32,

    #[serde(rename = "ratingDate", default)]
    pub date: Option<Timestamp>,

    #[serde(rename = "customer", default)]
    pub author: Option<User>,

    /// The reasoning written by the rater.
    #[serde(rename = "ratingReason", default)]
    pub text: Option<String>,

    /// The developer's answer to this rating.
    #[serde(rename = "ratingComment", default)]
    pub comment: Option<RatingComment>,

    /// The project version that was rated.
    #[serde(default)]
    pub rated_version: Option<String>,

    /// Whether the rating was curated by the Pewn team.
    #[serde(default, deserialize_with = "null_as_default")]
    pub curated: bool,
}

/// An answer to a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingComment {
    pub id: u64,
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(rename = "creationDate", default)]
    pub date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
}

impl ProjectScoped for Rating {
    const PROJECT_SEGMENT: &'static str = "ratings";
}

impl UserScoped for Rating {
    const USER_SEGMENT: &'static str = "ratings";
}
