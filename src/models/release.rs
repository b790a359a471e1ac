//! Release, download and recommendation models.

use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, optional_id, Timestamp};
use crate::error::Result;
use crate::traits::{Get, ProjectScoped};

use super::{Project, User};

/// A published release of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: u64,

    #[serde(rename = "customer", default)]
    pub author: Option<User>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub release_date: Option<Timestamp>,

    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,

    /// The project this release belongs to, if the server reports it.
    #[serde(default, deserialize_with = "optional_id")]
    pub project_id: Option<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: Vec<Download>,
}

/// A downloadable file of a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    /// How often the file was downloaded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// A project recommended alongside another one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u64,
    /// Position in the recommendation list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort: i32,
    #[serde(rename = "recommendation")]
    pub project: Project,
}

impl Release {
    /// Fetch the project this release belongs to.
    ///
    /// Returns `Ok(None)` if the release does not carry a project ID.
    pub async fn project(&self, client: &PewnClient) -> Result<Option<Project>> {
        match self.project_id {
            Some(id) => Project::get(client, id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Total downloads over all files of this release.
    pub fn total_downloads(&self) -> u64 {
        self.downloads.iter().map(|d| d.count).sum()
    }
}

impl ProjectScoped for Release {
    const PROJECT_SEGMENT: &'static str = "releases";
}

impl ProjectScoped for Recommendation {
    const PROJECT_SEGMENT: &'static str = "recommendations";
}
