//! Team model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, Timestamp};
use crate::error::{PewnError, Result};
use crate::traits::{Get, UserScoped};

use super::{Project, User};

/// A development team.
///
/// Members and projects are referenced by ID and fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,

    #[serde(rename = "teamName", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub creation_date: Option<Timestamp>,

    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,

    #[serde(rename = "customerFounderId", default, deserialize_with = "null_as_default")]
    pub founder_id: u64,

    #[serde(rename = "customerMemberId", default, deserialize_with = "null_as_default")]
    pub member_ids: Vec<u64>,

    #[serde(rename = "projectId", default, deserialize_with = "null_as_default")]
    pub project_ids: Vec<u64>,
}

impl Team {
    /// Fetch the team's founder.
    pub async fn founder(&self, client: &PewnClient) -> Result<User> {
        User::get(client, self.founder_id).await
    }

    /// Fetch all members, one request per member, in listed order.
    pub async fn members(&self, client: &PewnClient) -> Result<Vec<User>> {
        let mut members = Vec::with_capacity(self.member_ids.len());
        for id in &self.member_ids {
            members.push(User::get(client, *id).await?);
        }
        Ok(members)
    }

    /// Fetch all projects of the team, one request per project.
    pub async fn projects(&self, client: &PewnClient) -> Result<Vec<Project>> {
        let mut projects = Vec::with_capacity(self.project_ids.len());
        for id in &self.project_ids {
            projects.push(Project::get(client, *id).await?);
        }
        Ok(projects)
    }
}

#[async_trait]
impl Get for Team {
    type Id = u64;

    /// The endpoint answers with a list; the first entry is the team.
    #[tracing::instrument(skip(client))]
    async fn get(client: &PewnClient, id: u64) -> Result<Self> {
        let teams: Vec<Team> = client.fetch(&format!("v1/teams/id/{id}")).await?;
        teams.into_iter().next().ok_or_else(|| PewnError::NotFound {
            entity_type: "Team",
            id: id.to_string(),
        })
    }
}

impl UserScoped for Team {
    const USER_SEGMENT: &'static str = "teams";
}
