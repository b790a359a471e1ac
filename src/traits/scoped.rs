//! Traits for resources listed below a project or a user.
//!
//! Pewn exposes most collections as `v1/games/id/{id}/<segment>` or
//! `v1/users/id/{id}/<segment>`. Implementors only name the segment.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::PewnClient;
use crate::error::Result;

/// Resources listed per project (ratings, images, hashtags, ...).
///
/// # Example
///
/// ```ignore
/// use pewnapi::{PewnClient, ProjectScoped, Rating};
///
/// let client = PewnClient::default_host()?;
/// let ratings = Rating::for_project(&client, 8568).await?;
/// ```
#[async_trait]
pub trait ProjectScoped: DeserializeOwned + Send + 'static {
    /// Path segment below `v1/games/id/{id}/`.
    const PROJECT_SEGMENT: &'static str;

    /// List all entries belonging to the project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn for_project(client: &PewnClient, project_id: u64) -> Result<Vec<Self>> {
        let path = format!("v1/games/id/{project_id}/{}", Self::PROJECT_SEGMENT);
        client.fetch(&path).await
    }
}

/// Resources listed per user (projects, ratings, teams, ...).
#[async_trait]
pub trait UserScoped: DeserializeOwned + Send + 'static {
    /// Path segment below `v1/users/id/{id}/`.
    const USER_SEGMENT: &'static str;

    /// List all entries belonging to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn for_user(client: &PewnClient, user_id: u64) -> Result<Vec<Self>> {
        let path = format!("v1/users/id/{user_id}/{}", Self::USER_SEGMENT);
        client.fetch(&path).await
    }
}
