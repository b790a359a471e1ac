//! User model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, Timestamp};
use crate::error::Result;
use crate::images::{fetch_avatar, DynamicImage};
use crate::traits::{Get, UserScoped};

use super::{BlogPost, Design, News, Project, Rating, Team};

/// A registered Pewn user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user ID.
    pub id: u64,

    /// The user name.
    #[serde(rename = "username", default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Public profile information.
    #[serde(default)]
    pub profile: Option<Profile>,

    /// Gamification level.
    #[serde(rename = "gamificationLevel", default, deserialize_with = "null_as_default")]
    pub level: i32,

    /// Experience points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub xp: i64,

    /// When the user registered.
    #[serde(default)]
    pub registration_date: Option<Timestamp>,
}

/// Public profile of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The "about me" text.
    #[serde(default)]
    pub about: Option<String>,
    /// The user's website as entered (not validated).
    #[serde(default)]
    pub website: Option<String>,
    /// File name of the avatar image.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Fetch a user by name.
    #[tracing::instrument(skip(client))]
    pub async fn get_by_name(client: &PewnClient, name: &str) -> Result<Self> {
        let path = format!("v1/users/name/{}", urlencoding::encode(name));
        client.fetch(&path).await
    }

    /// File name of the user's avatar, if one is set.
    pub fn avatar(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.avatar.as_deref())
    }

    /// Download and decode the user's avatar.
    ///
    /// Returns `Ok(None)` if no avatar is set or the image cannot be decoded.
    pub async fn avatar_image(&self, client: &PewnClient) -> Result<Option<DynamicImage>> {
        match self.avatar() {
            Some(file_name) => fetch_avatar(client, &self.name, file_name).await,
            None => Ok(None),
        }
    }

    /// Get all projects created by this user.
    pub async fn projects(&self, client: &PewnClient) -> Result<Vec<Project>> {
        Project::for_user(client, self.id).await
    }

    /// Get all ratings written by this user.
    pub async fn ratings(&self, client: &PewnClient) -> Result<Vec<Rating>> {
        Rating::for_user(client, self.id).await
    }

    /// Get all teams this user belongs to.
    pub async fn teams(&self, client: &PewnClient) -> Result<Vec<Team>> {
        Team::for_user(client, self.id).await
    }

    /// Get the user's blog posts.
    pub async fn blog_posts(&self, client: &PewnClient) -> Result<Vec<BlogPost>> {
        BlogPost::for_user(client, self.id).await
    }

    /// Get the user's news.
    pub async fn news(&self, client: &PewnClient) -> Result<Vec<News>> {
        News::for_user(client, self.id).await
    }

    /// Get the user's designs.
    pub async fn designs(&self, client: &PewnClient) -> Result<Vec<Design>> {
        Design::for_user(client, self.id).await
    }
}

#[async_trait]
impl Get for User {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PewnClient, id: u64) -> Result<Self> {
        client.fetch(&format!("v1/users/id/{id}")).await
    }
}
