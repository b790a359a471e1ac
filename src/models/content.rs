//! Community content: blog posts, news, designs, forum topics, comments
//! and the activity feed.

use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, optional_id, Timestamp};
use crate::error::Result;
use crate::traits::{Get, UserScoped};

use super::{Hashtag, Image, Project, User};

/// A blog post written by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,

    #[serde(rename = "content", default)]
    pub text: Option<String>,

    #[serde(rename = "headline", default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub creation_date: Option<Timestamp>,

    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,

    #[serde(rename = "customer", default)]
    pub author: Option<User>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<Hashtag>,

    /// The project the post is about, if any.
    #[serde(default, deserialize_with = "optional_id")]
    pub project_id: Option<u64>,
}

impl BlogPost {
    /// Fetch the project this post is about.
    ///
    /// Returns `Ok(None)` for posts not tied to a project.
    pub async fn project(&self, client: &PewnClient) -> Result<Option<Project>> {
        match self.project_id {
            Some(id) => Project::get(client, id).await.map(Some),
            None => Ok(None),
        }
    }
}

impl UserScoped for BlogPost {
    const USER_SEGMENT: &'static str = "blogs";
}

/// A news entry published by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: u64,
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(rename = "headline", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<Hashtag>,
    #[serde(rename = "fileContainer", default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

impl UserScoped for News {
    const USER_SEGMENT: &'static str = "news";
}

/// A design (artwork) uploaded by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<Hashtag>,
    #[serde(rename = "fileContainer", default)]
    pub image: Option<Image>,
}

impl UserScoped for Design {
    const USER_SEGMENT: &'static str = "designs";
}

/// A forum topic. Only delivered embedded in activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopic {
    pub id: u64,
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(rename = "headline", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forum_section_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<Hashtag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sticky: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
}

/// A comment on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComment {
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
    /// The commented project.
    #[serde(default)]
    pub project: Option<Project>,
}

/// A comment on a news entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsComment {
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
    #[serde(default)]
    pub news: Option<News>,
}

/// A comment on a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignComment {
    #[serde(rename = "content", default)]
    pub text: Option<String>,
    #[serde(default)]
    pub creation_date: Option<Timestamp>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
    #[serde(default)]
    pub design: Option<Design>,
}

/// One entry of the community activity feed.
///
/// Exactly one of the content fields is expected to be set, matching `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub blog_post: Option<BlogPost>,
    #[serde(default)]
    pub design_comment: Option<DesignComment>,
    #[serde(default)]
    pub news_comment: Option<NewsComment>,
    #[serde(default)]
    pub project_comment: Option<ProjectComment>,
    #[serde(default)]
    pub forum_topic: Option<ForumTopic>,
}

/// Query parameters for the activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityQuery {
    /// Number of entries to return.
    pub size: u32,
}

impl Activity {
    /// Get the latest `size` activities.
    #[tracing::instrument(skip(client))]
    pub async fn latest(client: &PewnClient, size: u32) -> Result<Vec<Self>> {
        client
            .fetch_with_query("v1/contents/activities", &ActivityQuery { size })
            .await
    }

    /// The author of whatever content this activity carries.
    pub fn author(&self) -> Option<&User> {
        self.blog_post
            .as_ref()
            .and_then(|c| c.author.as_ref())
            .or_else(|| self.design_comment.as_ref().and_then(|c| c.author.as_ref()))
            .or_else(|| self.news_comment.as_ref().and_then(|c| c.author.as_ref()))
            .or_else(|| self.project_comment.as_ref().and_then(|c| c.author.as_ref()))
            .or_else(|| self.forum_topic.as_ref().and_then(|c| c.author.as_ref()))
    }
}
