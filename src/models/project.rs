//! Project model and trait implementations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::PewnClient;
use crate::codec::{null_as_default, optional_url, Timestamp};
use crate::error::Result;
use crate::traits::{Get, ProjectScoped, UserScoped};

use super::{Hashtag, Image, Rating, Recommendation, Release, Team, User};

/// A Pewn project (game).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The project ID.
    pub id: u64,

    /// The project name.
    #[serde(rename = "headline", default, deserialize_with = "null_as_default")]
    pub name: String,

    /// The description text (HTML as entered on Pewn).
    #[serde(rename = "content", default)]
    pub description: Option<String>,

    /// When the project was created.
    #[serde(default)]
    pub creation_date: Option<Timestamp>,

    /// When the project was last updated.
    #[serde(rename = "lastUpdate", default)]
    pub last_update_date: Option<Timestamp>,

    /// The user who created the project.
    #[serde(rename = "customer", default)]
    pub author: Option<User>,

    /// Average rating.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i32,

    #[serde(default, with = "optional_url")]
    pub download_windows: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_linux: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_mac_os: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_android: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_ios: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_windows_phone: Option<Url>,
    #[serde(default, with = "optional_url")]
    pub download_web: Option<Url>,

    /// Current version string.
    #[serde(default)]
    pub version: Option<String>,

    /// Screenshots and other uploaded images.
    #[serde(rename = "fileContainers", default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Hashtags attached to the project.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<Hashtag>,

    /// The team developing the project.
    #[serde(default)]
    pub team: Option<Team>,

    /// Advertisement text.
    #[serde(default)]
    pub advertisement: Option<String>,
}

/// Download platforms offered by Pewn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Android,
    Ios,
    WindowsPhone,
    Web,
}

impl Platform {
    /// All platforms, in the order Pewn lists them.
    pub const ALL: [Platform; 7] = [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Android,
        Platform::Ios,
        Platform::WindowsPhone,
        Platform::Web,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::WindowsPhone => "Windows Phone",
            Platform::Web => "Web",
        };
        f.write_str(name)
    }
}

/// Sort order for [`Project::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Newest projects first.
    CreationDate,
    /// Most recently updated first.
    UpdateDate,
    /// Best rated first.
    Rating,
}

impl Order {
    /// All orderings.
    pub const ALL: [Order; 3] = [Order::CreationDate, Order::UpdateDate, Order::Rating];

    /// The value of the `order` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::CreationDate => "creation",
            Order::UpdateDate => "update",
            Order::Rating => "rating",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project shown in the "top projects" box, with the reason it is featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    #[serde(default)]
    pub reason: Option<String>,
    pub project: Project,
}

impl FeaturedProject {
    /// Get the projects currently featured in the top box.
    #[tracing::instrument(skip(client))]
    pub async fn top(client: &PewnClient) -> Result<Vec<Self>> {
        client.fetch("v1/contents/games/top").await
    }
}

impl Project {
    /// The download URL for a platform, if offered.
    pub fn download_url(&self, platform: Platform) -> Option<&Url> {
        match platform {
            Platform::Windows => self.download_windows.as_ref(),
            Platform::Linux => self.download_linux.as_ref(),
            Platform::MacOs => self.download_mac_os.as_ref(),
            Platform::Android => self.download_android.as_ref(),
            Platform::Ios => self.download_ios.as_ref(),
            Platform::WindowsPhone => self.download_windows_phone.as_ref(),
            Platform::Web => self.download_web.as_ref(),
        }
    }

    /// All offered downloads as `(platform, url)` pairs.
    pub fn downloads(&self) -> impl Iterator<Item = (Platform, &Url)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(move |p| self.download_url(p).map(|u| (p, u)))
    }

    /// Check if the project offers any download.
    pub fn has_download(&self) -> bool {
        self.downloads().next().is_some()
    }

    /// Get the most recently created project.
    #[tracing::instrument(skip(client))]
    pub async fn latest(client: &PewnClient) -> Result<Self> {
        client.fetch("v1/games/last").await
    }

    /// Get a random project.
    #[tracing::instrument(skip(client))]
    pub async fn random(client: &PewnClient) -> Result<Self> {
        client.fetch("v1/games/random").await
    }

    /// Get all projects in the given order.
    ///
    /// The order travels as a query parameter: `v1/games/all?format=json&order=rating`.
    /// The count is the same for every [`Order`]; only the sequence differs.
    #[tracing::instrument(skip(client))]
    pub async fn all(client: &PewnClient, order: Order) -> Result<Vec<Self>> {
        client
            .fetch_with_query("v1/games/all", &[("order", order.as_str())])
            .await
    }

    /// Get the projects in the "most viewed" box.
    #[tracing::instrument(skip(client))]
    pub async fn most_viewed(client: &PewnClient) -> Result<Vec<Self>> {
        client.fetch("v1/contents/games/views").await
    }

    /// Get the projects in the "recently updated" box.
    #[tracing::instrument(skip(client))]
    pub async fn recently_updated(client: &PewnClient) -> Result<Vec<Self>> {
        client.fetch("v1/contents/games/update").await
    }

    /// Get all ratings of this project.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let project = Project::get(&client, 8568).await?;
    /// for rating in project.ratings(&client).await? {
    ///     println!("{}: {}", rating.rating, rating.text.unwrap_or_default());
    /// }
    /// ```
    pub async fn ratings(&self, client: &PewnClient) -> Result<Vec<Rating>> {
        Rating::for_project(client, self.id).await
    }

    /// Get all releases of this project.
    pub async fn releases(&self, client: &PewnClient) -> Result<Vec<Release>> {
        Release::for_project(client, self.id).await
    }

    /// Get projects recommended alongside this one.
    pub async fn recommendations(&self, client: &PewnClient) -> Result<Vec<Recommendation>> {
        Recommendation::for_project(client, self.id).await
    }

    /// Fetch the image metadata of this project from its own endpoint.
    pub async fn fetch_images(&self, client: &PewnClient) -> Result<Vec<Image>> {
        Image::for_project(client, self.id).await
    }

    /// Fetch the hashtags of this project from their own endpoint.
    pub async fn fetch_hashtags(&self, client: &PewnClient) -> Result<Vec<Hashtag>> {
        Hashtag::for_project(client, self.id).await
    }
}

#[async_trait]
impl Get for Project {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PewnClient, id: u64) -> Result<Self> {
        client.fetch(&format!("v1/games/id/{id}")).await
    }
}

impl UserScoped for Project {
    const USER_SEGMENT: &'static str = "games";
}
