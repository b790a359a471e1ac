//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Pewn API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    Activity, BlogPost, Hashtag, Image, Order, Project, Rating, Recommendation, Release, Status,
    Team, User, UserData,
};

/// OAuth client accepted by the token endpoint.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
    /// Refresh token the client must present.
    pub refresh_token: String,
    /// Access token issued in exchange.
    pub access_token: String,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Users indexed by ID.
    pub users: BTreeMap<u64, User>,

    /// Projects indexed by ID.
    pub projects: BTreeMap<u64, Project>,

    /// Per-project collections, indexed by project ID.
    pub ratings: HashMap<u64, Vec<Rating>>,
    pub images: HashMap<u64, Vec<Image>>,
    pub hashtags: HashMap<u64, Vec<Hashtag>>,
    pub releases: HashMap<u64, Vec<Release>>,
    pub recommendations: HashMap<u64, Vec<Recommendation>>,

    /// Teams indexed by ID.
    pub teams: BTreeMap<u64, Team>,

    /// Blog posts; the activity feed is built from these.
    pub blog_posts: Vec<BlogPost>,

    /// Served at `/api/status`.
    pub status: Option<Status>,

    /// Private details of the account behind the OAuth client.
    pub account: Option<UserData>,

    /// If set, the token endpoint and `self/details` are available.
    pub oauth: Option<OAuthClient>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.id, project);
        self
    }

    pub fn with_rating(mut self, project_id: u64, rating: Rating) -> Self {
        self.ratings.entry(project_id).or_default().push(rating);
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.insert(team.id, team);
        self
    }

    pub fn with_blog_post(mut self, post: BlogPost) -> Self {
        self.blog_posts.push(post);
        self
    }

    /// Accept the given OAuth client.
    pub fn with_oauth(mut self, oauth: OAuthClient) -> Self {
        self.oauth = Some(oauth);
        self
    }

    /// All projects, sorted by `order`, best first.
    pub fn projects_ordered(&self, order: Order) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.values().collect();
        match order {
            Order::CreationDate => projects.sort_by(|a, b| b.creation_date.cmp(&a.creation_date)),
            Order::UpdateDate => {
                projects.sort_by(|a, b| b.last_update_date.cmp(&a.last_update_date))
            }
            Order::Rating => projects.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
        projects
    }

    /// The most recently created project.
    pub fn latest_project(&self) -> Option<&Project> {
        self.projects_ordered(Order::CreationDate).into_iter().next()
    }

    pub fn projects_of_user(&self, user_id: u64) -> Vec<&Project> {
        self.projects
            .values()
            .filter(|p| p.author.as_ref().map(|a| a.id) == Some(user_id))
            .collect()
    }

    /// Ratings written by a user, across all projects.
    pub fn ratings_of_user(&self, user_id: u64) -> Vec<&Rating> {
        let mut ratings: Vec<&Rating> = self
            .ratings
            .values()
            .flatten()
            .filter(|r| r.author.as_ref().map(|a| a.id) == Some(user_id))
            .collect();
        ratings.sort_by_key(|r| r.id);
        ratings
    }

    /// Teams a user founded or belongs to.
    pub fn teams_of_user(&self, user_id: u64) -> Vec<&Team> {
        self.teams
            .values()
            .filter(|t| t.founder_id == user_id || t.member_ids.contains(&user_id))
            .collect()
    }

    pub fn blog_posts_of_user(&self, user_id: u64) -> Vec<&BlogPost> {
        self.blog_posts
            .iter()
            .filter(|p| p.author.as_ref().map(|a| a.id) == Some(user_id))
            .collect()
    }

    /// The newest `size` blog posts as activity entries.
    pub fn activities(&self, size: usize) -> Vec<Activity> {
        let mut posts: Vec<&BlogPost> = self.blog_posts.iter().collect();
        posts.sort_by(|a, b| b.creation_date.cmp(&a.creation_date));
        posts
            .into_iter()
            .take(size)
            .map(|post| Activity {
                kind: "blog".to_string(),
                blog_post: Some(post.clone()),
                design_comment: None,
                news_comment: None,
                project_comment: None,
                forum_topic: None,
            })
            .collect()
    }

    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.values().find(|u| u.name == name)
    }
}
