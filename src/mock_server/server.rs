//! Mock Pewn API server.
//!
//! Provides an axum-based HTTP server that simulates the Pewn API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, OAuthClient};

/// Client ID accepted by the default OAuth client.
pub const CLIENT_ID: &str = "test-client";
/// Client secret of the default OAuth client.
pub const CLIENT_SECRET: &str = "test-secret";
/// Refresh token of the default OAuth client.
pub const REFRESH_TOKEN: &str = "test-refresh";
/// Access token issued to the default OAuth client.
pub const ACCESS_TOKEN: &str = "test-access";

/// A mock Pewn API server for testing.
///
/// The server runs in the background and can be used to test the Pewn client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> std::io::Result<Self> {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> std::io::Result<Self> {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> std::io::Result<Self> {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock server stopped");
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        })
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as the host when creating a `PewnClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for user in scenario.users {
            state.users.insert(user.id, user);
        }
        for project in scenario.projects {
            state.projects.insert(project.id, project);
        }
        for (project_id, rating) in scenario.ratings {
            state.ratings.entry(project_id).or_default().push(rating);
        }
        for (project_id, image) in scenario.images {
            state.images.entry(project_id).or_default().push(image);
        }
        for (project_id, hashtag) in scenario.hashtags {
            state.hashtags.entry(project_id).or_default().push(hashtag);
        }
        for release in scenario.releases {
            if let Some(project_id) = release.project_id {
                state.releases.entry(project_id).or_default().push(release);
            }
        }
        for (project_id, rec) in scenario.recommendations {
            state.recommendations.entry(project_id).or_default().push(rec);
        }
        for team in scenario.teams {
            state.teams.insert(team.id, team);
        }
        state.blog_posts = scenario.blog_posts;
        state.status = Some(scenario.status);
        state.account = Some(scenario.account);
        state.oauth = Some(OAuthClient {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            refresh_token: REFRESH_TOKEN.to_string(),
            access_token: ACCESS_TOKEN.to_string(),
        });

        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Project routes
            .route("/api/v1/games/id/:id", get(handlers::get_project))
            .route("/api/v1/games/id/:id/ratings", get(handlers::project_ratings))
            .route("/api/v1/games/id/:id/images", get(handlers::project_images))
            .route("/api/v1/games/id/:id/hashtags", get(handlers::project_hashtags))
            .route("/api/v1/games/id/:id/releases", get(handlers::project_releases))
            .route(
                "/api/v1/games/id/:id/recommendations",
                get(handlers::project_recommendations),
            )
            .route("/api/v1/games/all", get(handlers::all_projects))
            .route("/api/v1/games/last", get(handlers::latest_project))
            .route("/api/v1/games/random", get(handlers::random_project))
            // Content boxes and feed
            .route("/api/v1/contents/games/top", get(handlers::top_projects))
            .route("/api/v1/contents/games/views", get(handlers::most_viewed_projects))
            .route(
                "/api/v1/contents/games/update",
                get(handlers::recently_updated_projects),
            )
            .route("/api/v1/contents/activities", get(handlers::activities))
            // User and team routes
            .route("/api/v1/users/id/:id", get(handlers::get_user))
            .route("/api/v1/users/id/:id/:collection", get(handlers::user_collection))
            .route("/api/v1/users/name/:name", get(handlers::get_user_by_name))
            .route("/api/v1/teams/id/:id", get(handlers::get_team))
            // Account routes
            .route("/api/v1/oauth/token", post(handlers::issue_token))
            .route("/api/v1/self/details", get(handlers::self_details))
            .route("/api/status", get(handlers::status))
            // Binary content
            .route(
                "/image/projects/:id/files/:file_name",
                get(handlers::project_image),
            )
            .route(
                "/download/users/:name/avatar/:file_name",
                get(handlers::user_avatar),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::{Get, PewnClient, Project};

    fn router() -> Router {
        MockServer::create_router(MockServer::default_state().shared())
    }

    #[tokio::test]
    async fn test_router_serves_project() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games/id/8568?format=json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_unknown_order_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games/all?format=json&order=popularity")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_self_details_requires_bearer() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/self/details")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await.unwrap();

        let response = reqwest::Client::new()
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_project_with_pewn_client() {
        let server = MockServer::start().await.unwrap();
        let client = PewnClient::new(server.url()).unwrap();

        let project = Project::get(&client, 8568).await.expect("Failed to get project");

        assert_eq!(project.name, "Shooter Reloaded");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await.unwrap();
        let client = PewnClient::new(server.url()).unwrap();

        let err = Project::get(&client, 8568).await.unwrap_err();
        assert!(err.is_not_found());

        server.shutdown().await;
    }
}
