//! Mock Pewn API server for E2E testing.
//!
//! An in-memory server that answers the same routes as pewn.de. Unlike
//! wiremock, which mocks single requests per test, it keeps state across
//! requests so whole workflows (OAuth refresh, following relations) can be
//! exercised.
//!
//! # Example
//!
//! ```ignore
//! use pewnapi::mock_server::MockServer;
//! use pewnapi::{Get, PewnClient, Project};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await.unwrap();
//!     let client = PewnClient::new(server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, 8568).await.unwrap();
//!     assert_eq!(project.name, "Shooter Reloaded");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::{MockServer, ACCESS_TOKEN, CLIENT_ID, CLIENT_SECRET, REFRESH_TOKEN};
pub use state::{MockState, OAuthClient};
