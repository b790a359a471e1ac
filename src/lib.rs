//! Pewn API client library.
//!
//! A Rust library for the [Pewn](http://pewn.de/) game community REST API.
//! Every resource the API serves (projects, users, ratings, teams, ...) is a
//! plain serde model; fetching is done through an explicitly constructed
//! [`PewnClient`] and a few traits the models implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use pewnapi::{Get, Order, PewnClient, Project};
//!
//! #[tokio::main]
//! async fn main() -> pewnapi::Result<()> {
//!     let client = PewnClient::default_host()?;
//!
//!     // Get a project by ID
//!     let project = Project::get(&client, 8568).await?;
//!     println!("Project: {}", project.name);
//!
//!     // Follow relations lazily
//!     for rating in project.ratings(&client).await? {
//!         println!("  rated {}", rating.rating);
//!     }
//!
//!     // List all projects, best rated first
//!     let projects = Project::all(&client, Order::Rating).await?;
//!     println!("Found {} projects", projects.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`ProjectScoped`] - List entities hanging off a project
//! - [`UserScoped`] - List entities hanging off a user
//!
//! Everything else (latest/random project, activity feed, OAuth tokens) is
//! an associated function on the model. Images are fetched and decoded with
//! [`fetch_image`].
//!
//! # Configuration
//!
//! [`PewnClient::from_env`] reads:
//!
//! - `PEWN_HOST` (optional) - Host (defaults to `http://pewn.de/`)
//! - `PEWN_CLIENT_ID`, `PEWN_CLIENT_SECRET`, `PEWN_REFRESH_TOKEN` (optional,
//!   all or none) - OAuth credentials for protected resources

pub mod cli;
mod client;
pub mod codec;
mod error;
mod images;
mod models;
mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{Credentials, PewnClient};
pub use codec::Timestamp;
pub use error::{ErrorKind, PewnError, Result};
pub use images::{fetch_avatar, fetch_image, DynamicImage, ImageSize};
pub use output::PrettyPrint;

// Re-export traits
pub use traits::{Get, ProjectScoped, UserScoped};

// Re-export models
pub use models::{
    // Projects
    FeaturedProject,
    Order,
    Platform,
    Project,
    // Users
    Profile,
    User,
    // Project content
    Download,
    Hashtag,
    HashtagCategory,
    Image,
    Rating,
    RatingComment,
    Recommendation,
    Release,
    // Teams
    Team,
    // Community content
    Activity,
    ActivityQuery,
    BlogPost,
    Design,
    DesignComment,
    ForumTopic,
    News,
    NewsComment,
    ProjectComment,
    // Account
    Status,
    Token,
    UserData,
};
