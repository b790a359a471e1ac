//! HTTP request handlers for the mock server.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::state::MockState;

pub mod account;
pub mod media;
pub mod projects;
pub mod users;

pub use account::*;
pub use media::*;
pub use projects::*;
pub use users::*;

pub(crate) type SharedState = Arc<RwLock<MockState>>;

/// A 404 with a JSON body the client turns into an `ApiError`.
pub(crate) fn not_found(entity: &str, id: impl std::fmt::Display) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("{entity} not found"),
            "message": format!("No {entity} found with id: {id}")
        })),
    )
        .into_response()
}

/// Serve an optional entity, or 404.
pub(crate) fn found_or_404<T: serde::Serialize>(
    entity: &str,
    id: impl std::fmt::Display,
    item: Option<T>,
) -> Response {
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => not_found(entity, id),
    }
}
