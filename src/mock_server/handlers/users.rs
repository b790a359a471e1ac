//! User and team endpoint handlers.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use super::{found_or_404, not_found, SharedState};
use crate::{Design, News, Team};

/// GET /api/v1/users/id/{id}
pub async fn get_user(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let state = state.read().await;
    found_or_404("user", id, state.users.get(&id))
}

/// GET /api/v1/users/name/{name}
pub async fn get_user_by_name(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Response {
    let state = state.read().await;
    let user = state.user_by_name(&name);
    found_or_404("user", name.as_str(), user)
}

/// GET /api/v1/users/id/{id}/{collection}
///
/// Lists for users the server does not know are a 404.
pub async fn user_collection(
    State(state): State<SharedState>,
    Path((id, collection)): Path<(u64, String)>,
) -> Response {
    let state = state.read().await;
    if !state.users.contains_key(&id) {
        return not_found("user", id);
    }
    match collection.as_str() {
        "games" => Json(state.projects_of_user(id)).into_response(),
        "ratings" => Json(state.ratings_of_user(id)).into_response(),
        "teams" => Json(state.teams_of_user(id)).into_response(),
        "blogs" => Json(state.blog_posts_of_user(id)).into_response(),
        "news" => Json(Vec::<News>::new()).into_response(),
        "designs" => Json(Vec::<Design>::new()).into_response(),
        other => not_found("collection", other),
    }
}

/// GET /api/v1/teams/id/{id}
///
/// Pewn answers with an array; unknown IDs give an empty one.
pub async fn get_team(State(state): State<SharedState>, Path(id): Path<u64>) -> Json<Vec<Team>> {
    let state = state.read().await;
    Json(state.teams.get(&id).cloned().into_iter().collect())
}
