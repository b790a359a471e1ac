//! Project endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{found_or_404, not_found, SharedState};
use crate::mock_server::MockState;
use crate::{
    Activity, FeaturedProject, Hashtag, Image, Order, Project, Rating, Recommendation, Release,
};

/// Query parameters of the activity feed.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityParams {
    pub size: Option<usize>,
}

/// GET /api/v1/games/id/{id}
pub async fn get_project(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let state = state.read().await;
    found_or_404("project", id, state.projects.get(&id))
}

/// GET /api/v1/games/last
pub async fn latest_project(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    found_or_404("project", "last", state.latest_project())
}

/// GET /api/v1/games/random
///
/// Deterministic: always the project with the lowest ID.
pub async fn random_project(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    found_or_404("project", "random", state.projects.values().next())
}

/// Query parameters of the project listing.
#[derive(Debug, Default, Deserialize)]
pub struct AllParams {
    pub order: Option<String>,
}

/// GET /api/v1/games/all?order={order}
pub async fn all_projects(
    State(state): State<SharedState>,
    Query(params): Query<AllParams>,
) -> Response {
    let requested = params.order.unwrap_or_default();
    let Some(order) = Order::ALL.into_iter().find(|o| o.as_str() == requested) else {
        return not_found("order", requested);
    };
    let state = state.read().await;
    Json(state.projects_ordered(order)).into_response()
}

/// GET /api/v1/contents/games/top
pub async fn top_projects(State(state): State<SharedState>) -> Json<Vec<FeaturedProject>> {
    let state = state.read().await;
    let featured = state
        .projects_ordered(Order::Rating)
        .into_iter()
        .take(3)
        .map(|p| FeaturedProject {
            reason: Some("top rated".to_string()),
            project: p.clone(),
        })
        .collect();
    Json(featured)
}

/// GET /api/v1/contents/games/views
pub async fn most_viewed_projects(State(state): State<SharedState>) -> Json<Vec<Project>> {
    let state = state.read().await;
    Json(state.projects.values().cloned().collect())
}

/// GET /api/v1/contents/games/update
pub async fn recently_updated_projects(State(state): State<SharedState>) -> Json<Vec<Project>> {
    let state = state.read().await;
    Json(
        state
            .projects_ordered(Order::UpdateDate)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/contents/activities
pub async fn activities(
    State(state): State<SharedState>,
    Query(params): Query<ActivityParams>,
) -> Json<Vec<Activity>> {
    let state = state.read().await;
    Json(state.activities(params.size.unwrap_or(10)))
}

/// Serve a per-project collection; unknown projects are a 404, known ones
/// without entries an empty list.
async fn project_collection<T, F>(state: SharedState, id: u64, select: F) -> Response
where
    T: serde::Serialize + Clone,
    F: FnOnce(&MockState) -> Option<&Vec<T>>,
{
    let state = state.read().await;
    if !state.projects.contains_key(&id) {
        return not_found("project", id);
    }
    let items: Vec<T> = select(&*state).cloned().unwrap_or_default();
    Json(items).into_response()
}

/// GET /api/v1/games/id/{id}/ratings
pub async fn project_ratings(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    project_collection::<Rating, _>(state, id, |s| s.ratings.get(&id)).await
}

/// GET /api/v1/games/id/{id}/images
pub async fn project_images(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    project_collection::<Image, _>(state, id, |s| s.images.get(&id)).await
}

/// GET /api/v1/games/id/{id}/hashtags
pub async fn project_hashtags(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    project_collection::<Hashtag, _>(state, id, |s| s.hashtags.get(&id)).await
}

/// GET /api/v1/games/id/{id}/releases
pub async fn project_releases(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    project_collection::<Release, _>(state, id, |s| s.releases.get(&id)).await
}

/// GET /api/v1/games/id/{id}/recommendations
pub async fn project_recommendations(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Response {
    project_collection::<Recommendation, _>(state, id, |s| s.recommendations.get(&id)).await
}
