//! OAuth, private account and status handlers.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use super::{found_or_404, SharedState};
use crate::Token;

/// Form body accepted by the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub client_id: String,
    pub client_secret: String,
    pub grant_type: String,
    pub code: Option<String>,
    #[allow(dead_code)] // Echoed by Pewn's login page, not checked
    pub redirect_uri: Option<String>,
    pub refresh_token: Option<String>,
}

fn unauthorized(error: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": error })),
    )
        .into_response()
}

/// POST /api/v1/oauth/token
pub async fn issue_token(State(state): State<SharedState>, Form(form): Form<TokenForm>) -> Response {
    let state = state.read().await;
    let Some(oauth) = state.oauth.as_ref() else {
        return unauthorized("invalid_client");
    };
    if form.client_id != oauth.client_id || form.client_secret != oauth.client_secret {
        return unauthorized("invalid_client");
    }

    let granted = match form.grant_type.as_str() {
        "authorization_code" => form.code.as_deref().is_some_and(|c| !c.is_empty()),
        "refresh_token" => form.refresh_token.as_deref() == Some(oauth.refresh_token.as_str()),
        _ => false,
    };
    if !granted {
        return unauthorized("invalid_grant");
    }

    Json(Token {
        access_token: oauth.access_token.clone(),
        refresh_token: Some(oauth.refresh_token.clone()),
        token_type: Some("bearer".to_string()),
        expires_in: Some("3600".to_string()),
        username: state.account.as_ref().map(|a| a.username.clone()),
    })
    .into_response()
}

/// GET /api/v1/self/details
pub async fn self_details(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.read().await;
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let expected = state.oauth.as_ref().map(|o| o.access_token.as_str());

    match (presented, expected) {
        (Some(p), Some(e)) if p == e => found_or_404("account", "self", state.account.as_ref()),
        _ => unauthorized("invalid_token"),
    }
}

/// GET /api/status
pub async fn status(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    found_or_404("status", "api", state.status.as_ref())
}
