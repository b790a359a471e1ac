//! Image and avatar handlers.
//!
//! The bitmaps are generated on the fly as solid PNGs of the requested size.

use std::io::Cursor;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use image::{DynamicImage, ImageFormat};
use serde::Deserialize;

use super::{not_found, SharedState};

/// Size of images served without dimensions.
const ORIGINAL_SIZE: (u32, u32) = (64, 48);
const AVATAR_SIZE: u32 = 32;
const MAX_SIDE: u32 = 2048;

/// Scaling parameters of the image endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ImageParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

fn png(width: u32, height: u32) -> Response {
    let mut buf = Cursor::new(Vec::new());
    let encoded = DynamicImage::new_rgb8(width.clamp(1, MAX_SIDE), height.clamp(1, MAX_SIDE))
        .write_to(&mut buf, ImageFormat::Png);
    match encoded {
        Ok(()) => ([(header::CONTENT_TYPE, "image/png")], buf.into_inner()).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// GET /image/projects/{id}/files/{file_name}
pub async fn project_image(
    State(state): State<SharedState>,
    Path((id, file_name)): Path<(u64, String)>,
    Query(params): Query<ImageParams>,
) -> Response {
    let state = state.read().await;
    let known = state
        .images
        .get(&id)
        .is_some_and(|images| images.iter().any(|i| i.file_name == file_name));
    if !known {
        return not_found("image", file_name);
    }

    let (width, height) = match (params.width, params.height) {
        (Some(w), Some(h)) => (w, h),
        _ => ORIGINAL_SIZE,
    };
    png(width, height)
}

/// GET /download/users/{name}/avatar/{file_name}
pub async fn user_avatar(
    State(state): State<SharedState>,
    Path((name, file_name)): Path<(String, String)>,
) -> Response {
    let state = state.read().await;
    let known = state
        .user_by_name(&name)
        .and_then(|u| u.avatar())
        .is_some_and(|avatar| avatar == file_name);
    if !known {
        return not_found("avatar", file_name);
    }
    png(AVATAR_SIZE, AVATAR_SIZE)
}
