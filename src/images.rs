//! Image download helper.
//!
//! Images are served outside the JSON API, from
//! `{host}image/projects/{id}/files/{file_name}`. The server scales them
//! (keeping the aspect ratio) when both `width` and `height` are given.

pub use image::DynamicImage;

use crate::client::PewnClient;
use crate::error::Result;

/// Requested output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Build a size from possibly negative dimensions.
    ///
    /// Returns `None` if either dimension is negative, which requests the
    /// original size.
    pub fn new(width: i64, height: i64) -> Option<Self> {
        Some(Self {
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
        })
    }

    fn query_pairs(self) -> Vec<(&'static str, u32)> {
        vec![("width", self.width), ("height", self.height)]
    }
}

/// Download a project image and decode it.
///
/// Returns `Ok(None)` if the response body is not a supported image
/// (PNG, JPEG, GIF or BMP).
///
/// # Example
///
/// ```no_run
/// use pewnapi::{fetch_image, ImageSize, PewnClient};
///
/// # async fn example() -> pewnapi::Result<()> {
/// let client = PewnClient::default_host()?;
/// let thumb = fetch_image(&client, 8568, "title.png", ImageSize::new(160, 90)).await?;
/// if let Some(img) = thumb {
///     println!("{}x{}", img.width(), img.height());
/// }
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(skip(client))]
pub async fn fetch_image(
    client: &PewnClient,
    project_id: u64,
    file_name: &str,
    size: Option<ImageSize>,
) -> Result<Option<DynamicImage>> {
    let path = format!(
        "image/projects/{project_id}/files/{}",
        urlencoding::encode(file_name)
    );
    let query = size.map(ImageSize::query_pairs).unwrap_or_default();
    let bytes = client.download(&path, &query).await?;
    Ok(decode(&bytes))
}

/// Download a user's avatar and decode it.
#[tracing::instrument(skip(client))]
pub async fn fetch_avatar(
    client: &PewnClient,
    username: &str,
    file_name: &str,
) -> Result<Option<DynamicImage>> {
    let path = format!(
        "download/users/{}/avatar/{}",
        urlencoding::encode(username),
        urlencoding::encode(file_name)
    );
    let bytes = client.download(&path, &[] as &[(&str, u32)]).await?;
    Ok(decode(&bytes))
}

fn decode(bytes: &[u8]) -> Option<DynamicImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!(error = %e, len = bytes.len(), "response is not a decodable image");
            None
        }
    }
}
