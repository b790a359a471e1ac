//! Image metadata model.

use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, Timestamp};
use crate::error::Result;
use crate::images::{fetch_image, DynamicImage, ImageSize};
use crate::traits::ProjectScoped;

use super::User;

/// Metadata of an image uploaded to a project.
///
/// The bitmap itself is served separately; see [`Image::download`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The image ID.
    pub id: u64,

    /// File name on the image server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,

    /// File size in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_size: u64,

    #[serde(default)]
    pub upload_date: Option<Timestamp>,

    /// The uploader.
    #[serde(rename = "customer", default)]
    pub author: Option<User>,
}

impl Image {
    /// Download and decode this image.
    ///
    /// Returns `Ok(None)` if the served bytes are not a supported image.
    pub async fn download(
        &self,
        client: &PewnClient,
        project_id: u64,
        size: Option<ImageSize>,
    ) -> Result<Option<DynamicImage>> {
        fetch_image(client, project_id, &self.file_name, size).await
    }
}

impl ProjectScoped for Image {
    const PROJECT_SEGMENT: &'static str = "images";
}
