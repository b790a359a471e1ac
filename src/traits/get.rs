//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::PewnClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use pewnapi::{PewnClient, Project, Get};
///
/// let client = PewnClient::default_host()?;
/// let project = Project::get(&client, 8568).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &PewnClient, id: Self::Id) -> Result<Self>;
}
