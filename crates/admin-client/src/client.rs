//! Admin client trait

use crate::error::ApiResult;
use crate::resource::Resource;
use crate::types::{AmenityInput, Page, Record};
use async_trait::async_trait;

/// Admin REST API client trait
///
/// Defines the operations the console performs against the backend.
/// Mutations resolve to the server's human-readable message on success.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use admin_client::{AdminClient, Resource};
///
/// async fn first_page(client: &dyn AdminClient) -> admin_client::ApiResult<usize> {
///     let page = client.fetch_page(Resource::Amenities, 1, 10).await?;
///     Ok(page.items.len())
/// }
/// ```
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Fetch one page of a resource collection
    ///
    /// # Arguments
    ///
    /// * `resource` - The collection to list
    /// * `page` - 1-based page number; not validated client-side
    /// * `limit` - Page size
    async fn fetch_page(&self, resource: Resource, page: u32, limit: u32)
        -> ApiResult<Page<Record>>;

    /// Fetch the whole collection, used for client-side lookups by id
    async fn fetch_all(&self, resource: Resource) -> ApiResult<Vec<Record>>;

    /// Delete a single entity
    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<String>;

    /// Mark an enquiry as seen
    async fn mark_seen(&self, enquiry_id: &str) -> ApiResult<String>;

    /// Create an amenity
    async fn create_amenity(&self, input: &AmenityInput) -> ApiResult<String>;

    /// Update an existing amenity
    async fn update_amenity(&self, id: &str, input: &AmenityInput) -> ApiResult<String>;
}
