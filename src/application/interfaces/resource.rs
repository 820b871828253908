use crate::error::AppError;
use crate::model::resource::{Resource, ResourceId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::Serialize;

/// Interface for CRUD operations over resource collections
///
/// `resource` is the collection name as it appears in the URL
/// (`workspaces`, `queues`, ...). Every operation fails with
/// [`AppError::Http`] carrying the server's status code when the request
/// is rejected.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Gets a single resource from `{resource}/{id}`
    async fn fetch_one<I>(&self, resource: &str, id: I) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send;

    /// Lists every resource of a collection, page by page
    ///
    /// Nothing is requested until the stream is polled. Each page is fetched
    /// only once the previous one has been drained, and a failed page ends
    /// the stream with its error.
    ///
    /// # Arguments
    /// * `resource` - Collection name
    /// * `query` - Extra query parameters, sent after `page_size`
    fn fetch_all<'a>(
        &'a self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> BoxStream<'a, Result<Resource, AppError>>;

    /// Creates a resource with POST to `{resource}`
    async fn create<D>(&self, resource: &str, data: &D) -> Result<Resource, AppError>
    where
        D: Serialize + Sync + ?Sized;

    /// Replaces a resource with PUT to `{resource}/{id}`
    ///
    /// Fields absent from `data` are reset by the server.
    async fn replace<I, D>(&self, resource: &str, id: I, data: &D) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send,
        D: Serialize + Sync + ?Sized;

    /// Partially updates a resource with PATCH to `{resource}/{id}`
    async fn update<I, D>(&self, resource: &str, id: I, data: &D) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send,
        D: Serialize + Sync + ?Sized;

    /// Deletes a resource with DELETE to `{resource}/{id}`
    async fn delete<I>(&self, resource: &str, id: I) -> Result<(), AppError>
    where
        I: Into<ResourceId> + Send;
}
