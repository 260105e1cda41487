use crate::domain::{errors::ProductResult, models::Product, value_objects::ProductId};
use async_trait::async_trait;

/// Repository port for product records.
///
/// Mirrors document-store access by identifier. `create` and `save` return
/// the persisted record, or `None` when the backend did not produce one; the
/// workflow turns that into a persistence failure.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product record
    async fn create(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Retrieve all product records
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Retrieve a product by identifier
    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>>;

    /// Retrieve all products belonging to a collection; an empty result is
    /// not an error
    async fn find_by_collection(&self, collection_id: &str) -> ProductResult<Vec<Product>>;

    /// Persist an in-place update of an existing record
    async fn save(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Remove a product record
    async fn remove(&self, id: &ProductId) -> ProductResult<()>;
}
