use crate::domain::{
    errors::ProductResult,
    models::{FileUpload, Product, ProductDraft},
    value_objects::ProductId,
};
use async_trait::async_trait;

/// Port for the product workflow
/// This trait defines the six request-level operations of the controller
#[async_trait]
pub trait ProductService: Send + Sync + 'static {
    /// Validate fields, upload files under a freshly generated identifier and
    /// persist the resulting record
    async fn create_product(
        &self,
        draft: ProductDraft,
        files: Vec<FileUpload>,
    ) -> ProductResult<Product>;

    /// Return all products; an empty catalog is not an error
    async fn list_products(&self) -> ProductResult<Vec<Product>>;

    /// Return the product with the given identifier
    async fn get_product(&self, id: &ProductId) -> ProductResult<Product>;

    /// Return all products in a collection, possibly none
    async fn get_products_by_collection(&self, collection_id: &str)
        -> ProductResult<Vec<Product>>;

    /// Replace an existing product's fields and photo sequence wholesale
    async fn update_product(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        files: Vec<FileUpload>,
    ) -> ProductResult<Product>;

    /// Delete a product's photos by index-derived keys, then its record
    async fn delete_product(&self, id: &ProductId) -> ProductResult<()>;
}
