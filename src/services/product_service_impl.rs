use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{ProductError, ProductResult},
        models::{FileUpload, Product, ProductDraft},
        value_objects::ProductId,
    },
    ports::{repositories::ProductRepository, services::ProductService, storage::PhotoStore},
    services::PhotoUploader,
};

/// Implementation of ProductService wiring the repository and the photo
/// uploader together.
///
/// The document-store write and the object-store writes are two independent
/// steps with no atomicity between them; a failure after uploads completed
/// leaves orphaned objects behind. The workflow is kept in one place so a
/// compensation mechanism could be inserted later without touching handler
/// signatures.
#[derive(Clone)]
pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
    uploader: PhotoUploader,
}

impl ProductServiceImpl {
    /// Create a new ProductServiceImpl instance
    pub fn new(repository: Arc<dyn ProductRepository>, store: Arc<dyn PhotoStore>) -> Self {
        Self {
            repository,
            uploader: PhotoUploader::new(store),
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(
        &self,
        draft: ProductDraft,
        files: Vec<FileUpload>,
    ) -> ProductResult<Product> {
        // Validation happens before any upload is issued
        let fields = draft.validate()?;

        // The identifier is generated up front so uploads can use it as a
        // path prefix before the record exists
        let id = ProductId::generate();

        let photos = self.uploader.upload_all(&id, &files).await?;

        let now = Utc::now();
        let product = Product {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            collection_id: fields.collection_id,
            photos,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(product).await?.ok_or_else(|| {
            ProductError::PersistenceFailed {
                message: "Product failed to create in DB".to_string(),
            }
        })?;

        tracing::info!(id = %created.id, photos = created.photos.len(), "product created");
        Ok(created)
    }

    async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    async fn get_product(&self, id: &ProductId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::ProductNotFound { id: id.clone() })
    }

    async fn get_products_by_collection(
        &self,
        collection_id: &str,
    ) -> ProductResult<Vec<Product>> {
        // An empty match set is a data condition, not an error
        self.repository.find_by_collection(collection_id).await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        files: Vec<FileUpload>,
    ) -> ProductResult<Product> {
        // Existence is checked before field validation
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::ProductNotFound { id: id.clone() })?;

        let fields = draft.validate()?;

        // The photo sequence is replaced wholesale. If fewer files are
        // supplied than before, objects under higher-indexed keys stay in
        // storage unreferenced.
        let photos = self.uploader.upload_all(id, &files).await?;

        existing.apply_update(fields, photos);
        existing.updated_at = Utc::now();

        let updated = self.repository.save(existing).await?.ok_or_else(|| {
            ProductError::PersistenceFailed {
                message: "Product failed to update in DB".to_string(),
            }
        })?;

        tracing::info!(id = %updated.id, photos = updated.photos.len(), "product updated");
        Ok(updated)
    }

    async fn delete_product(&self, id: &ProductId) -> ProductResult<()> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::ProductNotFound { id: id.clone() })?;

        // Record removal proceeds even when a photo deletion fails, so the
        // catalog never keeps a record whose removal was requested. The
        // storage failure is still surfaced afterwards.
        let photo_result = self
            .uploader
            .delete_all(&product.id, product.photos.len())
            .await;

        if let Err(ref e) = photo_result {
            tracing::warn!(id = %id, error = %e, "photo cleanup failed, removing record anyway");
        }

        self.repository.remove(id).await?;
        tracing::info!(id = %id, "product deleted");

        photo_result
    }
}
