use futures::future::try_join_all;
use std::sync::Arc;

use crate::{
    domain::{
        errors::ProductResult,
        models::{FileUpload, PhotoReference},
        value_objects::{PhotoKey, ProductId},
    },
    ports::storage::PhotoStore,
};

/// Uploads a product's photo files to the object store and collects the
/// resulting references.
///
/// Keys are derived from each file's 1-based position in the input sequence,
/// so the caller must pass files in a deterministic order. All uploads are
/// dispatched concurrently and the first failure aborts the batch; uploads
/// that already completed are NOT rolled back and stay in storage as orphans
/// until the record referencing them is written.
#[derive(Clone)]
pub struct PhotoUploader {
    store: Arc<dyn PhotoStore>,
}

impl PhotoUploader {
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    /// Upload every file under `products/{product_id}/photo_{n}.png` and
    /// return one reference per file, in input order
    pub async fn upload_all(
        &self,
        product_id: &ProductId,
        files: &[FileUpload],
    ) -> ProductResult<Vec<PhotoReference>> {
        let uploads = files.iter().enumerate().map(|(index, file)| {
            let key = PhotoKey::for_position(product_id, index + 1);
            async move {
                tracing::debug!(key = %key, slot = %file.slot, "uploading photo");
                let uploaded = self
                    .store
                    .upload_photo(&key, file.data.clone(), file.content_type.as_deref())
                    .await?;
                Ok(PhotoReference {
                    secure_url: uploaded.location,
                })
            }
        });

        try_join_all(uploads).await
    }

    /// Delete the photos at positions `1..=count`, reconstructing each key
    /// from its index rather than from a stored URL
    pub async fn delete_all(&self, product_id: &ProductId, count: usize) -> ProductResult<()> {
        let deletions = (1..=count).map(|position| {
            let key = PhotoKey::for_position(product_id, position);
            async move {
                tracing::debug!(key = %key, "deleting photo");
                self.store.delete_photo(&key).await
            }
        });

        try_join_all(deletions).await?;
        Ok(())
    }
}
