use crate::domain::{errors::ProductResult, value_objects::PhotoKey};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for photo blob storage
/// This abstracts the actual storage backend (S3, in-memory, etc.)
#[async_trait]
pub trait PhotoStore: Send + Sync + 'static {
    /// Store a photo payload under the given key and return its public
    /// location
    async fn upload_photo(
        &self,
        key: &PhotoKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> ProductResult<UploadedPhoto>;

    /// Delete the photo stored under the given key
    async fn delete_photo(&self, key: &PhotoKey) -> ProductResult<()>;
}

/// The outcome of a successful photo upload
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    /// Publicly reachable URL of the stored object
    pub location: String,
}
