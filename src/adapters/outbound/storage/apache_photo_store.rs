use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    path::Path as ObjectPath, Attribute, Attributes, ObjectStore as ApacheObjectStore, PutOptions,
    PutPayload,
};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{ProductError, ProductResult},
        value_objects::PhotoKey,
    },
    ports::storage::{PhotoStore, UploadedPhoto},
};

/// Adapter that implements our PhotoStore trait using Apache object_store.
///
/// The upload location returned to callers is synthesized from the configured
/// public base URL plus the object key, mirroring the `Location` field an S3
/// upload response carries.
pub struct ApachePhotoStore {
    inner: Arc<dyn ApacheObjectStore>,
    public_base_url: String,
}

impl ApachePhotoStore {
    pub fn new(store: Arc<dyn ApacheObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            inner: store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn location(&self, key: &PhotoKey) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[async_trait]
impl PhotoStore for ApachePhotoStore {
    async fn upload_photo(
        &self,
        key: &PhotoKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> ProductResult<UploadedPhoto> {
        let path = ObjectPath::from(key.as_str());
        let payload = PutPayload::from(data);

        let mut attributes = Attributes::new();
        if let Some(ct) = content_type {
            attributes.insert(Attribute::ContentType, ct.to_string().into());
        }

        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&path, payload, opts)
            .await
            .map_err(|e| ProductError::UploadFailed {
                message: e.to_string(),
            })?;

        Ok(UploadedPhoto {
            location: self.location(key),
        })
    }

    async fn delete_photo(&self, key: &PhotoKey) -> ProductResult<()> {
        let path = ObjectPath::from(key.as_str());

        match self.inner.delete(&path).await {
            Ok(()) => Ok(()),
            // S3 object deletion is idempotent; a missing object is success
            Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(ProductError::PhotoDeleteFailed {
                key: key.as_str().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProductId;
    use object_store::memory::InMemory;

    fn store() -> ApachePhotoStore {
        ApachePhotoStore::new(
            Arc::new(InMemory::new()),
            "https://photos.example.com/bucket/",
        )
    }

    #[tokio::test]
    async fn test_upload_returns_public_location() {
        let store = store();
        let id = ProductId::new("p1".to_string()).unwrap();
        let key = PhotoKey::for_position(&id, 1);

        let uploaded = store
            .upload_photo(&key, Bytes::from_static(b"png"), Some("image/png"))
            .await
            .unwrap();

        assert_eq!(
            uploaded.location,
            "https://photos.example.com/bucket/products/p1/photo_1.png"
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store();
        let id = ProductId::new("p1".to_string()).unwrap();
        let key = PhotoKey::for_position(&id, 1);

        store
            .upload_photo(&key, Bytes::from_static(b"png"), None)
            .await
            .unwrap();

        store.delete_photo(&key).await.unwrap();
        // Second delete of a now-missing object must not fail
        store.delete_photo(&key).await.unwrap();
    }
}
