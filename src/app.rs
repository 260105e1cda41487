use object_store::{aws::AmazonS3Builder, memory::InMemory};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        persistence::{InMemoryProductRepository, SqlProductRepository},
        storage::ApachePhotoStore,
    },
    ports::{repositories::ProductRepository, storage::PhotoStore},
    services::ProductServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub repository_backend: RepositoryBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory,
            repository_backend: RepositoryBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    S3 {
        bucket: String,
        region: String,
        access_key: Option<String>,
        secret_key: Option<String>,
        /// Overrides the public URL prefix photos are served from; defaults
        /// to the bucket's virtual-hosted S3 URL
        public_url: Option<String>,
    },
}

/// Repository backend configuration
#[derive(Debug, Clone)]
pub enum RepositoryBackend {
    InMemory,
    Database { connection_string: String },
}

/// Application dependencies container
pub struct AppDependencies {
    pub photo_store: Arc<dyn PhotoStore>,
    pub product_repository: Arc<dyn ProductRepository>,
}

/// Application services container
pub struct AppServices {
    pub product_service: ProductServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Configure repository backend
    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let photo_store = self.create_photo_store()?;
        let product_repository = self.create_repository().await?;

        Ok(AppDependencies {
            photo_store,
            product_repository,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        let product_service =
            ProductServiceImpl::new(deps.product_repository.clone(), deps.photo_store.clone());

        Ok(AppServices { product_service })
    }

    /// Create the photo store adapter based on configuration
    fn create_photo_store(&self) -> Result<Arc<dyn PhotoStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory => {
                let store = Arc::new(InMemory::new());
                Ok(Arc::new(ApachePhotoStore::new(
                    store,
                    "memory://product-photos",
                )))
            }
            StorageBackend::S3 {
                bucket,
                region,
                access_key,
                secret_key,
                public_url,
            } => {
                let mut builder = AmazonS3Builder::from_env()
                    .with_bucket_name(bucket)
                    .with_region(region);

                if let Some(access_key) = access_key {
                    builder = builder.with_access_key_id(access_key);
                }
                if let Some(secret_key) = secret_key {
                    builder = builder.with_secret_access_key(secret_key);
                }

                let store = builder.build().map_err(|e| AppError::StorageInit {
                    message: format!("Failed to build S3 store: {}", e),
                })?;

                let base_url = public_url.clone().unwrap_or_else(|| {
                    format!("https://{}.s3.{}.amazonaws.com", bucket, region)
                });

                Ok(Arc::new(ApachePhotoStore::new(Arc::new(store), base_url)))
            }
        }
    }

    /// Create the product repository based on configuration
    async fn create_repository(&self) -> Result<Arc<dyn ProductRepository>, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => Ok(Arc::new(InMemoryProductRepository::new())),
            RepositoryBackend::Database { connection_string } => {
                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to connect to database: {}", e),
                    })?;

                let repository = SqlProductRepository::new(pool);
                repository
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to run migrations: {}", e),
                    })?;

                Ok(Arc::new(repository))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create an S3-backed application
pub async fn create_s3_app(
    bucket: String,
    region: String,
    access_key: Option<String>,
    secret_key: Option<String>,
) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::S3 {
            bucket,
            region,
            access_key,
            secret_key,
            public_url: None,
        })
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    let storage_backend = match std::env::var("STORAGE_BACKEND").as_deref() {
        Ok("s3") => {
            let bucket = std::env::var("S3_BUCKET").map_err(|_| AppError::Configuration {
                message: "S3_BUCKET environment variable required".to_string(),
            })?;
            let region = std::env::var("S3_REGION").map_err(|_| AppError::Configuration {
                message: "S3_REGION environment variable required".to_string(),
            })?;
            let access_key = std::env::var("S3_ACCESS_KEY").ok();
            let secret_key = std::env::var("S3_SECRET_KEY").ok();
            let public_url = std::env::var("S3_PUBLIC_URL").ok();

            StorageBackend::S3 {
                bucket,
                region,
                access_key,
                secret_key,
                public_url,
            }
        }
        _ => StorageBackend::InMemory,
    };

    let repository_backend = match std::env::var("REPOSITORY_BACKEND").as_deref() {
        Ok("database") => {
            let connection_string =
                std::env::var("DATABASE_URL").map_err(|_| AppError::Configuration {
                    message: "DATABASE_URL environment variable required".to_string(),
                })?;
            RepositoryBackend::Database { connection_string }
        }
        _ => RepositoryBackend::InMemory,
    };

    AppBuilder::new()
        .with_storage_backend(storage_backend)
        .with_repository_backend(repository_backend)
        .build()
        .await
}
