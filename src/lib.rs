pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    DomainValidationError,
    FileUpload,
    // Value objects
    PhotoKey,
    PhotoReference,
    // Models
    Product,
    ProductDraft,
    // Errors
    ProductError,
    ProductFields,
    ProductId,
    ProductResult,
};

// Port types - interfaces for external systems
pub use ports::{PhotoStore, ProductRepository, ProductService, UploadedPhoto};

// Service implementations - business logic
pub use services::{PhotoUploader, ProductServiceImpl};

// Application factory and configuration
pub use app::{
    create_app_from_env, create_in_memory_app, create_s3_app, AppBuilder, AppConfig,
    AppDependencies, AppError, AppServices, RepositoryBackend, StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    persistence::{InMemoryProductRepository, SqlProductRepository},
    storage::ApachePhotoStore,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_s3_app, ApachePhotoStore, AppBuilder, AppServices,
        InMemoryProductRepository, PhotoKey, PhotoStore, PhotoUploader, Product, ProductId,
        ProductRepository, ProductService, ProductServiceImpl,
    };
}
