use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_product, delete_product, get_product, get_products_by_collection, list_products,
    update_product,
};
use std::sync::Arc;

use crate::ports::services::ProductService;

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Product operations
        .route("/products", post(create_product))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
        .route(
            "/collections/{collection_id}/products",
            get(get_products_by_collection),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Add state for dependency injection
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::{
            persistence::InMemoryProductRepository, storage::ApachePhotoStore,
        },
        services::ProductServiceImpl,
    };
    use axum_test::TestServer;
    use object_store::memory::InMemory;
    use std::sync::Arc;

    fn create_test_app_state() -> AppState {
        let photo_store = Arc::new(ApachePhotoStore::new(
            Arc::new(InMemory::new()),
            "memory://product-photos",
        ));
        let repository = Arc::new(InMemoryProductRepository::new());

        AppState {
            product_service: Arc::new(ProductServiceImpl::new(repository, photo_store)),
        }
    }

    #[tokio::test]
    async fn test_router_creation() {
        let state = create_test_app_state();
        let app = create_router(state);

        let _server = TestServer::new(app).unwrap();
    }
}
