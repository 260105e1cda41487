use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{errors::ProductResult, models::Product, value_objects::ProductId},
    ports::repositories::ProductRepository,
};

/// In-memory implementation of ProductRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    // Map of product id -> record
    records: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut records = self.records.write().await;
        records.insert(product.id.as_str().to_string(), product.clone());
        Ok(Some(product))
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let records = self.records.read().await;
        let mut products: Vec<Product> = records.values().cloned().collect();
        // Same observable ordering as the SQL adapter
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>> {
        let records = self.records.read().await;
        Ok(records.get(id.as_str()).cloned())
    }

    async fn find_by_collection(&self, collection_id: &str) -> ProductResult<Vec<Product>> {
        let records = self.records.read().await;
        let mut products: Vec<Product> = records
            .values()
            .filter(|p| p.collection_id == collection_id)
            .cloned()
            .collect();
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    async fn save(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut records = self.records.write().await;
        if !records.contains_key(product.id.as_str()) {
            return Ok(None);
        }
        records.insert(product.id.as_str().to_string(), product.clone());
        Ok(Some(product))
    }

    async fn remove(&self, id: &ProductId) -> ProductResult<()> {
        let mut records = self.records.write().await;
        records.remove(id.as_str());
        Ok(())
    }
}
