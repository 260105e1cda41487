use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::{
    domain::{
        errors::{ProductError, ProductResult},
        models::{PhotoReference, Product},
        value_objects::ProductId,
    },
    ports::repositories::ProductRepository,
};

/// SQL-based implementation of ProductRepository using PostgreSQL.
///
/// The photo sequence is stored as a JSONB column so the record keeps the
/// same document shape as the in-memory variant.
#[derive(Clone)]
pub struct SqlProductRepository {
    pool: PgPool,
}

impl SqlProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id VARCHAR PRIMARY KEY,
                name VARCHAR NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                description TEXT NOT NULL,
                collection_id VARCHAR NOT NULL,
                photos JSONB NOT NULL DEFAULT '[]',
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_products_collection_id ON products(collection_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_product(row: &PgRow) -> ProductResult<Product> {
        let id: String = row.get("id");
        let id = ProductId::new(id).map_err(|e| ProductError::InfrastructureError {
            message: format!("Invalid product id in database: {}", e),
            source: Some(e.to_string()),
        })?;

        let photos: serde_json::Value = row.get("photos");
        let photos: Vec<PhotoReference> =
            serde_json::from_value(photos).map_err(|e| ProductError::InfrastructureError {
                message: format!("Failed to deserialize photos: {}", e),
                source: Some(e.to_string()),
            })?;

        Ok(Product {
            id,
            name: row.get("name"),
            price: row.get("price"),
            description: row.get("description"),
            collection_id: row.get("collection_id"),
            photos,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn photos_json(product: &Product) -> ProductResult<serde_json::Value> {
        serde_json::to_value(&product.photos).map_err(|e| ProductError::InfrastructureError {
            message: format!("Failed to serialize photos: {}", e),
            source: Some(e.to_string()),
        })
    }

    fn db_error(context: &str, e: sqlx::Error) -> ProductError {
        ProductError::InfrastructureError {
            message: format!("Database error {}: {}", context, e),
            source: Some(e.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Option<Product>> {
        let photos = Self::photos_json(&product)?;

        let row = sqlx::query(
            r#"
            INSERT INTO products (
                id, name, price, description, collection_id, photos,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, price, description, collection_id, photos,
                      created_at, updated_at
            "#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.collection_id)
        .bind(&photos)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_error("creating product", e))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, description, collection_id, photos,
                   created_at, updated_at
            FROM products
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("listing products", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, description, collection_id, photos,
                   created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_error("retrieving product", e))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn find_by_collection(&self, collection_id: &str) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, description, collection_id, photos,
                   created_at, updated_at
            FROM products
            WHERE collection_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("retrieving collection", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn save(&self, product: Product) -> ProductResult<Option<Product>> {
        let photos = Self::photos_json(&product)?;

        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                description = $4,
                collection_id = $5,
                photos = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING id, name, price, description, collection_id, photos,
                      created_at, updated_at
            "#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.collection_id)
        .bind(&photos)
        .bind(product.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_error("updating product", e))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn remove(&self, id: &ProductId) -> ProductResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_error("removing product", e))?;

        Ok(())
    }
}
