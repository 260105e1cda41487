use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{errors::ProductError, models::Product};

/// DTO for a single product; field names follow the JSON wire contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub collection_id: String,
    pub photos: Vec<PhotoDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for an embedded photo reference; `secure_url` is the wire contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDto {
    pub secure_url: String,
}

/// DTO wrapping a single product response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponseDto {
    pub success: bool,
    pub product: ProductDto,
}

/// DTO wrapping a product list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponseDto {
    pub success: bool,
    pub products: Vec<ProductDto>,
}

/// DTO for a delete acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponseDto {
    pub success: bool,
    pub message: String,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub success: bool,
    pub message: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id.as_str().to_string(),
            name: product.name,
            price: product.price,
            description: product.description,
            collection_id: product.collection_id,
            photos: product
                .photos
                .into_iter()
                .map(|p| PhotoDto {
                    secure_url: p.secure_url,
                })
                .collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl ProductResponseDto {
    pub fn new(product: Product) -> Self {
        Self {
            success: true,
            product: product.into(),
        }
    }
}

impl ProductListResponseDto {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            success: true,
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}

impl ErrorResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Map the workflow error taxonomy to HTTP statuses: client mistakes are 400,
/// missing records 404, everything downstream 500
impl From<&ProductError> for StatusCode {
    fn from(error: &ProductError) -> Self {
        match error {
            ProductError::MissingField { .. }
            | ProductError::InvalidField { .. }
            | ProductError::MultipartInvalid { .. } => StatusCode::BAD_REQUEST,
            ProductError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
            ProductError::UploadFailed { .. }
            | ProductError::PhotoDeleteFailed { .. }
            | ProductError::PersistenceFailed { .. }
            | ProductError::InfrastructureError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            StatusCode::from(&ProductError::MissingField { field: "name" }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StatusCode::from(&ProductError::ProductNotFound {
                id: crate::domain::value_objects::ProductId::generate()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StatusCode::from(&ProductError::UploadFailed {
                message: "boom".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
