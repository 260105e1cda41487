use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{ProductError, ProductResult},
    value_objects::ProductId,
};

/// A product record as persisted in the repository
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub collection_id: String,
    /// One reference per uploaded file, in upload order. Empty only when no
    /// files were supplied at creation/update time.
    pub photos: Vec<PhotoReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrite all mutable fields from a validated field set and a freshly
    /// uploaded photo sequence. Photos are replaced wholesale, never merged.
    pub fn apply_update(&mut self, fields: ProductFields, photos: Vec<PhotoReference>) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.collection_id = fields.collection_id;
        self.photos = photos;
    }
}

/// The storage location of a single uploaded photo, embedded in a Product.
///
/// Serialized so repositories can persist the photo sequence as JSON; the
/// `secure_url` field name is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoReference {
    pub secure_url: String,
}

/// The validated scalar fields of a create/update request
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub collection_id: String,
}

/// The raw scalar fields as extracted from a multipart body, before
/// required-field validation
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl ProductDraft {
    /// Check the four required fields and coerce the price.
    ///
    /// An absent or empty field fails with MissingField. Price arrives as a
    /// form string and is parsed here; the workflow performs no further
    /// bounds checking on it.
    pub fn validate(self) -> ProductResult<ProductFields> {
        let name = Self::required("name", self.name)?;
        let price = Self::required("price", self.price)?;
        let description = Self::required("description", self.description)?;
        let collection_id = Self::required("collectionId", self.collection_id)?;

        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|e| ProductError::InvalidField {
                field: "price",
                message: e.to_string(),
            })?;

        Ok(ProductFields {
            name,
            price,
            description,
            collection_id,
        })
    }

    fn required(field: &'static str, value: Option<String>) -> ProductResult<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ProductError::MissingField { field }),
        }
    }
}

/// A single named file part from a multipart request, request-scoped.
///
/// Files are carried as an ordered sequence of these, in multipart arrival
/// order, so storage keys derived from position are reproducible.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub slot: String,
    pub data: Bytes,
    pub content_type: Option<String>,
}
