use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// A unique product identifier, generated before the record is persisted so
/// that photo uploads can use it as a storage path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Create a ProductId from an externally supplied value (e.g. a route
    /// parameter) with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyProductId);
        }

        if value.len() > 64 {
            return Err(ValidationError::ProductIdTooLong {
                actual: value.len(),
                max: 64,
            });
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' {
                return Err(ValidationError::InvalidProductIdCharacter(c));
            }
        }

        Ok(Self(value))
    }

    /// Generate a fresh globally-unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
