use crate::domain::value_objects::ProductId;

/// A storage key for a product photo.
///
/// Keys are always of the form `products/{product_id}/photo_{n}.png` with a
/// 1-based position. Both upload and delete derive keys from position, never
/// from a stored URL, so the same position always maps to the same object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoKey(String);

impl PhotoKey {
    /// Build the key for the photo at the given 1-based position
    pub fn for_position(product_id: &ProductId, position: usize) -> Self {
        Self(format!("products/{}/photo_{}.png", product_id, position))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
