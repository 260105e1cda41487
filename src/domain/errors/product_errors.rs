use crate::domain::value_objects::ProductId;

/// Errors that can occur during product workflow operations
#[derive(Debug, Clone)]
pub enum ProductError {
    /// A required scalar field was missing or empty
    MissingField { field: &'static str },

    /// A field was present but unusable (e.g. a non-numeric price)
    InvalidField { field: &'static str, message: String },

    /// No product matched the requested identifier
    ProductNotFound { id: ProductId },

    /// A photo upload to the object store failed
    UploadFailed { message: String },

    /// A photo deletion in the object store failed
    PhotoDeleteFailed { key: String, message: String },

    /// The repository create/save call did not return a record
    PersistenceFailed { message: String },

    /// The inbound multipart body could not be decoded
    MultipartInvalid { message: String },

    /// Infrastructure error with external source
    InfrastructureError {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },
}

impl std::fmt::Display for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductError::MissingField { field } => {
                write!(f, "Please fill all the fields: '{}' is missing", field)
            }
            ProductError::InvalidField { field, message } => {
                write!(f, "Invalid value for '{}': {}", field, message)
            }
            ProductError::ProductNotFound { id } => {
                write!(f, "No product found: {}", id)
            }
            ProductError::UploadFailed { message } => {
                write!(f, "Photo upload failed: {}", message)
            }
            ProductError::PhotoDeleteFailed { key, message } => {
                write!(f, "Photo delete failed for '{}': {}", key, message)
            }
            ProductError::PersistenceFailed { message } => {
                write!(f, "Product failed to persist: {}", message)
            }
            ProductError::MultipartInvalid { message } => {
                write!(f, "Malformed multipart body: {}", message)
            }
            ProductError::InfrastructureError { message, .. } => {
                write!(f, "Infrastructure error: {}", message)
            }
        }
    }
}

impl std::error::Error for ProductError {}

/// Result type for product workflow operations
pub type ProductResult<T> = Result<T, ProductError>;
