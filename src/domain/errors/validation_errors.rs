/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ProductId validation errors
    EmptyProductId,
    ProductIdTooLong { actual: usize, max: usize },
    InvalidProductIdCharacter(char),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyProductId => write!(f, "Product id cannot be empty"),
            ValidationError::ProductIdTooLong { actual, max } => {
                write!(
                    f,
                    "Product id too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidProductIdCharacter(c) => {
                write!(f, "Invalid character in product id: '{}'", c)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
