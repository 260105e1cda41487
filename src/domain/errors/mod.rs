mod product_errors;
mod validation_errors;

pub use product_errors::*;
pub use validation_errors::*;
