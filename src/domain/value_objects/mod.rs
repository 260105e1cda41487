mod photo_key;
mod product_id;

pub use photo_key::PhotoKey;
pub use product_id::ProductId;
