mod in_memory_product_repository;
mod sql_product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use sql_product_repository::SqlProductRepository;
