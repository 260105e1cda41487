mod photo_uploader;
mod product_service_impl;

pub use photo_uploader::PhotoUploader;
pub use product_service_impl::ProductServiceImpl;
