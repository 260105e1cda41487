mod apache_photo_store;

pub use apache_photo_store::ApachePhotoStore;
