pub mod article;
pub mod image_store;

pub use article::ArticleService;
pub use image_store::ImageStore;
