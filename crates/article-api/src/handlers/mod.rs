pub mod article_create;
pub mod article_find;
pub mod image_upload;

pub use article_create::create_article;
pub use article_find::find_articles;
pub use image_upload::attach_image;
