pub mod article;

pub use article::{Article, ArticleCreated, NewArticle, MAX_DESCRIPTION_LEN};
