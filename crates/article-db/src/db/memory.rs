use std::sync::Mutex;

use article_core::models::Article;
use article_core::AppError;
use async_trait::async_trait;
use uuid::Uuid;

use super::article::{AppendImage, ArticleRepository};

/// In-process repository backed by a mutex-guarded vector.
///
/// Used by the HTTP integration tests and for local development without a
/// database. Insertion order of the vector is the listing order, matching the
/// `seq` ordering of the PostgreSQL implementation. The conditional append
/// runs under a single lock acquisition, so it is as race-free as the SQL one.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: &Article) -> Result<(), AppError> {
        let mut articles = self.articles.lock().expect("repository lock poisoned");
        if articles.iter().any(|a| a.id == article.id) {
            return Err(AppError::Storage(format!(
                "Duplicate article id: {}",
                article.id
            )));
        }
        articles.push(article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, AppError> {
        let articles = self.articles.lock().expect("repository lock poisoned");
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn append_image(
        &self,
        id: Uuid,
        path: &str,
        max_images: usize,
    ) -> Result<AppendImage, AppError> {
        let mut articles = self.articles.lock().expect("repository lock poisoned");
        let Some(article) = articles.iter_mut().find(|a| a.id == id) else {
            return Ok(AppendImage::NotFound);
        };
        if article.images.len() >= max_images {
            return Ok(AppendImage::CapacityReached);
        }
        article.images.push(path.to_string());
        Ok(AppendImage::Appended)
    }

    async fn list_all_titles(&self) -> Result<Vec<String>, AppError> {
        let articles = self.articles.lock().expect("repository lock poisoned");
        Ok(articles.iter().map(|a| a.title.clone()).collect())
    }

    async fn list_titles_by_image_presence(
        &self,
        has_image: bool,
    ) -> Result<Vec<String>, AppError> {
        let articles = self.articles.lock().expect("repository lock poisoned");
        Ok(articles
            .iter()
            .filter(|a| !a.images.is_empty() == has_image)
            .map(|a| a.title.clone())
            .collect())
    }
}
