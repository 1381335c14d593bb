use std::path::Path;
use std::sync::Arc;

use article_core::models::NewArticle;
use article_core::{AppError, IdGenerator};
use article_db::{AppendImage, ArticleRepository};
use bytes::Bytes;
use uuid::Uuid;
use validator::Validate;

use super::image_store::ImageStore;

/// Business rules for the article lifecycle: creation validation, attachment
/// capacity and size enforcement, and filtered title lookup.
///
/// Stateless between calls; persistence goes through the injected
/// `ArticleRepository` and image bytes through the `ImageStore`. Identifiers
/// come from the injected generator so tests can supply deterministic values.
#[derive(Clone)]
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    ids: Arc<dyn IdGenerator>,
    images: ImageStore,
    max_image_size_bytes: usize,
    max_images_per_article: usize,
}

impl ArticleService {
    pub fn new(
        repository: Arc<dyn ArticleRepository>,
        ids: Arc<dyn IdGenerator>,
        images: ImageStore,
        max_image_size_bytes: usize,
        max_images_per_article: usize,
    ) -> Self {
        Self {
            repository,
            ids,
            images,
            max_image_size_bytes,
            max_images_per_article,
        }
    }

    /// Validate the creation request and persist a new article with an empty
    /// image list. Returns the assigned identifier.
    #[tracing::instrument(skip(self, request), fields(operation = "create_article"))]
    pub async fn create(&self, request: NewArticle) -> Result<Uuid, AppError> {
        request.validate()?;

        let id = self.ids.generate();
        let article = request.into_article(id);
        self.repository.insert(&article).await?;

        tracing::debug!(article_id = %id, "Article created");
        Ok(id)
    }

    /// Attach one image payload to an existing article.
    ///
    /// The article must exist, have free capacity, and the payload must be
    /// within the configured size, all checked before any file write. The
    /// final capacity decision is the repository's atomic conditional append;
    /// if it does not go through, the already-written file is removed
    /// best-effort on a background task.
    #[tracing::instrument(
        skip(self, data),
        fields(article_id = %article_id, payload_size = data.len(), operation = "attach_image")
    )]
    pub async fn attach_image(
        &self,
        article_id: Uuid,
        original_file_name: Option<&str>,
        data: Bytes,
    ) -> Result<(), AppError> {
        let article = self
            .repository
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", article_id)))?;

        if article.images.len() >= self.max_images_per_article {
            return Err(AppError::ImageLimitReached {
                count: article.images.len(),
                max: self.max_images_per_article,
            });
        }

        if data.len() > self.max_image_size_bytes {
            return Err(AppError::ImageTooLarge {
                size: data.len(),
                max: self.max_image_size_bytes,
            });
        }

        let file_name = self.stored_file_name(original_file_name);
        let path = self.images.save(&file_name, &data).await?;

        match self
            .repository
            .append_image(article_id, &path, self.max_images_per_article)
            .await
        {
            Ok(AppendImage::Appended) => {
                tracing::debug!(article_id = %article_id, path = %path, "Image attached");
                Ok(())
            }
            // A concurrent attachment filled the last slot between the
            // capacity pre-check and the append.
            Ok(AppendImage::CapacityReached) => {
                self.discard(path);
                Err(AppError::ImageLimitReached {
                    count: self.max_images_per_article,
                    max: self.max_images_per_article,
                })
            }
            Ok(AppendImage::NotFound) => {
                self.discard(path);
                Err(AppError::NotFound(format!(
                    "Article {} not found",
                    article_id
                )))
            }
            Err(e) => {
                self.discard(path);
                Err(e)
            }
        }
    }

    /// Titles of stored articles, optionally filtered by image presence, in
    /// insertion order.
    #[tracing::instrument(skip(self), fields(operation = "find_articles"))]
    pub async fn find(&self, with_images: Option<bool>) -> Result<Vec<String>, AppError> {
        match with_images {
            None => self.repository.list_all_titles().await,
            Some(filter) => {
                self.repository
                    .list_titles_by_image_presence(filter)
                    .await
            }
        }
    }

    /// Stored file name: a fresh identifier, keeping the upload's extension
    /// when it has one.
    fn stored_file_name(&self, original: Option<&str>) -> String {
        let id = self.ids.generate();
        match original
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{}", id, ext.to_lowercase()),
            None => id.to_string(),
        }
    }

    /// Best-effort removal of a written file whose metadata append failed.
    /// Runs detached; a failure leaves an orphan file, which is logged and
    /// tolerated.
    fn discard(&self, path: String) {
        let store = self.images.clone();
        tokio::spawn(async move {
            if let Err(err) = store.remove(&path).await {
                tracing::warn!(
                    error = %err,
                    path = %path,
                    "Failed to remove image file after append failure"
                );
            }
        });
    }
}
