use article_core::models::Article;
use article_core::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Outcome of the conditional image append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendImage {
    /// The path was added; the article had free capacity.
    Appended,
    /// The article exists but already holds the maximum number of images.
    CapacityReached,
    /// No article with the given id.
    NotFound,
}

/// Storage contract for articles.
///
/// The append operation must be an atomic conditional mutation ("append iff
/// current length < max") so concurrent attachments can never push an article
/// past its capacity; callers must not re-implement the check as a
/// read-modify-write pair.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: &Article) -> Result<(), AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, AppError>;

    async fn append_image(
        &self,
        id: Uuid,
        path: &str,
        max_images: usize,
    ) -> Result<AppendImage, AppError>;

    /// Titles of every article, in insertion order.
    async fn list_all_titles(&self) -> Result<Vec<String>, AppError>;

    /// Titles of articles that do (`true`) or do not (`false`) have at least
    /// one image, in insertion order.
    async fn list_titles_by_image_presence(
        &self,
        has_image: bool,
    ) -> Result<Vec<String>, AppError>;
}

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[tracing::instrument(skip(self, article), fields(db.table = "articles", db.operation = "insert", db.record_id = %article.id))]
    async fn insert(&self, article: &Article) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO articles (id, title, description, expiration_date, images)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.description)
        .bind(article.expiration_date)
        .bind(&article.images)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "articles", db.operation = "select", db.record_id = %id))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, AppError> {
        let article = sqlx::query_as::<Postgres, Article>(
            "SELECT id, title, description, expiration_date, images FROM articles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    #[tracing::instrument(skip(self), fields(db.table = "articles", db.operation = "update", db.record_id = %id))]
    async fn append_image(
        &self,
        id: Uuid,
        path: &str,
        max_images: usize,
    ) -> Result<AppendImage, AppError> {
        // Single conditional UPDATE: the capacity check and the append happen
        // in one statement, so concurrent calls cannot both pass a stale check.
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET images = array_append(images, $2)
            WHERE id = $1 AND cardinality(images) < $3
            "#,
        )
        .bind(id)
        .bind(path)
        .bind(max_images as i32)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(AppendImage::Appended);
        }

        // Zero rows: classify whether the article is absent or full. This
        // follow-up read only names the failure; the append itself stays atomic.
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(AppendImage::CapacityReached)
        } else {
            Ok(AppendImage::NotFound)
        }
    }

    #[tracing::instrument(skip(self), fields(db.table = "articles", db.operation = "select"))]
    async fn list_all_titles(&self) -> Result<Vec<String>, AppError> {
        let titles = sqlx::query_scalar::<Postgres, String>(
            "SELECT title FROM articles ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(titles)
    }

    #[tracing::instrument(skip(self), fields(db.table = "articles", db.operation = "select"))]
    async fn list_titles_by_image_presence(
        &self,
        has_image: bool,
    ) -> Result<Vec<String>, AppError> {
        let titles = sqlx::query_scalar::<Postgres, String>(
            "SELECT title FROM articles WHERE (cardinality(images) > 0) = $1 ORDER BY seq ASC",
        )
        .bind(has_image)
        .fetch_all(&self.pool)
        .await?;

        Ok(titles)
    }
}
