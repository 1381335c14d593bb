use std::sync::Arc;

use article_core::models::{ArticleCreated, NewArticle};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Create article handler
///
/// Validates the request body and persists a new article with an empty image
/// list, returning the assigned identifier.
#[utoipa::path(
    post,
    path = "/article",
    tag = "articles",
    request_body = NewArticle,
    responses(
        (status = 201, description = "Article created", body = ArticleCreated),
        (status = 400, description = "Validation failure or malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_article(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<NewArticle>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = state.articles.create(body).await.map_err(HttpAppError::from)?;

    Ok((StatusCode::CREATED, Json(ArticleCreated { id })))
}
