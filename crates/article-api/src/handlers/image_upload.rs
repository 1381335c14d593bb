use std::sync::Arc;

use article_core::AppError;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Attach image handler
///
/// Reads the `file` field of a multipart upload and attaches it to the
/// addressed article, subject to the per-article capacity and the configured
/// size threshold.
#[utoipa::path(
    post,
    path = "/image/{article_id}",
    tag = "images",
    params(
        ("article_id" = String, Path, description = "Article ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image attached"),
        (status = 400, description = "Malformed id, missing file field, or payload too large", body = ErrorResponse),
        (status = 403, description = "Article already holds the maximum number of images", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn attach_image(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    // Parse the id by hand so a malformed value renders in our error shape.
    let article_id = Uuid::parse_str(&article_id).map_err(AppError::from)?;

    let (file_name, data) = read_file_field(multipart).await?;

    state
        .articles
        .attach_image(article_id, file_name.as_deref(), data)
        .await
        .map_err(HttpAppError::from)?;

    Ok(StatusCode::OK)
}

/// Pull the `file` field out of the multipart body.
async fn read_file_field(
    mut multipart: Multipart,
) -> Result<(Option<String>, Bytes), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file field: {}", e)))?;
            return Ok((file_name, data));
        }
    }

    Err(AppError::InvalidInput("Missing multipart field 'file'".to_string()).into())
}
