use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FindArticlesQuery {
    #[serde(rename = "withImages")]
    with_images: Option<String>,
}

impl FindArticlesQuery {
    /// Tri-state filter: only the literal strings "true" and "false" select a
    /// side; anything else (including an absent parameter) means unfiltered.
    fn image_filter(&self) -> Option<bool> {
        match self.with_images.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// Find articles handler
///
/// Returns article titles in insertion order, optionally filtered by whether
/// the article has at least one attached image.
#[utoipa::path(
    get,
    path = "/article",
    tag = "articles",
    params(
        ("withImages" = Option<String>, Query, description = "Filter by image presence: 'true' or 'false'; omit for all articles")
    ),
    responses(
        (status = 200, description = "Matching article titles", body = Vec<String>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn find_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FindArticlesQuery>,
) -> Result<Json<Vec<String>>, HttpAppError> {
    let titles = state
        .articles
        .find(query.image_filter())
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(titles))
}
