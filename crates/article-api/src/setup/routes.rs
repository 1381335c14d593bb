//! Route configuration and setup

use std::sync::Arc;

use article_core::Config;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{attach_image, create_article, find_articles};
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/article", post(create_article).get(find_articles))
        .route("/image/{article_id}", post(attach_image))
        .with_state(state)
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        // Body limit sits above the image threshold so the size rule in the
        // service decides, with headroom for multipart framing.
        .layer(DefaultBodyLimit::max(config.max_image_size_bytes * 2))
        .layer(TraceLayer::new_for_http())
}
