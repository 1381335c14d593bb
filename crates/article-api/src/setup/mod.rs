//! Application assembly: database, routes, server, telemetry.

pub mod database;
pub mod routes;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Result;
use article_core::{Config, UuidGenerator};
use article_db::PgArticleRepository;
use axum::Router;

use crate::services::{ArticleService, ImageStore};
use crate::state::AppState;

/// Connect the store, build the service and the router.
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, Router)> {
    let pool = database::connect(config).await?;
    let repository = Arc::new(PgArticleRepository::new(pool));

    let images = ImageStore::new(config.image_dir.clone()).await?;

    let articles = ArticleService::new(
        repository,
        Arc::new(UuidGenerator),
        images,
        config.max_image_size_bytes,
        config.max_images_per_article,
    );

    let state = Arc::new(AppState { articles });
    let router = routes::setup_routes(config, state.clone());

    Ok((state, router))
}
