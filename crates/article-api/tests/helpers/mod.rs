#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use article_api::services::{ArticleService, ImageStore};
use article_api::setup::routes::setup_routes;
use article_api::state::AppState;
use article_core::{Config, UuidGenerator};
use article_db::InMemoryArticleRepository;
use axum_test::TestServer;
use tempfile::TempDir;

pub const MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_IMAGES_PER_ARTICLE: usize = 3;

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of image files written to the test image directory.
    pub fn stored_image_count(&self) -> usize {
        match std::fs::read_dir(self._temp_dir.path().join("images")) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }
}

/// Setup a test application backed by the in-memory repository and a
/// temporary image directory.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(&temp_dir);

    let repository = Arc::new(InMemoryArticleRepository::new());
    let images = ImageStore::new(config.image_dir.clone())
        .await
        .expect("Failed to create image store");
    let articles = ArticleService::new(
        repository,
        Arc::new(UuidGenerator),
        images,
        config.max_image_size_bytes,
        config.max_images_per_article,
    );

    let state = Arc::new(AppState { articles });
    let server =
        TestServer::new(setup_routes(&config, state)).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        database_url: String::new(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        image_dir: temp_dir.path().join("images"),
        max_image_size_bytes: MAX_IMAGE_SIZE_BYTES,
        max_images_per_article: MAX_IMAGES_PER_ARTICLE,
        environment: "test".to_string(),
    }
}
