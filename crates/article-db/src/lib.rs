//! Article store adapter.
//!
//! The only component that performs persistence I/O for articles. Exposes the
//! `ArticleRepository` trait plus a PostgreSQL implementation and an
//! in-process one for tests and local development.

pub mod db;

pub use db::article::{AppendImage, ArticleRepository, PgArticleRepository};
pub use db::memory::InMemoryArticleRepository;
pub use db::run_migrations;
