//! Article Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! identifier-generation seam shared by the article service components.

pub mod config;
pub mod error;
pub mod id;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use id::{IdGenerator, UuidGenerator};
