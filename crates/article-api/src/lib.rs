//! Article service HTTP API.
//!
//! Exposed as a library so integration tests can assemble the router with an
//! in-memory repository instead of a live database.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
