//! Application state shared across handlers.

use crate::services::ArticleService;

/// State injected into every handler. All durable state lives behind the
/// service's repository; this struct itself is cheap to clone through the Arc
/// the router holds.
pub struct AppState {
    pub articles: ArticleService,
}
