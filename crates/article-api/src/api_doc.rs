//! OpenAPI documentation for the article service.

use article_core::models::{ArticleCreated, NewArticle};
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Article Management API",
        description = "Articles with validated creation, capacity-limited image attachment, and filtered title lookup."
    ),
    paths(
        handlers::article_create::create_article,
        handlers::article_find::find_articles,
        handlers::image_upload::attach_image,
    ),
    components(schemas(NewArticle, ArticleCreated, ErrorResponse)),
    tags(
        (name = "articles", description = "Article lifecycle"),
        (name = "images", description = "Image attachment")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
