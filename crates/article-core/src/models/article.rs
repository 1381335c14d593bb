use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Longest accepted description. Exactly this many characters passes
/// validation; one more is rejected.
pub const MAX_DESCRIPTION_LEN: u64 = 40_000;

/// Persisted article record with its attached image paths.
///
/// `images` is append-only and never exceeds the configured per-article
/// capacity. A record is either fully present with all required fields or
/// absent; no partially-constructed article is ever stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub expiration_date: DateTime<Utc>,
    /// Paths of stored image files, in attachment order.
    pub images: Vec<String>,
}

/// Creation request body for `POST /article`.
///
/// Field presence is enforced by deserialization (a missing field is a body
/// rejection); content rules live in the `validator` attributes so every
/// violated constraint is reported together as field + rule.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1, max = 40_000))]
    pub description: String,
    pub expiration_date: DateTime<Utc>,
}

impl NewArticle {
    /// Build the article to persist: assigned id, empty image list.
    pub fn into_article(self, id: Uuid) -> Article {
        Article {
            id,
            title: self.title,
            description: self.description,
            expiration_date: self.expiration_date,
            images: Vec::new(),
        }
    }
}

/// Response body for a successful article creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleCreated {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> NewArticle {
        NewArticle {
            title: "Test_Title".to_string(),
            description: "Test_Description".to_string(),
            expiration_date: Utc::now(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let request = NewArticle {
            title: String::new(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_empty_description_rejected() {
        let request = NewArticle {
            description: String::new(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_description_boundary() {
        let at_limit = NewArticle {
            description: "A".repeat(MAX_DESCRIPTION_LEN as usize),
            ..valid_request()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = NewArticle {
            description: "A".repeat(MAX_DESCRIPTION_LEN as usize + 1),
            ..valid_request()
        };
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let request = NewArticle {
            title: String::new(),
            description: String::new(),
            expiration_date: Utc::now(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_missing_field_is_a_body_rejection() {
        let body = r#"{"title": "Test_Title", "description": "Test_Description"}"#;
        assert!(serde_json::from_str::<NewArticle>(body).is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let body = r#"{
            "title": "Test_Title",
            "description": "Test_Description",
            "expirationDate": "2026-01-01T00:00:00Z"
        }"#;
        let request: NewArticle = serde_json::from_str(body).unwrap();
        assert_eq!(request.title, "Test_Title");
    }

    #[test]
    fn test_into_article_starts_with_no_images() {
        let id = Uuid::new_v4();
        let article = valid_request().into_article(id);
        assert_eq!(article.id, id);
        assert!(article.images.is_empty());
    }
}
