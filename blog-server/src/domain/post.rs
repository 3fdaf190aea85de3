use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Public projection of a post: what listing and lookup return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostSummary {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: AuthorName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorName {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        Ok(self)
    }
}

/// Absent `title`/`content` keep the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UpdatePostRequest {
    pub(crate) id: String,
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_id(&self.id)?;
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(self)
    }
}

impl Post {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let author_id = author_id.into();
        validate_id(&id)?;
        if author_id.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "author_id",
                message: "must not be empty",
            });
        }

        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            created_at,
            updated_at,
        })
    }
}

fn validate_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "id",
            message: "must not be empty",
        });
    }
    Ok(())
}

// stored as sent; only whitespace-only values are rejected
fn require_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "must not be empty",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{CreatePostRequest, DomainError, Post, UpdatePostRequest};

    #[test]
    fn create_post_request_validate_rejects_empty_title() {
        let req = CreatePostRequest {
            title: "   ".to_string(),
            content: "valid content".to_string(),
        };

        let err = req.validate().expect_err("title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn create_post_request_validate_keeps_fields_verbatim() {
        let req = CreatePostRequest {
            title: "  title  ".to_string(),
            content: "    indented\n\nbody\n".to_string(),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.title, "  title  ");
        assert_eq!(validated.content, "    indented\n\nbody\n");
    }

    #[test]
    fn update_post_request_validate_rejects_blank_id() {
        let req = UpdatePostRequest {
            id: " ".to_string(),
            title: Some("title".to_string()),
            content: None,
        };

        let err = req.validate().expect_err("id must be rejected");
        assert_validation_field(err, "id");
    }

    #[test]
    fn update_post_request_validate_rejects_present_but_empty_content() {
        let req = UpdatePostRequest {
            id: "post-1".to_string(),
            title: None,
            content: Some("   ".to_string()),
        };

        let err = req.validate().expect_err("content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn update_post_request_validate_keeps_absent_fields_absent() {
        let req = UpdatePostRequest {
            id: "post-1".to_string(),
            title: Some("  new title ".to_string()),
            content: None,
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.id, "post-1");
        assert_eq!(validated.title.as_deref(), Some("  new title "));
        assert!(validated.content.is_none());
    }

    #[test]
    fn post_new_rejects_blank_author_id() {
        let now = Utc::now();
        let err = Post::new("post-1", "Title", "Content", "", now, now)
            .expect_err("author_id must be present");
        assert_validation_field(err, "author_id");
    }

    #[test]
    fn post_new_rejects_updated_before_created() {
        let updated_at = Utc::now();
        let created_at = updated_at + Duration::seconds(1);

        let err = Post::new("post-1", "Title", "Content", "author-1", created_at, updated_at)
            .expect_err("updated_at < created_at must fail");
        assert_validation_field(err, "updated_at");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
