use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostSummary};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
}

/// `None` leaves the stored column untouched.
#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    /// Returns `None` when no post has the given id.
    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self) -> Result<Vec<PostSummary>, DomainError>;
    async fn find_post(&self, id: &str) -> Result<Option<PostSummary>, DomainError>;
}
