use std::sync::Arc;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, PostSummary, UpdatePostRequest};

pub(crate) struct BlogService {
    repo: Arc<dyn PostRepository>,
}

impl BlogService {
    pub(crate) fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(
        &self,
        author_id: &str,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            content: req.content,
            author_id: author_id.to_string(),
        };
        self.repo.create_post(new_post).await
    }

    /// Any authenticated author may update any post; ownership is not checked.
    pub(crate) async fn update_post(&self, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let req = req.validate()?;
        let patch = PostPatch {
            title: req.title,
            content: req.content,
        };
        self.repo
            .update_post(&req.id, patch)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {}", req.id)))
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<PostSummary>, DomainError> {
        self.repo.list_posts().await
    }

    pub(crate) async fn get_post(&self, id: &str) -> Result<Option<PostSummary>, DomainError> {
        self.repo.find_post(id).await
    }
}
