use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, PostSummary, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};
use crate::presentation::http::extract::ValidatedJson;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateBlogDto {
    #[validate(length(min = 1))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UpdateBlogDto {
    #[validate(length(min = 1))]
    pub(crate) id: String,
    #[validate(length(min = 1))]
    pub(crate) title: Option<String>,
    #[validate(length(min = 1))]
    pub(crate) content: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogIdDto {
    pub(crate) id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorDto {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogDto {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: AuthorDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogListDto {
    pub(crate) blogs: Vec<BlogDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogResponseDto {
    pub(crate) blog: Option<BlogDto>,
}

impl From<PostSummary> for BlogDto {
    fn from(post: PostSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: AuthorDto {
                name: post.author.name,
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/blog",
    tag = "blog",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateBlogDto,
    responses(
        (status = 200, description = "Post created", body = BlogIdDto),
        (status = 403, description = "Not logged in"),
        (status = 411, description = "Inputs not correct"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<CreateBlogDto>,
) -> AppResult<Json<BlogIdDto>> {
    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
    };

    let post = state.blog_service.create_post(&auth.user_id, req).await?;
    Ok(Json(BlogIdDto { id: post.id }))
}

#[utoipa::path(
    put,
    path = "/api/v1/blog",
    tag = "blog",
    security(
        ("bearer_auth" = [])
    ),
    request_body = UpdateBlogDto,
    responses(
        (status = 200, description = "Post updated, id echoed from the request", body = BlogIdDto),
        (status = 403, description = "Not logged in"),
        (status = 411, description = "Inputs not correct, or the update failed")
    )
)]
pub(crate) async fn update_blog(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateBlogDto>,
) -> AppResult<Json<BlogIdDto>> {
    let id = dto.id.clone();
    let req = UpdatePostRequest {
        id: dto.id,
        title: dto.title,
        content: dto.content,
    };

    state
        .blog_service
        .update_post(req)
        .await
        .map_err(|err| match err {
            DomainError::Validation { .. } => AppError::Domain(err),
            other => AppError::UpdateFailed(other),
        })?;

    Ok(Json(BlogIdDto { id }))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/bulk",
    tag = "blog",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All posts", body = BlogListDto),
        (status = 403, description = "Not logged in"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<BlogListDto>> {
    let posts = state.blog_service.list_posts().await?;

    Ok(Json(BlogListDto {
        blogs: posts.into_iter().map(BlogDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/{id}",
    tag = "blog",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post, or null when no post has this id", body = BlogResponseDto),
        (status = 403, description = "Not logged in"),
        (status = 411, description = "Error while fetching the post")
    )
)]
pub(crate) async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogResponseDto>> {
    let blog = state
        .blog_service
        .get_post(&id)
        .await
        .map_err(AppError::FetchFailed)?;

    Ok(Json(BlogResponseDto {
        blog: blog.map(BlogDto::from),
    }))
}
