use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::error::DomainError;

pub(crate) const NOT_LOGGED_IN: &str = "You are not logged in";
pub(crate) const INPUTS_NOT_CORRECT: &str = "Inputs not correct";
pub(crate) const COULD_NOT_UPDATE: &str = "something went wrong, could not update!";
pub(crate) const COULD_NOT_FETCH: &str = "error while fetching the blog post!";
pub(crate) const INTERNAL_ERROR: &str = "internal error";

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("unauthorized")]
    Unauthorized,

    #[error("post update failed")]
    UpdateFailed(#[source] DomainError),

    #[error("post fetch failed")]
    FetchFailed(#[source] DomainError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Domain(DomainError::Validation { .. })
            | AppError::Validation(_)
            | AppError::MalformedBody(_) => (StatusCode::LENGTH_REQUIRED, INPUTS_NOT_CORRECT),
            AppError::Domain(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
            AppError::Unauthorized => (StatusCode::FORBIDDEN, NOT_LOGGED_IN),
            AppError::UpdateFailed(_) => (StatusCode::LENGTH_REQUIRED, COULD_NOT_UPDATE),
            AppError::FetchFailed(_) => (StatusCode::LENGTH_REQUIRED, COULD_NOT_FETCH),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Domain(err) if status.is_server_error() => {
                error!(error = %err, "request failed");
            }
            AppError::UpdateFailed(err) | AppError::FetchFailed(err) => {
                error!(error = %err, reason = message, "blog request failed");
            }
            _ => {}
        }

        if matches!(self, AppError::Unauthorized) {
            return (status, Json(ErrorBody { error: message })).into_response();
        }
        (status, Json(MessageBody { message })).into_response()
    }
}
