use std::time::Duration;

use axum::{BoxError, Json, Router, error_handling::HandleErrorLayer, http::StatusCode};
use serde::Serialize;
use tower::ServiceBuilder;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::error::Elapsed;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::error;

use crate::infrastructure::settings::HttpSettings;

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

pub(crate) fn apply_limits(router: Router, settings: &HttpSettings) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(settings.request_body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(ConcurrencyLimitLayer::new(settings.concurrency_limit))
                .timeout(Duration::from_secs(settings.request_timeout_secs)),
        )
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<MessageBody>) {
    if err.is::<Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(MessageBody {
                message: "request timed out",
            }),
        );
    }

    error!(error = %err, "unhandled middleware error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody {
            message: "internal error",
        }),
    )
}
