use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::http::handlers::blogs::{create_blog, get_blog, list_blogs, update_blog};
use crate::presentation::http::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_blog).put(update_blog))
        .route("/bulk", get(list_blogs))
        .route("/{id}", get(get_blog))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
