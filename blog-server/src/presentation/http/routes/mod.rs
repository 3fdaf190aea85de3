use axum::Router;

use crate::presentation::AppState;

pub(crate) mod blogs;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new().nest("/api/v1/blog", blogs::router(state))
}
