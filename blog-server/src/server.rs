use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::blog_service::BlogService;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::infrastructure::database::{create_pool, run_migrations};
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::settings::Settings;
use crate::presentation::AppState;
use crate::presentation::http::middleware::cors::apply_cors;
use crate::presentation::http::middleware::limits::apply_limits;
use crate::presentation::http::middleware::trace::apply_trace;
use crate::presentation::http::router;

pub(crate) async fn run(settings: Settings) -> Result<()> {
    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    run_migrations(&pool).await?;

    let repo = Arc::new(PostgresPostRepository::new(pool));
    let blog_service = Arc::new(BlogService::new(repo));
    let jwt = Arc::new(JwtService::new(&settings.jwt.secret, settings.jwt.ttl_seconds));
    let state = AppState::new(blog_service, jwt);

    run_http(&settings, state).await
}

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> Result<()> {
    let app = build_app(settings, state)?;

    let listener = TcpListener::bind(&settings.http.addr).await?;

    info!("HTTP server listening on {}", settings.http.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

pub(crate) fn build_app(settings: &Settings, state: AppState) -> Result<Router> {
    let app = router(state);
    let app = apply_limits(app, &settings.http);
    let app = apply_trace(app);
    apply_cors(app, &settings.http.cors_origins)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
