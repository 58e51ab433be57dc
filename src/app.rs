use std::{panic, process, sync::Arc};

use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::error::AppError;
use crate::repos::access_token_repo::PgAccessTokenRepo;
use crate::repos::resource_server_repo::PgResourceServerRepo;
use crate::services::auth::verifier::TokenVerifier;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,tokeninfo=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice immediately.
        // In production, prefer the default behavior (stderr) and let the server keep running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting tokeninfo endpoint in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to bind listener");
            AppError::Internal
        })?;
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!(error = %e, "server error");
        AppError::Internal
    })?;

    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState, AppError> {
    // Both lookup collaborators read from the authorization server's database.
    // The verifier only sees them through the store traits, so any backend
    // satisfying find-by-key / find-by-token can be swapped in.
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to database");
            AppError::Internal
        })?;

    let resource_servers = Arc::new(PgResourceServerRepo::new(pool.clone()));
    let access_tokens = Arc::new(PgAccessTokenRepo::new(pool));

    let verifier = Arc::new(TokenVerifier::new(resource_servers, access_tokens));

    Ok(AppState::new(verifier))
}

pub fn build_router(state: AppState) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    Router::new()
        .route("/health", get(health))
        .nest("/v1", api::v1::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
