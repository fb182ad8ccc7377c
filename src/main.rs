//! AlgoPrep - Application Entry Point
//!
//! This is the main entry point for the AlgoPrep backend server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algoprep::{
    config::CONFIG,
    constants::API_BASE_PATH,
    handlers,
    middleware::logging_middleware,
    providers::{GeminiProvider, HttpJudgeApi, OpenAiProvider, TextProvider},
    state::AppState,
    store::{FirebaseIdentity, FirestoreStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AlgoPrep server...");

    // Persistence collaborators
    let store = Arc::new(FirestoreStore::new(&CONFIG.firebase)?);
    let identity = Arc::new(FirebaseIdentity::new(&CONFIG.firebase)?);

    // Remote judge
    let judge = Arc::new(HttpJudgeApi::new(CONFIG.judge.clone())?);
    if CONFIG.judge.has_authenticated_host() {
        tracing::info!("Judge: authenticated host configured, using submit/poll path");
    } else {
        tracing::info!(
            url = %CONFIG.judge.public_url,
            "Judge: no credentials, using public endpoint with wait=true"
        );
    }

    // Assistant provider chain, in fallback-priority order
    let mut text_providers: Vec<Arc<dyn TextProvider>> = Vec::new();
    if let Some(key) = &CONFIG.assistant.openai_api_key {
        if let Some(provider) =
            OpenAiProvider::new(key.clone(), CONFIG.assistant.openai_model.clone())
        {
            text_providers.push(Arc::new(provider));
        }
    }
    if let Some(key) = &CONFIG.assistant.gemini_api_key {
        if let Some(provider) =
            GeminiProvider::new(key.clone(), CONFIG.assistant.gemini_model.clone())
        {
            text_providers.push(Arc::new(provider));
        }
    }
    tracing::info!(
        remote_providers = text_providers.len(),
        "Assistant chain ready (local fallback always available)"
    );

    // Create application state
    let state = AppState::new(store, identity, judge, text_providers, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
