//! BibSync Server - Bibliographic Record Synchronization
//!
//! REST API server that mirrors papers from the Semantic Scholar catalog
//! into Postgres and answers search and lookup queries.

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibsync_server::{
    api,
    config::AppConfig,
    repository::Repository,
    scholar::ScholarApiClient,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bibsync_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BibSync Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Create repository and make sure the schema exists
    let repository = Repository::new(pool);
    repository
        .papers
        .init_schema()
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database schema ready");

    // Remote catalog client
    let fetcher = ScholarApiClient::new(&config.scholar)
        .expect("Failed to create remote catalog client");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let services = Services::new(repository, Arc::new(fetcher));

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Papers
        .route("/papers", get(api::papers::local_search))
        .route("/papers/search", get(api::papers::sync_search))
        .route("/papers/external-id/:sha", get(api::papers::get_paper_by_external_id))
        .route("/papers/:corpus_id", get(api::papers::get_paper))
        .route("/papers/:corpus_id/authors", get(api::papers::get_authors))
        .route("/papers/:corpus_id/external-ids", get(api::papers::get_external_ids))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
