mod config;
mod error;
mod joiner;
mod resolver;
mod routes;
mod state;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use config::Config;
use pokedex_db::postgres::PgCatalog;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_api=info".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    info!(port = config.port, "Starting pokedex-api");

    // Connect to the document store
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    pokedex_db::migrate::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    // One store handle for both collections, shared by every request
    let catalog = Arc::new(PgCatalog::new(pool));
    let state = AppState {
        pokemon: catalog.clone(),
        moves: catalog,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}
