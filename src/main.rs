use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transport_journal::config::Config;
use transport_journal::db::{PgTransportRepository, TransportRepository};
use transport_journal::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transport_journal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing connection settings abort startup
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting transport journal server");
    tracing::info!(
        table_cache_ttl = config.table_cache_ttl,
        table_row_limit = config.table_row_limit,
        "Configuration loaded successfully"
    );

    tracing::info!("Connecting to database...");
    let db_pool = transport_journal::db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let repo: Arc<dyn TransportRepository> = Arc::new(PgTransportRepository::new(db_pool));
    let state = Arc::new(AppState::new(
        repo,
        config.table_cache_ttl,
        config.table_row_limit,
        config.session_idle_timeout,
    ));

    let app = transport_journal::routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
