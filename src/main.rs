use tournament_api::{app, config::Config, db, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tournament api server...");

    let config = Config::from_env()?;

    let pool = db::connect(&config).await?;
    tracing::info!("Database connection established.");

    if config.run_migrations {
        db::run_migrations(&pool).await?;
        tracing::info!("Migrations applied.");
    }

    let addr = config.addr();
    let app = app(AppState {
        pool,
        season_id: config.current_season_id,
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
