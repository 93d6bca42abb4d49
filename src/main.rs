//! ProChallenger - Application Entry Point
//!
//! This is the main entry point for the ProChallenger server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prochallenger::{
    app::build_router,
    config::Config,
    db::{self, MemoryStore, Stores},
    identity::FirebaseVerifier,
    payment::StripeGateway,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.server.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting ProChallenger server...");

    let stores = match config.database.connect.clone() {
        Some(options) => {
            tracing::info!(
                "Connecting to database {}:{}...",
                options.get_host(),
                options.get_port()
            );
            let pool = db::create_pool(options, &config.database).await?;
            db::test_connection(&pool).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool).await?;

            Stores::postgres(pool)
        }
        None => {
            tracing::warn!("No database configured; using the in-memory store (data is lost on exit)");
            Stores::in_memory(MemoryStore::new())
        }
    };

    let payments = StripeGateway::new(&config.payment)?;
    let identity = FirebaseVerifier::new(&config.identity)?;
    let account = &config.identity.service_account;
    tracing::info!(
        "Verifying ID tokens for project {} (service account {})",
        account.project_id,
        account.client_email.as_deref().unwrap_or("unknown")
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state
    let state = AppState::new(stores, Arc::new(payments), Arc::new(identity), config);

    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
