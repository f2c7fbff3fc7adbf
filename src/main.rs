//! PhotoQuest backend binary.

use photoquest::{config::Config, create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting PhotoQuest backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Posting as: {} ({})", config.user_name, config.user_id);

    if !config.seed_fixtures {
        tracing::warn!("Fixture seeding disabled (PHOTOQUEST_SEED_FIXTURES). Starting empty");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);
    {
        let store = state.store.read().await;
        tracing::info!(
            quests = store.quests().len(),
            photos = store.photos().len(),
            users = store.users().len(),
            "Store ready"
        );
    }

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
