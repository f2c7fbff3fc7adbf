//! PhotoQuest backend
//!
//! An in-memory quest, photo feed and leaderboard service. All state lives in a single
//! [`DomainStore`] and resets on restart.

pub mod api;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod picker;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use store::DomainStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<DomainStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the store the configuration asks for.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_fixtures {
            DomainStore::with_fixtures(config.author())
        } else {
            DomainStore::empty(config.author())
        };

        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Datastore
        .route("/datastore", get(api::get_datastore))
        .route("/datastore/revision", get(api::get_revision))
        // Quests
        .route("/quests", get(api::list_quests))
        .route("/quests/{id}", get(api::get_quest))
        .route("/quests/{id}/complete", post(api::complete_quest))
        // Photos and feed
        .route("/photos", get(api::list_photos).post(api::create_photo))
        .route("/feed", get(api::get_feed))
        .route("/feed/quests", get(api::list_feed_quests))
        // Users
        .route("/users", get(api::list_users))
        .route("/leaderboard", get(api::get_leaderboard));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
