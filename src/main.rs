use std::sync::Arc;

use tracing::info;

use customer_api::config::{AppConfig, StoreBackend};
use customer_api::models::seed_posts;
use customer_api::store::{CustomerStore, DynamoStore, MemoryStore};
use customer_api::{AppState, build_router};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // The backend is chosen once here; request handlers never branch on
    // the environment.
    let store: Arc<dyn CustomerStore> = match config.store_backend {
        StoreBackend::Dynamo => Arc::new(DynamoStore::connect(&config.store).await),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    let state = AppState::new(seed_posts(), store, config.user_service_url.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind server address");

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  POST   /posts            - Add two numbers");
    info!("  GET    /posts            - List posts (from/to filter)");
    info!("  GET    /users/:id        - Relay user lookup");
    info!("  POST   /customers        - Create customer");
    info!("  GET    /customers        - List customers");
    info!("  GET    /customers/:id    - Get customer by id");

    axum::serve(listener, app)
        .await
        .expect("server error");
}
