use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{
    customer::{create_customer, get_customer, list_customers},
    health::health_check,
    post::{add_numbers, list_posts},
    user::get_user,
};
use crate::state::AppState;

/// Builds the full router. Separated from `main` so integration tests can
/// drive it directly without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/posts", post(add_numbers).get(list_posts))
        .route("/users/{id}", get(get_user))
        .route("/customers", post(create_customer).get(list_customers))
        .route("/customers/{id}", get(get_customer))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
