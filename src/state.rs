use std::sync::Arc;

use crate::models::Post;
use crate::store::CustomerStore;

/// Shared across all requests. The post list is read-only after startup; the
/// store is the only mutable resource and handles its own synchronization.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<Vec<Post>>,
    pub store: Arc<dyn CustomerStore>,
    pub http: reqwest::Client,
    pub user_service_url: String,
}

impl AppState {
    pub fn new(posts: Vec<Post>, store: Arc<dyn CustomerStore>, user_service_url: String) -> Self {
        Self {
            posts: Arc::new(posts),
            store,
            http: reqwest::Client::new(),
            user_service_url,
        }
    }
}
