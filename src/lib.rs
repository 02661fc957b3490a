pub mod app;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

pub use app::build_router;
pub use state::AppState;
