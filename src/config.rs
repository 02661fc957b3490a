use std::env;

use tracing::warn;

/// Connection settings for the DynamoDB backend, resolved once at startup.
/// Request handlers never branch on the environment themselves.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub table_name: String,
    pub region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: env::var("CUSTOMERS_TABLE_NAME").unwrap_or_else(|_| "Customer".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Dynamo,
    Memory,
}

impl StoreBackend {
    /// Unrecognized values fall back to DynamoDB, with a warning so a typo
    /// is visible at startup.
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("memory") => StoreBackend::Memory,
            Some("dynamo") | None => StoreBackend::Dynamo,
            Some(other) => {
                warn!("Unrecognized STORE_BACKEND `{}`, using DynamoDB", other);
                StoreBackend::Dynamo
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Base URL of the external user-lookup service.
    pub user_service_url: String,
    pub store_backend: StoreBackend,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend_var = env::var("STORE_BACKEND").ok();
        let store_backend = StoreBackend::from_env_value(backend_var.as_deref());

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            user_service_url: env::var("USER_SERVICE_URL")
                .unwrap_or_else(|_| "https://example.com".to_string()),
            store_backend,
            store: StoreConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        assert_eq!(
            StoreBackend::from_env_value(Some("memory")),
            StoreBackend::Memory
        );
        assert_eq!(
            StoreBackend::from_env_value(Some("dynamo")),
            StoreBackend::Dynamo
        );
        assert_eq!(StoreBackend::from_env_value(None), StoreBackend::Dynamo);
    }

    #[test]
    fn test_unrecognized_backend_falls_back_to_dynamo() {
        assert_eq!(
            StoreBackend::from_env_value(Some("memroy")),
            StoreBackend::Dynamo
        );
    }
}
