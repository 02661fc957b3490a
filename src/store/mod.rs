//! Customer persistence.
//!
//! `CustomerStore` implementations:
//! - DynamoDB (`DynamoStore`), the production backend
//! - In-memory (`MemoryStore`), for local runs and tests

mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Customer;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),
    #[error("malformed item: {0}")]
    Malformed(String),
}

/// The minimal contract the handlers need from the key-value table keyed by
/// customer id. Implementations do not log and do not retry; failures
/// surface as `StoreError` for the caller to map.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Inserts or overwrites the record at `customer.id`. No conditional
    /// create: a put at an existing key replaces it.
    async fn put(&self, customer: &Customer) -> Result<(), StoreError>;

    /// Fetches one record. `Ok(None)` is the explicit absent signal,
    /// distinct from a storage failure.
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, StoreError>;

    /// Returns every record in the table in the store's native order.
    /// Callers must not assume any particular ordering.
    async fn scan(&self) -> Result<Vec<Customer>, StoreError>;
}
