use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{CustomerStore, StoreError};
use crate::models::Customer;

/// In-memory customer table for local runs and tests. Nothing is persisted;
/// the same put/get/scan contract as the DynamoDB backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<Uuid, Customer>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn put(&self, customer: &Customer) -> Result<(), StoreError> {
        self.records.insert(customer.id, customer.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn scan(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
