use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted customer record. The id is always generated server-side; the
/// store keyed by it is the sole source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
