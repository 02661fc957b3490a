use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use uuid::Uuid;

use super::{CustomerStore, StoreError};
use crate::config::StoreConfig;
use crate::models::Customer;

/// DynamoDB-backed customer table. Holds the table name and a client built
/// once at startup from an explicit `StoreConfig`.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Builds the SDK client from the resolved configuration. The endpoint
    /// override points at a local DynamoDB when set.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self {
            client: Client::new(&sdk_config),
            table_name: config.table_name.clone(),
        }
    }
}

fn to_item(customer: &Customer) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "id".to_string(),
        AttributeValue::S(customer.id.to_string()),
    );
    item.insert(
        "firstName".to_string(),
        AttributeValue::S(customer.first_name.clone()),
    );
    item.insert(
        "lastName".to_string(),
        AttributeValue::S(customer.last_name.clone()),
    );
    item.insert(
        "email".to_string(),
        AttributeValue::S(customer.email.clone()),
    );
    item
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Customer, StoreError> {
    let string_attr = |name: &str| -> Result<String, StoreError> {
        item.get(name)
            .and_then(|value| value.as_s().ok())
            .cloned()
            .ok_or_else(|| StoreError::Malformed(format!("missing string attribute `{name}`")))
    };

    let id = Uuid::parse_str(&string_attr("id")?)
        .map_err(|err| StoreError::Malformed(format!("bad id attribute: {err}")))?;

    Ok(Customer {
        id,
        first_name: string_attr("firstName")?,
        last_name: string_attr("lastName")?,
        email: string_attr("email")?,
    })
}

#[async_trait]
impl CustomerStore for DynamoStore {
    async fn put(&self, customer: &Customer) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(customer)))
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;

        match output.item() {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn scan(&self) -> Result<Vec<Customer>, StoreError> {
        // Single page only: continuation tokens are not followed, so tables
        // larger than one scan page are not fully enumerated.
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;

        output.items().iter().map(from_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            id: Uuid::new_v4(),
            first_name: "John".to_string(),
            last_name: "Maverick".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[test]
    fn test_item_round_trip() {
        let customer = sample_customer();
        let restored = from_item(&to_item(&customer)).unwrap();
        assert_eq!(restored, customer);
    }

    #[test]
    fn test_from_item_rejects_missing_attribute() {
        let mut item = to_item(&sample_customer());
        item.remove("email");
        let err = from_item(&item).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_from_item_rejects_non_uuid_id() {
        let mut item = to_item(&sample_customer());
        item.insert("id".to_string(), AttributeValue::S("not-a-uuid".to_string()));
        assert!(matches!(
            from_item(&item),
            Err(StoreError::Malformed(_))
        ));
    }
}
