use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    dto::{CreateCustomerRequest, CustomerIdParam, create_customer_schema, customer_id_schema},
    errors::ApiError,
    models::Customer,
    state::AppState,
    validate::{params_value, parse_body},
};

/// POST /customers
/// Body: { "firstName": "...", "lastName": "...", "email": "..." }
///
/// The id is always a fresh v4 uuid; a client-supplied id is never used.
pub async fn create_customer(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let value = parse_body(&body).map_err(ApiError::Validation)?;
    let payload: CreateCustomerRequest = create_customer_schema()
        .parse(value)
        .map_err(ApiError::Validation)?;

    let customer = Customer {
        id: Uuid::new_v4(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
    };

    state.store.put(&customer).await?;

    info!("Customer created: {}", customer.id);

    Ok(Json(serde_json::json!({})))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(path): Path<HashMap<String, String>>,
) -> Result<Json<Customer>, ApiError> {
    let params: CustomerIdParam = customer_id_schema()
        .parse(params_value(&path))
        .map_err(ApiError::Validation)?;

    match state.store.get(params.id).await? {
        Some(customer) => Ok(Json(customer)),
        None => Err(ApiError::NotFound("Customer not found")),
    }
}

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.store.scan().await?;
    Ok(Json(customers))
}
