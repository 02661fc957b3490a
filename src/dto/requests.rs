use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

use crate::validate::{FieldType, Refinement, Schema};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z]+$").expect("valid name pattern"));

#[derive(Debug, Deserialize)]
pub struct AddNumbersRequest {
    pub a: f64,
    pub b: f64,
}

pub fn add_numbers_schema() -> Schema {
    Schema::new()
        .required("a", FieldType::Number)
        .required("b", FieldType::Number)
}

/// Optional inclusive bounds on `createdAt`, both RFC 3339 instants.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn date_range_schema() -> Schema {
    Schema::new()
        .optional("from", FieldType::String)
        .refine(Refinement::Timestamp)
        .optional("to", FieldType::String)
        .refine(Refinement::Timestamp)
}

/// Loosely-typed path id for the user relay route.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: String,
}

pub fn user_id_schema() -> Schema {
    Schema::new().required("id", FieldType::String)
}

/// Path id for customer lookup; the uuid refinement runs before serde sees it.
#[derive(Debug, Deserialize)]
pub struct CustomerIdParam {
    pub id: Uuid,
}

pub fn customer_id_schema() -> Schema {
    Schema::new()
        .required("id", FieldType::String)
        .refine(Refinement::Uuid)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub fn create_customer_schema() -> Schema {
    Schema::new()
        .required("firstName", FieldType::String)
        .refine(Refinement::Pattern(&*NAME_PATTERN))
        .required("lastName", FieldType::String)
        .refine(Refinement::Pattern(&*NAME_PATTERN))
        .required("email", FieldType::String)
        .refine(Refinement::Email)
}
