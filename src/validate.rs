use std::collections::HashMap;

use chrono::DateTime;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::ValidateEmail;

/// Primitive type a declared field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    String,
}

/// Extra constraint checked after the type, on string fields.
#[derive(Debug, Clone, Copy)]
pub enum Refinement {
    Pattern(&'static Regex),
    Email,
    Uuid,
    Timestamp,
}

#[derive(Debug)]
struct Field {
    name: &'static str,
    ty: FieldType,
    refinement: Option<Refinement>,
    required: bool,
}

/// A declared shape: an ordered set of field rules interpreted against an
/// untyped JSON value. Pure data, no I/O.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(Field {
            name,
            ty,
            refinement: None,
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(Field {
            name,
            ty,
            refinement: None,
            required: false,
        });
        self
    }

    /// Attaches a refinement to the most recently declared field.
    pub fn refine(mut self, refinement: Refinement) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.refinement = Some(refinement);
        }
        self
    }

    /// Walks every field in declaration order and collects every violation.
    /// Missing optional fields are simply skipped, never defaulted.
    pub fn check(&self, value: &Value) -> Result<(), Vec<String>> {
        let Some(object) = value.as_object() else {
            return Err(vec![format!(
                "Expected object, received {}",
                json_type_name(value)
            )]);
        };

        let mut messages = Vec::new();
        for field in &self.fields {
            match object.get(field.name) {
                None => {
                    if field.required {
                        messages.push("Required".to_string());
                    }
                }
                Some(found) => {
                    if let Err(message) = check_field(field, found) {
                        messages.push(message);
                    }
                }
            }
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }

    /// Checks the value against the schema, then deserializes it into `T`.
    pub fn parse<T: DeserializeOwned>(&self, value: Value) -> Result<T, Vec<String>> {
        self.check(&value)?;
        serde_json::from_value(value).map_err(|err| vec![err.to_string()])
    }
}

fn check_field(field: &Field, value: &Value) -> Result<(), String> {
    let expected = match field.ty {
        FieldType::Number => "number",
        FieldType::String => "string",
    };
    let matches = match field.ty {
        FieldType::Number => value.is_number(),
        FieldType::String => value.is_string(),
    };
    if !matches {
        return Err(format!(
            "Expected {expected}, received {}",
            json_type_name(value)
        ));
    }

    if let (Some(refinement), Some(text)) = (field.refinement, value.as_str()) {
        check_refinement(refinement, text)?;
    }

    Ok(())
}

fn check_refinement(refinement: Refinement, text: &str) -> Result<(), String> {
    match refinement {
        Refinement::Pattern(pattern) => {
            if !pattern.is_match(text) {
                return Err("Invalid".to_string());
            }
        }
        Refinement::Email => {
            if !text.validate_email() {
                return Err("Invalid email".to_string());
            }
        }
        Refinement::Uuid => {
            if Uuid::parse_str(text).is_err() {
                return Err("Invalid uuid".to_string());
            }
        }
        Refinement::Timestamp => {
            if DateTime::parse_from_rfc3339(text).is_err() {
                return Err("Invalid datetime".to_string());
            }
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses a raw request body into a JSON value. An empty body counts as an
/// empty object; anything unparsable becomes a validation failure rather
/// than a transport-level error.
pub fn parse_body(body: &str) -> Result<Value, Vec<String>> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|_| vec!["Malformed JSON body".to_string()])
}

/// Lifts a flat string-to-string map (query or path parameters) into a JSON
/// object so the same schema engine applies to every input source.
pub fn params_value(params: &HashMap<String, String>) -> Value {
    let object: Map<String, Value> = params
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::LazyLock;

    static LETTERS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new("^[A-Za-z]+$").expect("valid pattern"));

    fn pair_schema() -> Schema {
        Schema::new()
            .required("a", FieldType::Number)
            .required("b", FieldType::Number)
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = pair_schema()
            .check(&json!({"a": "1", "b": 2}))
            .unwrap_err();
        assert_eq!(err, vec!["Expected number, received string"]);
    }

    #[test]
    fn test_every_violation_collected_in_order() {
        let err = pair_schema()
            .check(&json!({"a": true}))
            .unwrap_err();
        assert_eq!(err, vec!["Expected number, received boolean", "Required"]);
    }

    #[test]
    fn test_missing_optional_field_is_skipped() {
        let schema = Schema::new()
            .optional("from", FieldType::String)
            .refine(Refinement::Timestamp);
        assert!(schema.check(&json!({})).is_ok());
    }

    #[test]
    fn test_timestamp_refinement() {
        let schema = Schema::new()
            .optional("from", FieldType::String)
            .refine(Refinement::Timestamp);
        let err = schema.check(&json!({"from": "yesterday"})).unwrap_err();
        assert_eq!(err, vec!["Invalid datetime"]);
        assert!(schema.check(&json!({"from": "2022-01-01T00:00:00Z"})).is_ok());
    }

    #[test]
    fn test_pattern_email_and_uuid_refinements() {
        let schema = Schema::new()
            .required("name", FieldType::String)
            .refine(Refinement::Pattern(&*LETTERS))
            .required("email", FieldType::String)
            .refine(Refinement::Email)
            .required("id", FieldType::String)
            .refine(Refinement::Uuid);

        let err = schema
            .check(&json!({"name": "J0hn", "email": "nope", "id": "123"}))
            .unwrap_err();
        assert_eq!(err, vec!["Invalid", "Invalid email", "Invalid uuid"]);

        assert!(
            schema
                .check(&json!({
                    "name": "John",
                    "email": "john@example.com",
                    "id": "c7b3d8e0-5e0b-4b0f-8b3a-3b9f4b3d3b3d"
                }))
                .is_ok()
        );
    }

    #[test]
    fn test_non_object_input() {
        let err = pair_schema().check(&json!([1, 2])).unwrap_err();
        assert_eq!(err, vec!["Expected object, received array"]);
    }

    #[test]
    fn test_parse_into_typed_value() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Pair {
            a: f64,
            b: f64,
        }
        let pair: Pair = pair_schema().parse(json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(pair, Pair { a: 1.0, b: 2.0 });
    }

    #[test]
    fn test_parse_body_folds_bad_json_into_validation() {
        assert_eq!(
            parse_body("not json").unwrap_err(),
            vec!["Malformed JSON body"]
        );
        assert_eq!(parse_body("").unwrap(), json!({}));
        assert_eq!(parse_body(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_params_value_lifts_string_map() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "abc".to_string());
        assert_eq!(params_value(&params), json!({"id": "abc"}));
    }
}
