use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, FixedOffset};

use crate::{
    dto::{AddNumbersRequest, DateRangeParams, SumResponse, add_numbers_schema, date_range_schema},
    errors::ApiError,
    models::Post,
    state::AppState,
    validate::{params_value, parse_body},
};

/// POST /posts
/// Body: { "a": 1, "b": 2 }
pub async fn add_numbers(body: String) -> Result<Json<SumResponse>, ApiError> {
    let value = parse_body(&body).map_err(ApiError::Validation)?;
    let payload: AddNumbersRequest = add_numbers_schema()
        .parse(value)
        .map_err(ApiError::Validation)?;

    Ok(Json(SumResponse {
        result: payload.a + payload.b,
    }))
}

/// GET /posts?from=2022-01-01T00:00:00Z&to=2024-01-01T00:00:00Z
///
/// Bounds are inclusive; a missing bound leaves that side unbounded.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let params: DateRangeParams = date_range_schema()
        .parse(params_value(&query))
        .map_err(ApiError::Validation)?;

    // Both bounds passed the Timestamp refinement.
    let from = params.from.as_deref().and_then(parse_instant);
    let to = params.to.as_deref().and_then(parse_instant);

    let filtered = state
        .posts
        .iter()
        .filter(|post| in_range(post, from, to))
        .cloned()
        .collect();

    Ok(Json(filtered))
}

/// Comparison is by instant value, not string order, so formatting variance
/// in `createdAt` cannot change the result. A post whose timestamp does not
/// parse is excluded.
fn in_range(post: &Post, from: Option<DateTime<FixedOffset>>, to: Option<DateTime<FixedOffset>>) -> bool {
    let Some(created_at) = parse_instant(&post.created_at) else {
        return false;
    };
    if let Some(from) = from {
        if created_at < from {
            return false;
        }
    }
    if let Some(to) = to {
        if created_at > to {
            return false;
        }
    }
    true
}

fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}
