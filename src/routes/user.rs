use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::{
    dto::{IdParam, user_id_schema},
    errors::ApiError,
    state::AppState,
    validate::params_value,
};

/// GET /users/{id}
///
/// Relays the external user-lookup service's JSON body verbatim, with no
/// reshaping. Upstream failures map to 502.
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let params: IdParam = user_id_schema()
        .parse(params_value(&path))
        .map_err(ApiError::Validation)?;

    info!("Relaying user lookup for {}", params.id);

    let url = format!("{}/user", state.user_service_url);
    let response = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Upstream(err.to_string()))?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|err| ApiError::Upstream(err.to_string()))?;

    Ok(Json(body))
}
