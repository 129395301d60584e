//! API-key middleware
//!
//! Every route except the health check requires an `X-API-Key` header whose
//! value matches one of the configured keys. A missing header is 401, an
//! unknown key 403. This is a demonstration gate, not an authentication
//! system: keys are static strings supplied at startup.

use crate::api::response::ApiError;
use crate::api::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

/// Header carrying the client's key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests without a recognized API key
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match key {
        None => Err(ApiError::unauthorized(
            "API key is required. Please provide X-API-Key header.",
        )),
        Some(key) if !state.api_keys.iter().any(|accepted| accepted == key) => {
            Err(ApiError::forbidden("Invalid API key provided."))
        }
        Some(_) => Ok(next.run(request).await),
    }
}
