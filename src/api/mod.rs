//! HTTP API module
//!
//! Thin transport layer over the core: route registration, the API-key
//! gate, and the JSON envelopes. Handlers translate typed core failures
//! into status codes and never contain business rules themselves.
//!
//! # Components
//!
//! - `state` - Shared application state (store, engine, accepted keys)
//! - `auth` - `X-API-Key` middleware
//! - `response` - Success and error envelopes
//! - `accounts` / `transactions` / `transfers` - Route handlers

pub mod auth;
pub mod response;
pub mod state;

mod accounts;
mod transactions;
mod transfers;

pub use state::AppState;

use crate::api::response::ApiError;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the service router
///
/// All routes except `/health` sit behind the API-key middleware. The
/// fallback answers unmatched paths with the JSON error envelope.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Account routes
        .route("/accounts", get(accounts::list))
        .route("/accounts/:id", get(accounts::get))
        .route("/accounts/:id/balance", get(accounts::balance))
        .route("/accounts/:id/transactions", get(accounts::transactions))
        .route("/accounts/:id/statement", get(accounts::statement))
        // Transaction routes
        .route("/transactions/:id", get(transactions::get))
        // Transfer routes
        .route("/transfers", post(transfers::create))
        .route("/transfers/:id/status", get(transfers::status))
        // The key check wraps only the routes above; /health stays open
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness endpoint, exempt from the API-key gate
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "Accounts Service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

/// JSON 404 for unmatched routes
async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} {} not found.", method, uri.path()))
}
