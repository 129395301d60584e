//! Shared application state

use crate::core::{EngineConfig, LedgerStore, TransferEngine};
use std::sync::Arc;
use std::time::Instant;

/// State handed to every handler
///
/// The store and engine are shared behind `Arc`s; cloning the state is
/// cheap and happens per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LedgerStore>,
    pub engine: Arc<TransferEngine>,
    /// Accepted values for the `X-API-Key` header
    pub api_keys: Arc<Vec<String>>,
    /// Process start, for the health endpoint's uptime
    pub started_at: Instant,
}

impl AppState {
    /// Assemble state over a store, wiring an engine with the given delays
    pub fn new(store: Arc<LedgerStore>, config: EngineConfig, api_keys: Vec<String>) -> Self {
        let engine = Arc::new(TransferEngine::new(Arc::clone(&store), config));
        Self {
            store,
            engine,
            api_keys: Arc::new(api_keys),
            started_at: Instant::now(),
        }
    }
}
