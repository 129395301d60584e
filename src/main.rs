//! Accounts Service HTTP server
//!
//! Serves the in-memory demo banking API.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bind 0.0.0.0:8080
//! cargo run -- --queue-delay-ms 100 --settle-delay-ms 200
//! cargo run -- --api-key my-key --api-key my-other-key
//! ```
//!
//! The server seeds its ledger at startup and exposes account, transaction,
//! and transfer routes behind an `X-API-Key` header check; `/health` is
//! open. Set `RUST_LOG` to adjust logging (defaults to `info`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (address already in use, bind failure, etc.)

use accounts_service::api::{self, AppState};
use accounts_service::cli::{self, CliArgs};
use accounts_service::core::LedgerStore;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = cli::parse_args();
    if let Err(e) = serve(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Seed the ledger, assemble the router, and serve until shutdown
async fn serve(args: CliArgs) -> std::io::Result<()> {
    let store = Arc::new(LedgerStore::seeded());
    let state = AppState::new(store, args.engine_config(), args.resolved_api_keys());
    let app = api::router(state);

    info!(addr = %args.bind, "accounts service listening");
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await
}
