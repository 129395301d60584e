use crate::core::EngineConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Demo keys accepted when no --api-key is supplied
const DEFAULT_API_KEYS: [&str; 2] = ["demo-key-local-12345", "demo-key-release-67890"];

/// Serve the in-memory demo banking API
#[derive(Parser, Debug)]
#[command(name = "accounts-service")]
#[command(about = "In-memory demo banking API with asynchronous transfers", long_about = None)]
pub struct CliArgs {
    /// Address the HTTP server binds to
    #[arg(
        long,
        value_name = "ADDR",
        default_value = "127.0.0.1:3000",
        help = "Address and port to bind the HTTP server to"
    )]
    pub bind: SocketAddr,

    /// Delay before a queued transfer starts processing
    #[arg(
        long = "queue-delay-ms",
        value_name = "MS",
        default_value_t = 500,
        help = "Milliseconds a transfer waits in the queue before processing"
    )]
    pub queue_delay_ms: u64,

    /// Further delay before a processing transfer settles
    #[arg(
        long = "settle-delay-ms",
        value_name = "MS",
        default_value_t = 1000,
        help = "Milliseconds a processing transfer waits before settlement"
    )]
    pub settle_delay_ms: u64,

    /// Accepted API keys (repeatable)
    #[arg(
        long = "api-key",
        value_name = "KEY",
        help = "Accepted X-API-Key value; repeat for multiple keys, demo keys when omitted"
    )]
    pub api_keys: Vec<String>,
}

impl CliArgs {
    /// Create an EngineConfig from CLI arguments
    ///
    /// # Returns
    ///
    /// An `EngineConfig` carrying the two completion delays.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            queue_delay: Duration::from_millis(self.queue_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }

    /// The accepted API keys, falling back to the demo keys
    pub fn resolved_api_keys(&self) -> Vec<String> {
        if self.api_keys.is_empty() {
            DEFAULT_API_KEYS.iter().map(|k| k.to_string()).collect()
        } else {
            self.api_keys.clone()
        }
    }
}
