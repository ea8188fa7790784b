//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Link back to the main application shown in the page header.
    pub home_url: String,
    /// ZeroMQ endpoint of the query service, e.g. `tcp://127.0.0.1:5560`.
    pub query_service_url: String,
    /// Round-trip timeout; `0` waits forever.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_query_timeout_ms() -> u64 {
    5_000
}

impl ServerConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
