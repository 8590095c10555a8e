/// Server configuration.
///
/// Defaults for the HTTP/WebSocket listener, overridable through the environment.
use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Host to bind, from `POLICY_GRID_HOST` or the default.
pub fn bind_host() -> String {
    env::var("POLICY_GRID_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

/// Port to bind, from `POLICY_GRID_PORT` or the default when unset or unparsable.
pub fn bind_port() -> u16 {
    env::var("POLICY_GRID_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// A game nobody connected to within this delay is stopped.
pub const ORPHAN_SESSION_TIMEOUT: Duration = Duration::from_secs(30);
