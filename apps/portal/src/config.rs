use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the shell runs out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the session/theme snapshot file lives. Unset means state is
    /// held in memory only and forgotten on exit.
    pub state_path: Option<PathBuf>,
    /// Artificial latency of the simulated sign-in call, in milliseconds.
    pub login_delay_ms: u64,
    /// Artificial latency of the simulated page-content load, in milliseconds.
    pub load_delay_ms: u64,
    /// When set, any stored session is cleared at startup (a forced logout).
    pub reset: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            state_path: std::env::var("PORTAL_STATE_PATH").ok().map(PathBuf::from),
            login_delay_ms: env_u64("PORTAL_LOGIN_DELAY_MS", 1500)?,
            load_delay_ms: env_u64("PORTAL_LOAD_DELAY_MS", 500)?,
            reset: std::env::var("PORTAL_RESET").map(|v| v == "1").unwrap_or(false),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("'{key}' must be a non-negative integer")),
        Err(_) => Ok(default),
    }
}
