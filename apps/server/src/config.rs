use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use metalpulse_core::constants::{DEFAULT_CACHE_TTL, DEFAULT_FETCH_TIMEOUT};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("MP_LISTEN_ADDR", "0.0.0.0:5000")
            .parse()
            .context("Invalid MP_LISTEN_ADDR")?;
        let cors_allow = env_or("MP_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms = env_u64(
            "MP_REQUEST_TIMEOUT_MS",
            DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
        )?;
        let fetch_timeout_ms =
            env_u64("MP_FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT.as_millis() as u64)?;
        let cache_ttl_secs = env_u64("MP_CACHE_TTL_SECS", DEFAULT_CACHE_TTL.as_secs())?;
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_allow: vec!["*".to_string()],
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}
