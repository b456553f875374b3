use std::{env, str::FromStr, time::Duration};

use anyhow::Context;

use crate::{
    catalog::{DEFAULT_CATALOG_SEED, DEFAULT_CATALOG_SIZE},
    services::delivery::ChatDelivery,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub catalog_seed: u64,
    pub catalog_size: u32,
    pub chat_delay_ms: u64,
    pub chat_jitter_ms: u64,
    pub chat_failure_rate: f64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        Ok(Self {
            jwt_secret,
            host,
            port: parsed("APP_PORT", 3000),
            catalog_seed: parsed("CATALOG_SEED", DEFAULT_CATALOG_SEED),
            catalog_size: parsed("CATALOG_SIZE", DEFAULT_CATALOG_SIZE),
            chat_delay_ms: parsed("CHAT_DELAY_MS", 500),
            chat_jitter_ms: parsed("CHAT_JITTER_MS", 1000),
            chat_failure_rate: parsed("CHAT_FAILURE_RATE", 0.0_f64).clamp(0.0, 1.0),
        })
    }

    pub fn chat_delivery(&self) -> ChatDelivery {
        ChatDelivery::new(
            Duration::from_millis(self.chat_delay_ms),
            Duration::from_millis(self.chat_jitter_ms),
            self.chat_failure_rate,
        )
    }
}

// Unset or unparsable values fall back to the default.
fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
