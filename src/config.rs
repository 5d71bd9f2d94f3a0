use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    /// Missing required variables abort startup; nothing is deferred to
    /// first use.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self { database_url })
    }
}
