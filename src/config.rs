use anyhow::Context;

/// Runtime configuration. `database_url` and `database_name` are optional on
/// purpose: running without a store is a legitimate degraded state, not a
/// startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env_opt("DATABASE_URL"),
            database_name: env_opt("DATABASE_NAME"),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    /// Database name to open when a store is configured.
    pub fn resolved_database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or("clothing_brand")
    }
}

/// Treats unset and empty environment variables the same way.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
