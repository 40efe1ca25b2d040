use siidona_core::config::{flag_or_in, optional_in, parsed_or_in, required_in};
use siidona_core::tracing::LogFormat;
use siidona_session::cookie::CookieSettings;

const DEFAULT_PORT: u16 = 3114;

/// Market service configuration loaded from environment variables.
#[derive(Debug)]
pub struct MarketConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Redis URL for the session token store. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `MARKET_PORT`.
    pub market_port: u16,
    /// Env vars: `COOKIE_DOMAIN` (optional), `COOKIE_SECURE` (default true).
    pub cookie: CookieSettings,
    /// Env var: `LOG_FORMAT` (`json` or `pretty`, default json).
    pub log_format: LogFormat,
}

impl MarketConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required_in(&lookup, "DATABASE_URL")?,
            redis_url: required_in(&lookup, "REDIS_URL")?,
            market_port: parsed_or_in(&lookup, "MARKET_PORT", DEFAULT_PORT)?,
            cookie: CookieSettings {
                domain: optional_in(&lookup, "COOKIE_DOMAIN"),
                secure: flag_or_in(&lookup, "COOKIE_SECURE", true)?,
            },
            log_format: parsed_or_in(&lookup, "LOG_FORMAT", LogFormat::default())?,
        })
    }
}

/// Seed tool configuration: the administrator account to ensure.
#[derive(Debug)]
pub struct SeedConfig {
    pub database_url: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl SeedConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required_in(&lookup, "DATABASE_URL")?,
            admin_name: optional_in(&lookup, "ADMIN_NAME").unwrap_or_else(|| "Admin".to_owned()),
            admin_email: required_in(&lookup, "ADMIN_EMAIL")?,
            admin_password: required_in(&lookup, "ADMIN_PASSWORD")?,
        })
    }
}
