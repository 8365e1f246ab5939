use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub seed_data: bool,
    pub database_timeout: Duration,
}

impl AppConfig {

    /// Loads `.env` once and caches the resulting configuration for the
    /// lifetime of the process.
    pub fn global() -> Result<&'static AppConfig, ConfigError> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }

        dotenv().ok();
        let config = AppConfig::from_env()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        Ok(AppConfig {
            database_url,
            database_name: var_or("DATABASE_NAME", "petclinic"),
            server_host: var_or("SERVER_HOST", "127.0.0.1"),
            server_port: parse_var("SERVER_PORT", 8080)?,
            seed_data: parse_bool("SEED_DATA", true)?,
            database_timeout: Duration::from_secs(parse_var("DATABASE_TIMEOUT_SECS", 5)?),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        _ => Ok(default),
    }
}

fn parse_bool(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        Err(_) => Ok(default),
    }
}
