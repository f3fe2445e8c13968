//! Configuration management for BibSync server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database connection settings, held component-wise so the connection
/// URL can be assembled from the standard POSTGRES_* variables.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Connection URL for the configured database
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Remote search API client settings. The retry defaults match the
/// public rate limiter's pacing.
#[derive(Debug, Deserialize, Clone)]
pub struct ScholarApiConfig {
    pub base_url: String,
    pub max_retries: u32,
    pub initial_delay_secs: f64,
    pub backoff_factor: f64,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub scholar: ScholarApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BIBSYNC_)
            .add_source(
                Environment::with_prefix("BIBSYNC")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database settings from POSTGRES_* env vars if present
            .set_override_option("database.host", env::var("POSTGRES_HOST").ok())?
            .set_override_option("database.port", env::var("POSTGRES_PORT").ok())?
            .set_override_option("database.name", env::var("POSTGRES_DB").ok())?
            .set_override_option("database.user", env::var("POSTGRES_USER").ok())?
            .set_override_option("database.password", env::var("POSTGRES_PASSWORD").ok())?
            // Override client retry settings from SCHOLAR_API_* env vars if present
            .set_override_option("scholar.base_url", env::var("SCHOLAR_API_BASE_URL").ok())?
            .set_override_option("scholar.max_retries", env::var("SCHOLAR_API_MAX_RETRIES").ok())?
            .set_override_option(
                "scholar.initial_delay_secs",
                env::var("SCHOLAR_API_INITIAL_DELAY").ok(),
            )?
            .set_override_option(
                "scholar.backoff_factor",
                env::var("SCHOLAR_API_BACKOFF_FACTOR").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "papers".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            max_connections: 10,
            min_connections: 2,
        }
    }
}

impl Default for ScholarApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.semanticscholar.org/graph/v1".to_string(),
            max_retries: 6,
            initial_delay_secs: 2.0,
            backoff_factor: 3.0,
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
