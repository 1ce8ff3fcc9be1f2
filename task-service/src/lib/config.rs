use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    /// Access token lifetime as `<n>[dhm]`, e.g. "15m"
    pub access_token_expiry: String,
    /// Refresh token lifetime as `<n>[dhm]`, e.g. "7d"
    pub refresh_token_expiry: String,
}

/// Insecure placeholder secrets used when nothing is configured.
pub const DEFAULT_ACCESS_SECRET: &str = "default-access-secret";
pub const DEFAULT_REFRESH_SECRET: &str = "default-refresh-secret";

impl AuthConfig {
    /// True when either signing secret is still a placeholder default.
    pub fn uses_placeholder_secrets(&self) -> bool {
        self.access_token_secret == DEFAULT_ACCESS_SECRET
            || self.refresh_token_secret == DEFAULT_REFRESH_SECRET
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat environment variables (ACCESS_TOKEN_SECRET, REFRESH_TOKEN_EXPIRY, ...)
    /// 2. Nested environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults (insecure placeholders, 15m/7d windows, port 5000)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 5000)?
            .set_default("auth.access_token_secret", DEFAULT_ACCESS_SECRET)?
            .set_default("auth.refresh_token_secret", DEFAULT_REFRESH_SECRET)?
            .set_default("auth.access_token_expiry", "15m")?
            .set_default("auth.refresh_token_expiry", "7d")?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let mut config: Config = configuration.try_deserialize()?;

        // Flat names used by existing deployments take precedence
        if let Ok(value) = env::var("ACCESS_TOKEN_SECRET") {
            config.auth.access_token_secret = value;
        }
        if let Ok(value) = env::var("REFRESH_TOKEN_SECRET") {
            config.auth.refresh_token_secret = value;
        }
        if let Ok(value) = env::var("ACCESS_TOKEN_EXPIRY") {
            config.auth.access_token_expiry = value;
        }
        if let Ok(value) = env::var("REFRESH_TOKEN_EXPIRY") {
            config.auth.refresh_token_expiry = value;
        }

        Ok(config)
    }
}
