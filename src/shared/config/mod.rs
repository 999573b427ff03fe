//! Application configuration module
//!
//! Provides the process configuration: the token signing secret, the
//! database connection string, the listen port and the password work factor.
//! Values come from the environment (optionally seeded from a `.env` file by
//! the binary) or are set directly through [`AppConfigBuilder`].

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Application configuration
#[derive(Clone, Default)]
pub struct AppConfig {
    /// Token signing secret. May be empty; token issuance then fails.
    pub secret: String,
    /// Postgres connection string
    pub database_url: String,
    /// Listen port
    pub port: u16,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read configuration from environment variables
    ///
    /// - `SECRET` - signing secret (optional, empty when unset)
    /// - `DATABASE_URL` - required
    /// - `SERVER_PORT` - optional, defaults to 3000
    /// - `BCRYPT_COST` - optional, defaults to 12
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        match std::env::var("SECRET") {
            Ok(secret) => builder = builder.secret(secret),
            Err(_) => tracing::warn!("SECRET not set. Token issuance will fail until it is configured."),
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { name: "SERVER_PORT", value: port })?;
            builder = builder.port(port);
        }

        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber { name: "BCRYPT_COST", value: cost })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        // bcrypt only accepts costs in 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidNumber {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            secret: self.secret.unwrap_or_default(),
            database_url: self.database_url.ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
