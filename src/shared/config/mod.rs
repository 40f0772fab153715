//! Application configuration module
//!
//! Provides the configuration types for the server. Values are assembled with
//! [`AppConfig::builder`]; reading them from the process environment lives in
//! `backend::server::config`.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default deadline applied to every credential/product store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Work-factor bounds accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Shared HMAC secret used to sign and verify bearer tokens.
///
/// Immutable once constructed. The value is never printed by `Debug`.
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    /// Wrap a secret, rejecting empty or whitespace-only values
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        Ok(Self(secret))
    }

    /// Raw key bytes for the HMAC primitives
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used by the token issuer and verifier
    pub jwt_secret: SigningSecret,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Deadline for each store call
    pub store_timeout: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "STORE_TIMEOUT_SECS",
                message: "must be greater than zero".to_string(),
            });
        }
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(ConfigError::InvalidUrl(redact_url(url)));
            }
        }
        Ok(())
    }
}

/// Replace the `user:password@` part of a URL with `***@`
///
/// Used wherever a DSN may end up in a log line or error message.
pub fn redact_url(url: &str) -> String {
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, url),
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let redacted = match rest[..authority_end].rfind('@') {
        Some(at) => format!("***{}", &rest[at..]),
        None => rest.to_string(),
    };
    match scheme {
        Some(scheme) => format!("{}://{}", scheme, redacted),
        None => redacted,
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    store_timeout: Option<Duration>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
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

    /// Set the per-call store deadline
    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    ///
    /// A missing or blank signing secret is an error; everything else has a default.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let secret = self
            .jwt_secret
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let config = AppConfig {
            jwt_secret: SigningSecret::new(secret)?,
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            store_timeout: self.store_timeout.unwrap_or(DEFAULT_STORE_TIMEOUT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
