use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 6001;
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_HEALTH_PREFIX: &str = "/health";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("HEALTH_PREFIX must name a path segment, got {0:?}")]
    EmptyHealthPrefix(String),
}

/// # Process Configuration
///
/// Read once at startup and shared with handlers through `web::Data`.
///
/// | Variable        | Field           | Default      |
/// |-----------------|-----------------|--------------|
/// | `HOST`          | `host`          | `0.0.0.0`    |
/// | `PORT`          | `port`          | `6001`       |
/// | `NODE_ENV`      | `environment`   | `production` |
/// | `HEALTH_PREFIX` | `health_prefix` | `/health`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub health_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            health_prefix: DEFAULT_HEALTH_PREFIX.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let raw_prefix =
            lookup("HEALTH_PREFIX").unwrap_or_else(|| DEFAULT_HEALTH_PREFIX.to_string());
        let health_prefix = normalize_prefix(&raw_prefix);
        // An empty actix scope swallows every route registered after it.
        if health_prefix.is_empty() {
            return Err(ConfigError::EmptyHealthPrefix(raw_prefix));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: lookup("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            health_prefix,
        })
    }

    /// Development mode raises default log verbosity.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

// "health/" -> "/health", "/" -> ""
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
