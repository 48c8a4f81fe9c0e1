use crate::{env_or_default, ConfigError, FromEnv};

/// Which origins may call the API from a browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// Explicit allow-list of origins
    List(Vec<String>),
}

/// CORS configuration
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

impl CorsConfig {
    /// Parse a comma-separated origin list; `*` (or nothing) allows any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            return Ok(Self {
                allowed_origins: AllowedOrigins::Any,
            });
        }

        if let Some(bad) = origins.iter().find(|o| !o.contains("://")) {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("'{}' is not an origin (expected scheme://host[:port])", bad),
            });
        }

        Ok(Self {
            allowed_origins: AllowedOrigins::List(origins),
        })
    }
}

impl FromEnv for CorsConfig {
    /// Reads CORS_ALLOWED_ORIGIN, defaulting to `*`
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_or_default("CORS_ALLOWED_ORIGIN", "*"))
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
        }
    }
}
