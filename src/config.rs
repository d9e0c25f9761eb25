//! Server configuration
//! Read once at startup from the environment (and an optional `.env` file)

use std::fmt;
use std::num::ParseIntError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASIC_USERNAME: &str = "testuser";
pub const DEFAULT_BASIC_PASSWORD: &str = "testpass";
pub const DEFAULT_API_KEY: &str = "test-api-key-12345";

/// Authentication strategy for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Every request is allowed
    None,
    /// HTTP Basic with a single static username/password pair
    Basic { username: String, password: String },
    /// Static shared secret via `x-api-key` header or `api_key` query param
    ApiKey { key: String },
}

impl AuthMethod {
    pub fn name(&self) -> &'static str {
        match self {
            AuthMethod::None => "none",
            AuthMethod::Basic { .. } => "basic",
            AuthMethod::ApiKey { .. } => "apikey",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unknown AUTH_METHOD '{0}' (expected none, basic or apikey)")]
    UnknownAuthMethod(String),
}

/// Immutable server configuration, shared through the application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    pub port: u16,
    /// Base URL written into every fixture link (no trailing slash)
    pub public_url: String,
    pub auth: AuthMethod,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: localhost_url(DEFAULT_PORT),
            auth: AuthMethod::Basic {
                username: DEFAULT_BASIC_USERNAME.to_string(),
                password: DEFAULT_BASIC_PASSWORD.to_string(),
            },
        }
    }
}

impl ServerConfig {
    /// Load from the process environment, after applying `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let auth = match var("AUTH_METHOD").as_deref().unwrap_or("basic") {
            "none" => AuthMethod::None,
            "basic" => AuthMethod::Basic {
                username: var("BASIC_AUTH_USERNAME")
                    .unwrap_or_else(|| DEFAULT_BASIC_USERNAME.to_string()),
                password: var("BASIC_AUTH_PASSWORD")
                    .unwrap_or_else(|| DEFAULT_BASIC_PASSWORD.to_string()),
            },
            "apikey" => AuthMethod::ApiKey {
                key: var("API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            },
            other => return Err(ConfigError::UnknownAuthMethod(other.to_string())),
        };

        let public_url = var("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| localhost_url(port));

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            public_url,
            auth,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Human-readable startup summary, credentials included to ease manual testing
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("STAC API server running on {}", self.public_url),
            format!("Authentication method: {}", self.auth),
        ];
        match &self.auth {
            AuthMethod::None => {}
            AuthMethod::Basic { username, password } => lines.push(format!(
                "Basic Auth - Username: {}, Password: {}",
                username, password
            )),
            AuthMethod::ApiKey { key } => lines.push(format!("API Key: {}", key)),
        }
        lines
    }
}

fn localhost_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}
