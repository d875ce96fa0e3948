//! Environment-driven server configuration.
//!
//! Settings are read through `mockable::Env` so parsing is testable without
//! touching the process environment. Release builds require an explicit
//! session key; debug builds may fall back to an ephemeral one.

use std::net::SocketAddr;

use actix_web::cookie::Key;
use mockable::Env;
use tracing::warn;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const BIND_ADDR_ENV: &str = "BIND_ADDR";
const SESSION_KEY_ENV: &str = "SESSION_KEY";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const SESSION_KEY_MIN_LEN: usize = 64;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {name}")]
    Missing {
        /// Variable name.
        name: &'static str,
    },
    /// A variable is set to an unusable value.
    #[error("invalid value for {name}: {message}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// What was expected.
        message: String,
    },
}

/// Runtime configuration assembled from the environment.
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Key signing the session cookie.
    pub session_key: Key,
    /// Whether the session cookie is marked `Secure`.
    pub cookie_secure: bool,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("bind_addr", &self.bind_addr)
            .field("session_key", &"<redacted>")
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl ServerConfig {
    /// Read the full configuration from the environment.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env
                .string(DATABASE_URL_ENV)
                .ok_or(ConfigError::Missing {
                    name: DATABASE_URL_ENV,
                })?,
            bind_addr: bind_addr_from_env(env)?,
            session_key: session_key_from_env(env)?,
            cookie_secure: cookie_secure_from_env(env)?,
        })
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let raw = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.parse().map_err(|_| ConfigError::Invalid {
        name: BIND_ADDR_ENV,
        message: format!("expected host:port, got `{raw}`"),
    })
}

fn session_key_from_env<E: Env>(env: &E) -> Result<Key, ConfigError> {
    match env.string(SESSION_KEY_ENV) {
        Some(raw) if raw.len() >= SESSION_KEY_MIN_LEN => Ok(Key::derive_from(raw.as_bytes())),
        Some(_) => Err(ConfigError::Invalid {
            name: SESSION_KEY_ENV,
            message: format!("expected at least {SESSION_KEY_MIN_LEN} bytes"),
        }),
        None if cfg!(debug_assertions) => {
            warn!("using ephemeral session key (dev only); sessions reset on restart");
            Ok(Key::generate())
        }
        None => Err(ConfigError::Missing {
            name: SESSION_KEY_ENV,
        }),
    }
}

fn cookie_secure_from_env<E: Env>(env: &E) -> Result<bool, ConfigError> {
    match env.string(COOKIE_SECURE_ENV) {
        None => Ok(true),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name: COOKIE_SECURE_ENV,
                message: format!("expected {BOOL_EXPECTED}, got `{raw}`"),
            }),
        },
    }
}
