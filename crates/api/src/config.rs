use finboard_core::roles::{ROLE_ADMIN, ROLE_USER};

use crate::auth::jwt::JwtConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// An account created at startup if its username is not taken yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSeed {
    pub username: String,
    pub password: String,
    pub role: &'static str,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and JWT secret have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound of the connection pool (default: `10`).
    pub db_max_connections: u32,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Accounts provisioned at startup.
    pub accounts: Vec<AccountSeed>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `HOST`                 | `0.0.0.0`              |
    /// | `PORT`                 | `3000`                 |
    /// | `DATABASE_URL`         | **required**           |
    /// | `DB_MAX_CONNECTIONS`   | `10`                   |
    /// | `CORS_ORIGINS`         | `*`                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                   |
    /// | `JWT_SECRET`           | **required**           |
    /// | `JWT_EXPIRY_MINS`      | `480`                  |
    /// | `ADMIN_USERNAME`       | `financeiro`           |
    /// | `ADMIN_PASSWORD`       | unset (no admin seed)  |
    /// | `VIEWER_USERNAME`      | `diretoria`            |
    /// | `VIEWER_PASSWORD`      | unset (no viewer seed) |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let jwt = JwtConfig::from_lookup(&lookup)?;

        let mut accounts = Vec::new();
        if let Some(password) = lookup("ADMIN_PASSWORD") {
            accounts.push(AccountSeed {
                username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "financeiro".into()),
                password,
                role: ROLE_ADMIN,
            });
        }
        if let Some(password) = lookup("VIEWER_PASSWORD") {
            accounts.push(AccountSeed {
                username: lookup("VIEWER_USERNAME").unwrap_or_else(|| "diretoria".into()),
                password,
                role: ROLE_USER,
            });
        }

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            jwt,
            accounts,
        })
    }

    /// Whether CORS is open to any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
