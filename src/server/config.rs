use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SSLMODE: &str = "disable";

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// `.env` files must be loaded by the caller before this runs.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` is used as-is when present. Otherwise a postgres URL is assembled
    /// from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and `DB_SSLMODE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url(&lookup)?,
        };

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = server_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SERVER_ADDR".to_string(),
                value: server_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            server_addr,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn postgres_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

    let host = required("DB_HOST")?;
    let port = required("DB_PORT")?;
    let user = required("DB_USER")?;
    let name = required("DB_NAME")?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let sslmode = lookup("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSLMODE.to_string());

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        user, password, host, port, name, sslmode
    ))
}
