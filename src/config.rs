/*
 * Responsibility
 * - Load settings from env vars once at process start (PORT, DB_*, CACHE_*)
 * - Every field has a default so the demo starts with no configuration
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Connection parameters for the relational store.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Connection parameters for the key-value store.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    // Prefix for every key this app writes.
    pub namespace: String,
}

impl CacheConfig {
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }

    pub fn probe_key(&self) -> String {
        format!("{}:probe", self.namespace)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        // Defaults are the docker-compose service names of the dev stack.
        let database = DatabaseConfig {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "postgres".to_string()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "devstack".to_string()),
        };

        let cache = CacheConfig {
            host: std::env::var("CACHE_HOST").unwrap_or_else(|_| "redis".to_string()),
            port: std::env::var("CACHE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(6379),
            namespace: std::env::var("CACHE_NAMESPACE").unwrap_or_else(|_| "devstack".to_string()),
        };

        Ok(Config {
            addr,
            app_env,
            database,
            cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_connect_options_carry_every_field() {
        let config = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 5433,
            user: "demo".to_string(),
            password: "secret".to_string(),
            database: "devstack".to_string(),
        };

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "demo");
        assert_eq!(options.get_database(), Some("devstack"));
    }

    #[test]
    fn cache_url_and_probe_key() {
        let config = CacheConfig {
            host: "localhost".to_string(),
            port: 6380,
            namespace: "devstack".to_string(),
        };

        assert_eq!(config.url(), "redis://localhost:6380/");
        assert_eq!(config.probe_key(), "devstack:probe");
    }

    #[test]
    fn app_env_production_check() {
        assert!(AppEnv::Production.is_production());
        assert!(!AppEnv::Development.is_production());
    }
}
