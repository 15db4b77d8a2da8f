use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{OrderAppError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Key/value view of the process configuration
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot of the environment, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// What `GET /api/orders/{id}` answers for an unknown id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// 404 with an error body
    #[default]
    NotFound,
    /// 200 with a JSON `null` body
    NullBody,
}

impl FromStr for NotFoundPolicy {
    type Err = OrderAppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-found" | "404" => Ok(NotFoundPolicy::NotFound),
            "null-body" | "null" => Ok(NotFoundPolicy::NullBody),
            other => Err(OrderAppError::Config(format!(
                "ORDERS_NOT_FOUND_POLICY must be 'not-found' or 'null-body', got '{}'",
                other
            ))),
        }
    }
}

/// Typed settings for the order service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub not_found_policy: NotFoundPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            not_found_policy: NotFoundPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let host = config
            .get("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match config.get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| OrderAppError::Config(format!("PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let database_url = config.get("DATABASE_URL").filter(|url| !url.is_empty());

        let not_found_policy = match config.get("ORDERS_NOT_FOUND_POLICY") {
            Some(raw) => raw.parse()?,
            None => NotFoundPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            database_url,
            not_found_policy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
