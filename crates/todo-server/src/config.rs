//! Application configuration loaded from environment variables.
//!
//! `.env` があれば先に読み込む（dotenvy）。すべての変数は optional で、
//! 値が不正なときだけエラーになる。
//!
//! | 変数 | 既定値 |
//! |------|--------|
//! | `APP_NAME` | `todo_service` |
//! | `APP_ENV` | `development` |
//! | `APP_HOST` | `0.0.0.0` |
//! | `APP_PORT` | `3000` |

use std::env;

const PRODUCTION_ENV: &str = "production";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub app_host: String,
    pub app_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "todo_service".to_string(),
            app_env: "development".to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 3000,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `APP_PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_port = match lookup("APP_PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "APP_PORT".to_string(),
                    message: e.to_string(),
                }
            })?,
            None => defaults.app_port,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            app_env: lookup("APP_ENV").unwrap_or(defaults.app_env),
            app_host: lookup("APP_HOST").unwrap_or(defaults.app_host),
            app_port,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == PRODUCTION_ENV
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}
