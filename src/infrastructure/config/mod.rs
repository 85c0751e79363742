use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Translation
    pub locale: String,
    pub fallback_locale: String,
    pub lang_path: Option<PathBuf>,
    // Debug ids
    pub debug_id_timestamp: bool,
    // Demo authorization
    pub admin_token: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e| ApiError::Config(format!("PORT: {e}")))?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            locale: env::var("SIMPLE_API_LOCALE").unwrap_or_else(|_| "en".to_string()),
            fallback_locale: env::var("SIMPLE_API_FALLBACK_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            lang_path: env::var("SIMPLE_API_LANG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            debug_id_timestamp: env::var("SIMPLE_API_DEBUG_ID_TIMESTAMP")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            admin_token: env::var("ADMIN_TOKEN")
                .map_err(|_| ApiError::Config("ADMIN_TOKEN must be set".to_string()))?,
        };

        if config.admin_token.trim().is_empty() {
            return Err(ApiError::Config("ADMIN_TOKEN must not be empty".to_string()));
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
