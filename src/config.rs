use crate::error::AppError;
use std::env;

/// Runtime configuration, resolved once at startup and handed to the API
/// client. The credential never lives in global state.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError("RIOT_API_KEY not set (environment or .env file)".to_string())
        })?;

        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError("RIOT_API_KEY is empty".to_string()));
        }

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na1".to_string());

        Ok(Config { api_key, region })
    }
}
