use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Riot API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
