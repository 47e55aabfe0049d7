use thiserror::Error;

/// Main error type for the prediction API
#[derive(Error, Debug)]
pub enum PennantError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Upstream feed errors
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    // Caller input errors
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Prediction not found for game ID {game_id}")]
    NotFound { game_id: u64 },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PennantError
pub type Result<T> = std::result::Result<T, PennantError>;
