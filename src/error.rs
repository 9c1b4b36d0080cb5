//! Error types for the xPT calculator, provider client and HTTP facade

use thiserror::Error;


pub type Result<T> = std::result::Result<T, XptError>;

/// Failures talking to the statistics provider or decoding what it returned.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result set {name} missing from provider response")]
    MissingResultSet { name: String },

    #[error("Column {column} missing from result set {result_set}")]
    MissingColumn { result_set: String, column: String },
}

#[derive(Error, Debug)]
pub enum XptError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Team not found for season {season}")]
    TeamNotFound { season: String },

    #[error("No shooting data")]
    NoShootingData,

    #[error("Game not found on {date}")]
    GameNotFound { date: String },

    #[error("Insufficient data to compute xPT")]
    InsufficientData,

    #[error("Invalid season: {value:?}")]
    InvalidSeason { value: String },

    #[error("Invalid season type: {value:?}")]
    InvalidSeasonType { value: String },

    #[error("Invalid game date: {value:?} (expected YYYY-MM-DD)")]
    InvalidGameDate { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stats provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl XptError {
    /// True when the failure came from the external provider rather than
    /// from the player/season/game inputs.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, XptError::Provider(_))
    }
}
