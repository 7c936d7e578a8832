use thiserror::Error;

/// Clockangle error types
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time: {0}")]
    Time(String),

    #[error("Diagram error: {0}")]
    Diagram(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for clockangle operations
pub type Result<T> = std::result::Result<T, ClockError>;
