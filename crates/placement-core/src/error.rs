use thiserror::Error;

/// Top-level error type for shared placement concerns.
#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
