#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller handed the chunker a pattern set up for repeated matching.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
