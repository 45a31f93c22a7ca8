
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinbaseError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lookup failed for '{character}': {message}")]
    Lookup { character: char, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Artifact write error: {0}")]
    ArtifactWrite(String),
}

pub type Result<T> = std::result::Result<T, PinbaseError>;

// Helper conversions
impl From<config::ConfigError> for PinbaseError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for PinbaseError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
