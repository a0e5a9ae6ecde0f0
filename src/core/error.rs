use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown arena: {0}")]
    UnknownArena(String),

    #[error("Unknown contestant: {0}")]
    UnknownContestant(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
