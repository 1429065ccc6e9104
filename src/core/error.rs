use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("{0} is not a valid short code")]
    InvalidShortCode(char),

    #[error("Percentile face {0} is outside 1..=100")]
    InvalidFace(u8),

    #[error("Enumeration cancelled")]
    EnumerationCancelled,

    #[error("Pool has {combinations} combinations, limit is {limit}")]
    TooManyCombinations { combinations: u64, limit: u64 },

    #[error("No effect named {0} in the catalog")]
    UnknownEffect(String),

    #[error("Effects with name {0} already exists")]
    DuplicateEffectGroup(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiceError>;
