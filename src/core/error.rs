use crate::core::types::Encounter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SagaError {
    #[error("Do not chicken out right now! Invalid amount of gold to steal: {0:?}")]
    InvalidGoldAmount(Option<i64>),

    #[error("You cannot try to steal more than {limit} gold at a time (asked for {requested})")]
    GoldLimitExceeded { requested: i64, limit: i64 },

    #[error("Hero was slain by the dragon")]
    SlainByDragon,

    #[error("Hero is a chicken: no treasures chosen to steal")]
    HeroIsAChicken,

    #[error("The {encounter} did not finish within {limit} rounds")]
    RoundLimitExceeded { encounter: Encounter, limit: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SagaError {
    /// Whether the hero died (as opposed to being turned away or misconfigured)
    pub fn is_lethal(&self) -> bool {
        matches!(self, SagaError::SlainByDragon)
    }
}

pub type Result<T> = std::result::Result<T, SagaError>;
