//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for heroes
///
/// Allies are held by id only: a hero never owns its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub Uuid);

impl HeroId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HeroId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lockpick identifier (stamped on the pick, unique within an inventory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LockpickId(pub u32);

/// The encounter loops that run under a round cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encounter {
    BossFight,
    FinalBlow,
    Siege,
}

impl std::fmt::Display for Encounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Encounter::BossFight => "boss fight",
            Encounter::FinalBlow => "final blow",
            Encounter::Siege => "castle siege",
        };
        f.write_str(name)
    }
}
