//! Encounter configuration with documented constants
//!
//! Tunables for the resolution loops. Fixed game rules (level cycles,
//! heist limits, morale tiers) live in `encounter::constants`.

use crate::core::error::{Result, SagaError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the encounter resolvers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    // === RESOLUTION LOOPS ===
    /// Maximum attack rounds in a boss fight (and strikes in a final-blow duel)
    ///
    /// A fight only ends when the outcome provider reports a deadly attack.
    /// Reaching this cap with the foe still standing is an internal error.
    pub max_combat_rounds: u32,

    /// Maximum volley exchanges during a castle siege
    ///
    /// The siege runs until the hero has fallen and the castle is taken.
    pub max_siege_rounds: u32,

    // === LOCKPICKING ===
    /// Percentage points added to a chest's guardian chance per attempt
    ///
    /// At the default step (5) a fresh chest (20%) is certain to spawn its
    /// guardian after 16 attempts.
    pub guardian_chance_step: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            max_combat_rounds: 10_000,
            max_siege_rounds: 10_000,
            guardian_chance_step: 5,
        }
    }
}

impl EncounterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; absent keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate().map_err(SagaError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_combat_rounds == 0 {
            return Err("max_combat_rounds must be at least 1".into());
        }

        if self.max_siege_rounds == 0 {
            return Err("max_siege_rounds must be at least 1".into());
        }

        if self.guardian_chance_step == 0 {
            return Err("guardian_chance_step must be at least 1".into());
        }

        if self.guardian_chance_step > 100 {
            return Err(format!(
                "guardian_chance_step ({}) cannot exceed 100 percentage points",
                self.guardian_chance_step
            ));
        }

        Ok(())
    }
}
