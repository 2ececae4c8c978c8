//! Encounter resolution and progression
//!
//! `GameMaster` owns an outcome provider and walks each encounter through
//! its rules, mutating the hero and the target in place until a terminal
//! condition (victory, death, theft, exhaustion, chicken-out) is reached.
//! Each encounter family lives in its own module as an `impl` block.

pub mod buff;
pub mod combat;
pub mod constants;
pub mod heist;
pub mod lockpicking;
pub mod progression;
pub mod siege;
pub mod trade;
pub mod tribute;

pub use combat::MoraleTier;
pub use heist::count_loot;
pub use lockpicking::{BreakInOutcome, ChestOutcome};
pub use siege::defend_fortress;
pub use trade::upgrade_armor;

use crate::core::config::EncounterConfig;
use crate::engine::OutcomeProvider;

/// Orchestrates encounters against one outcome provider
pub struct GameMaster<P: OutcomeProvider> {
    provider: P,
    config: EncounterConfig,
}

impl<P: OutcomeProvider> GameMaster<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EncounterConfig::default())
    }

    pub fn with_config(provider: P, config: EncounterConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }
}
