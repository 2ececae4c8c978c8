//! Loot chests guarded by a lurking guardian

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHEST_MONEY: i64 = 50;
pub const DEFAULT_GUARDIAN_CHANCE: u32 = 20;
pub const MAX_GUARDIAN_CHANCE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chest {
    /// Payout for whoever opens it
    pub money: Decimal,
    /// Chance (percent) that fiddling with the lock wakes the guardian
    guardian_chance: u32,
}

impl Chest {
    pub fn new(money: Decimal) -> Self {
        Self {
            money,
            guardian_chance: DEFAULT_GUARDIAN_CHANCE,
        }
    }

    pub fn with_guardian_chance(mut self, chance: u32) -> Self {
        self.guardian_chance = chance.min(MAX_GUARDIAN_CHANCE);
        self
    }

    pub fn guardian_chance(&self) -> u32 {
        self.guardian_chance
    }

    /// Every lockpick attempt makes noise; the chance never exceeds 100
    pub fn raise_guardian_chance(&mut self, step: u32) {
        self.guardian_chance = self
            .guardian_chance
            .saturating_add(step)
            .min(MAX_GUARDIAN_CHANCE);
    }
}

impl Default for Chest {
    fn default() -> Self {
        Self::new(Decimal::from(DEFAULT_CHEST_MONEY))
    }
}
