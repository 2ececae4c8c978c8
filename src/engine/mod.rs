//! Outcome provider: every roll of the dice the encounters depend on
//!
//! The encounter resolvers never draw randomness themselves. They ask an
//! [`OutcomeProvider`] and react to the answer, which keeps the rules
//! deterministic under a scripted provider.

pub mod seeded;

pub use seeded::{SeededOutcomes, MIN_SUPERBUFF_LEVEL, MIN_SUPERBUFF_MORALE};

use crate::entity::{Buff, Hero, Lockpick, Spell, Weapon};
use crate::world::{Boss, Castle, Dragon, Enemy, Gift, Treasure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one attack resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub deadly: bool,
}

impl AttackOutcome {
    pub fn deadly() -> Self {
        Self { deadly: true }
    }

    pub fn glancing() -> Self {
        Self { deadly: false }
    }
}

/// An enemy's strike against the hero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub critical: bool,
}

/// How the last blow of a duel lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalBlow {
    HeroSlain,
    /// The hero shrugs off death and crushes the enemy
    HeroOvercomesDeath,
}

/// Answers the probabilistic questions of every encounter
#[cfg_attr(test, mockall::automock)]
pub trait OutcomeProvider {
    // Progression
    fn generate_special_spell(&mut self) -> Spell;
    fn generate_bonus_money(&mut self) -> Decimal;
    fn generate_random_buff(&mut self) -> Buff;
    fn give_super_buff(&mut self, level: u32, morale: u8) -> bool;

    // Combat
    fn determine_critical(&mut self, weapon: &Weapon, hero: &Hero) -> bool;
    fn attack(&mut self, weapon: &Weapon, boss: &mut Boss, critical: bool) -> AttackOutcome;
    fn cast_spell(&mut self, spell: &Spell, boss: &mut Boss);
    fn fight_with_dragon(&mut self, hero: &Hero, dragon: &Dragon) -> bool;
    fn hit(&mut self, enemy: &Enemy, hero: &Hero) -> Hit;
    fn deadly_final_blow(&mut self, enemy: &Enemy, hero: &Hero) -> FinalBlow;

    // Lockpicking
    fn attempt_to_open(&mut self, lockpick: &Lockpick, lockpicking_level: u32, guardian_chance: u32) -> bool;
    fn attempt_to_open_door(&mut self, lockpick: &Lockpick, lockpicking_level: u32) -> bool;
    fn steal_from_jewelery_box(&mut self, castle: &Castle, hero: &Hero) -> Decimal;

    // Siege
    fn attack_the_castle(&mut self, hero: &mut Hero, castle: &mut Castle);

    // Heists
    fn steal_gold(&mut self, hero: &mut Hero, dragon: &mut Dragon, amount: Decimal) -> bool;
    fn steal_treasures(&mut self, hero: &mut Hero, dragon: &mut Dragon, treasures: &[Treasure]) -> bool;

    // Tribute
    fn add_gift_to_hero_treasure_chest(&mut self, hero: &mut Hero, gift: Gift);
    fn log_gifts_in_journal(&mut self, hero: &Hero, gifts: &str);
}
