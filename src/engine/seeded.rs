//! Reproducible outcome provider backed by a seeded ChaCha RNG

use crate::engine::{AttackOutcome, FinalBlow, Hit, OutcomeProvider};
use crate::entity::{Buff, BuffType, Hero, Lockpick, Spell, SpellKind, Weapon};
use crate::world::{Boss, Castle, Dragon, Enemy, Gift, Treasure};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

pub const MIN_SUPERBUFF_LEVEL: u32 = 75;
pub const MIN_SUPERBUFF_MORALE: u8 = 8;

const SPECIAL_SPELLS: &[&str] = &[
    "Chain Lightning",
    "Meteor Swarm",
    "Soul Rend",
    "Frost Nova",
    "Word of Ruin",
];

const MIN_CHANCE: f64 = 0.05;
const MAX_CHANCE: f64 = 0.95;

fn clamp_chance(p: f64) -> f64 {
    p.clamp(MIN_CHANCE, MAX_CHANCE)
}

pub struct SeededOutcomes {
    rng: ChaCha8Rng,
    journal: Vec<String>,
}

impl SeededOutcomes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            journal: Vec::new(),
        }
    }

    /// Entries written by `log_gifts_in_journal`, oldest first
    pub fn journal(&self) -> &[String] {
        &self.journal
    }
}

impl OutcomeProvider for SeededOutcomes {
    fn generate_special_spell(&mut self) -> Spell {
        let name = SPECIAL_SPELLS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Arcane Bolt");
        let power = self.rng.gen_range(40..=90);
        Spell::new(name, SpellKind::Offensive, power)
    }

    fn generate_bonus_money(&mut self) -> Decimal {
        Decimal::from(self.rng.gen_range(10..=100i64))
    }

    fn generate_random_buff(&mut self) -> Buff {
        let buff_type = if self.rng.gen_bool(0.5) {
            BuffType::Offensive
        } else {
            BuffType::Defensive
        };
        Buff::normal(buff_type)
    }

    fn give_super_buff(&mut self, level: u32, morale: u8) -> bool {
        level >= MIN_SUPERBUFF_LEVEL && morale >= MIN_SUPERBUFF_MORALE
    }

    fn determine_critical(&mut self, weapon: &Weapon, hero: &Hero) -> bool {
        let chance = weapon
            .critical_chance
            .saturating_add(hero.level() / 10)
            .min(100);
        self.rng.gen_range(0..100) < chance
    }

    fn attack(&mut self, weapon: &Weapon, boss: &mut Boss, critical: bool) -> AttackOutcome {
        let base = if critical {
            weapon.damage.saturating_mul(2)
        } else {
            weapon.damage
        };
        let damage = base.saturating_add(self.rng.gen_range(0..=weapon.damage / 2));
        boss.take_damage(damage);

        AttackOutcome {
            deadly: boss.health == 0,
        }
    }

    fn cast_spell(&mut self, spell: &Spell, boss: &mut Boss) {
        boss.take_damage(spell.power);
    }

    fn fight_with_dragon(&mut self, hero: &Hero, dragon: &Dragon) -> bool {
        let edge = (f64::from(hero.strength) - f64::from(dragon.might)) / 100.0;
        self.rng.gen_bool(clamp_chance(0.5 + edge))
    }

    fn hit(&mut self, _enemy: &Enemy, _hero: &Hero) -> Hit {
        Hit {
            critical: self.rng.gen_bool(0.25),
        }
    }

    fn deadly_final_blow(&mut self, _enemy: &Enemy, hero: &Hero) -> FinalBlow {
        let survival = if hero.active_buff().is_some() { 0.5 } else { 0.2 };
        if self.rng.gen_bool(survival) {
            FinalBlow::HeroOvercomesDeath
        } else {
            FinalBlow::HeroSlain
        }
    }

    fn attempt_to_open(&mut self, _lockpick: &Lockpick, lockpicking_level: u32, guardian_chance: u32) -> bool {
        let total = u64::from(lockpicking_level) + u64::from(guardian_chance);
        let p = if total == 0 {
            0.5
        } else {
            f64::from(lockpicking_level) / total as f64
        };
        self.rng.gen_bool(clamp_chance(p))
    }

    fn attempt_to_open_door(&mut self, _lockpick: &Lockpick, lockpicking_level: u32) -> bool {
        self.rng
            .gen_bool(clamp_chance(f64::from(lockpicking_level) / 40.0))
    }

    fn steal_from_jewelery_box(&mut self, castle: &Castle, _hero: &Hero) -> Decimal {
        let percent = self.rng.gen_range(10..=50i64);
        castle.jewelry_worth * Decimal::new(percent, 2)
    }

    fn attack_the_castle(&mut self, _hero: &mut Hero, castle: &mut Castle) {
        castle.take_damage(self.rng.gen_range(10..=30));
    }

    fn steal_gold(&mut self, hero: &mut Hero, dragon: &mut Dragon, amount: Decimal) -> bool {
        let p = if dragon.is_alive() { 0.6 } else { MAX_CHANCE };
        if !self.rng.gen_bool(p) {
            return false;
        }

        let taken = amount.min(dragon.gold);
        dragon.gold -= taken;
        hero.add_money(taken);
        true
    }

    fn steal_treasures(&mut self, hero: &mut Hero, dragon: &mut Dragon, treasures: &[Treasure]) -> bool {
        if !self.rng.gen_bool(0.5) {
            return false;
        }

        for wanted in treasures {
            if let Some(pos) = dragon.hoard.iter().position(|t| t == wanted) {
                hero.treasure_chest.push(dragon.hoard.remove(pos));
            }
        }
        true
    }

    fn add_gift_to_hero_treasure_chest(&mut self, hero: &mut Hero, gift: Gift) {
        hero.treasure_chest.push(Treasure::from(gift));
    }

    fn log_gifts_in_journal(&mut self, hero: &Hero, gifts: &str) {
        tracing::info!("Journal: {} received {}", hero.name, gifts);
        self.journal.push(format!("{}: {}", hero.name, gifts));
    }
}
