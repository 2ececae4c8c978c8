//! The hero: the single player character every encounter revolves around
//!
//! Level, money, lockpicking skill and the active buff carry invariants
//! (they only grow, or are set at most once), so they are private and
//! change only through the methods below. Everything else is plain data.

use crate::core::types::HeroId;
use crate::entity::buff::Buff;
use crate::entity::equipment::{ArmorSlot, Weapon};
use crate::entity::lockpick::Lockpick;
use crate::entity::spell::Spell;
use crate::world::treasure::Treasure;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const STARTING_MONEY: i64 = 100;
pub const STARTING_LOCKPICKING_LEVEL: u32 = 10;
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_STRENGTH: i32 = 10;
pub const STARTING_MORALE: u8 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    level: u32,
    pub morale_level: u8,
    money: Decimal,
    pub strength: i32,
    pub health: u32,
    lockpicking_level: u32,
    active_buff: Option<Buff>,
    spells: Vec<Spell>,
    pub lockpicks: Vec<Lockpick>,
    pub equipped_weapon: Weapon,
    pub equipped_armor: Vec<ArmorSlot>,
    pub allies: Vec<HeroId>,
    pub treasure_chest: Vec<Treasure>,
    pub army_in_position: bool,
}

impl Hero {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: HeroId::new(),
            name: name.into(),
            level: 1,
            morale_level: STARTING_MORALE,
            money: Decimal::from(STARTING_MONEY),
            strength: STARTING_STRENGTH,
            health: STARTING_HEALTH,
            lockpicking_level: STARTING_LOCKPICKING_LEVEL,
            active_buff: None,
            spells: Vec::new(),
            lockpicks: Vec::new(),
            equipped_weapon: Weapon::default(),
            equipped_armor: Vec::new(),
            allies: Vec::new(),
            treasure_chest: Vec::new(),
            army_in_position: false,
        }
    }

    // === SETUP (save loading, test fixtures) ===

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    pub fn with_morale(mut self, morale_level: u8) -> Self {
        self.morale_level = morale_level;
        self
    }

    pub fn with_money(mut self, money: Decimal) -> Self {
        self.money = money.max(Decimal::ZERO);
        self
    }

    pub fn with_lockpicking_level(mut self, level: u32) -> Self {
        self.lockpicking_level = level;
        self
    }

    pub fn with_lockpicks(mut self, lockpicks: Vec<Lockpick>) -> Self {
        self.lockpicks = lockpicks;
        self
    }

    pub fn with_spells(mut self, spells: Vec<Spell>) -> Self {
        self.spells = spells;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.equipped_weapon = weapon;
        self
    }

    pub fn with_buff(mut self, buff: Buff) -> Self {
        self.active_buff = Some(buff);
        self
    }

    pub fn with_allies(mut self, allies: Vec<HeroId>) -> Self {
        self.allies = allies;
        self
    }

    // === PROGRESSION ===

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Advance one level; returns the new level
    pub fn gain_level(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.level
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn add_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
    }

    /// Offensive spell with the highest power, first learned wins ties
    pub fn most_powerful_offensive_spell(&self) -> Option<&Spell> {
        self.spells
            .iter()
            .filter(|s| s.is_offensive())
            .fold(None, |best: Option<&Spell>, spell| match best {
                Some(b) if b.power >= spell.power => Some(b),
                _ => Some(spell),
            })
    }

    pub fn add_strength(&mut self, delta: i32) {
        self.strength = self.strength.saturating_add(delta);
    }

    // === MONEY ===

    pub fn money(&self) -> Decimal {
        self.money
    }

    /// Add to the purse. Money never shrinks here, so negative amounts are refused.
    pub fn add_money(&mut self, amount: Decimal) {
        if amount.is_sign_negative() && !amount.is_zero() {
            tracing::warn!("Refusing negative money {} for hero {}", amount, self.name);
            return;
        }
        self.money += amount;
    }

    // === BUFFS ===

    pub fn active_buff(&self) -> Option<&Buff> {
        self.active_buff.as_ref()
    }

    /// Set the active buff if none is held. Returns whether it was granted.
    pub fn grant_buff(&mut self, buff: Buff) -> bool {
        if self.active_buff.is_some() {
            return false;
        }
        self.active_buff = Some(buff);
        true
    }

    // === LOCKPICKING ===

    pub fn lockpicking_level(&self) -> u32 {
        self.lockpicking_level
    }

    pub fn increase_lockpicking(&mut self) {
        self.lockpicking_level = self.lockpicking_level.saturating_add(1);
    }

    pub fn unused_lockpicks(&self) -> usize {
        self.lockpicks.iter().filter(|p| !p.is_used()).count()
    }

    // === COMBAT ===

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn slay(&mut self) {
        self.health = 0;
    }

    /// Order the allied army onto the walls
    pub fn get_army_into_position(&mut self) {
        self.army_in_position = true;
    }

    /// Armor slots not yet covered, in dressing order
    pub fn required_armor_pieces(&self) -> Vec<ArmorSlot> {
        ArmorSlot::all()
            .iter()
            .copied()
            .filter(|slot| !self.equipped_armor.contains(slot))
            .collect()
    }
}
