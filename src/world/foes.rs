//! Bosses, dragons and lesser enemies

use crate::world::treasure::Treasure;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A boss stays in the fight until it is slain; zero health alone does not end it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub health: u32,
    alive: bool,
}

impl Boss {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn slay(&mut self) {
        self.alive = false;
        self.health = 0;
    }

    /// Wears health down without changing `is_alive`; only `slay` ends the fight
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragonKind {
    Common,
    Mighty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dragon {
    pub name: String,
    pub kind: DragonKind,
    /// Fighting strength compared against the hero's
    pub might: i32,
    alive: bool,
    /// Gold reserve a thief can dip into
    pub gold: Decimal,
    pub hoard: Vec<Treasure>,
}

impl Dragon {
    pub fn new(name: impl Into<String>, might: i32) -> Self {
        Self {
            name: name.into(),
            kind: DragonKind::Common,
            might,
            alive: true,
            gold: Decimal::ZERO,
            hoard: Vec::new(),
        }
    }

    pub fn mighty(name: impl Into<String>, might: i32) -> Self {
        Self {
            kind: DragonKind::Mighty,
            ..Self::new(name, might)
        }
    }

    pub fn with_gold(mut self, gold: Decimal) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_hoard(mut self, hoard: Vec<Treasure>) -> Self {
        self.hoard = hoard;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_mighty(&self) -> bool {
        self.kind == DragonKind::Mighty
    }

    pub fn slay(&mut self) {
        self.alive = false;
    }
}

/// A lesser foe that duels the hero to the last blow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub damage: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}
