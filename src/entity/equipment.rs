//! Weapons and armor slots carried by a hero

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Base damage per attack
    pub damage: u32,
    /// Chance of a critical hit, in percent (0-100)
    pub critical_chance: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32, critical_chance: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            critical_chance: critical_chance.min(100),
        }
    }

    /// Bare hands
    pub fn fists() -> Self {
        Self::new("Fists", 2, 5)
    }

    pub fn sword() -> Self {
        Self::new("Sword", 12, 10)
    }

    pub fn war_axe() -> Self {
        Self::new("War Axe", 18, 15)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::fists()
    }
}

/// Body slots an armor piece can cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArmorSlot {
    Helmet,
    Chestplate,
    Gauntlets,
    Greaves,
    Boots,
}

impl ArmorSlot {
    /// All slots, in dressing order
    pub fn all() -> &'static [ArmorSlot] {
        &[
            ArmorSlot::Helmet,
            ArmorSlot::Chestplate,
            ArmorSlot::Gauntlets,
            ArmorSlot::Greaves,
            ArmorSlot::Boots,
        ]
    }

    /// Name the piece is sold under
    pub fn name(&self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "Helmet",
            ArmorSlot::Chestplate => "Chestplate",
            ArmorSlot::Gauntlets => "Gauntlets",
            ArmorSlot::Greaves => "Greaves",
            ArmorSlot::Boots => "Boots",
        }
    }
}
