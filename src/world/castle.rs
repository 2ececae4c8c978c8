//! Castles: defended during a siege, burgled for their jewelry box

use crate::entity::hero::Hero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALLS: u32 = 100;
pub const DEFAULT_VOLLEY_DAMAGE: u32 = 25;
pub const DEFAULT_JEWELRY_WORTH: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseState {
    NotStarted,
    Started,
    Taken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Castle {
    pub name: String,
    state: DefenseState,
    /// Wall integrity; the castle falls when it reaches zero
    pub walls: u32,
    /// Outer ring of walls, if the castle has one
    pub outer_walls: Option<u32>,
    /// Damage each volley deals to whoever stands in front of the walls
    pub volley_damage: u32,
    /// Total worth kept in the jewelry box
    pub jewelry_worth: Decimal,
}

impl Castle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DefenseState::NotStarted,
            walls: DEFAULT_WALLS,
            outer_walls: None,
            volley_damage: DEFAULT_VOLLEY_DAMAGE,
            jewelry_worth: Decimal::from(DEFAULT_JEWELRY_WORTH),
        }
    }

    pub fn with_walls(mut self, walls: u32) -> Self {
        self.walls = walls;
        if walls == 0 {
            self.state = DefenseState::Taken;
        }
        self
    }

    pub fn with_outer_walls(mut self, outer_walls: u32) -> Self {
        self.outer_walls = Some(outer_walls);
        self
    }

    pub fn with_volley_damage(mut self, damage: u32) -> Self {
        self.volley_damage = damage;
        self
    }

    pub fn state(&self) -> DefenseState {
        self.state
    }

    /// Man the walls. Only a living hero can start the defense of a standing castle.
    pub fn start_defense(&mut self, hero: &Hero) {
        if self.state == DefenseState::NotStarted && hero.is_alive() {
            self.state = DefenseState::Started;
        }
    }

    pub fn defense_started(&self) -> bool {
        self.state == DefenseState::Started
    }

    pub fn taken(&self) -> bool {
        self.state == DefenseState::Taken
    }

    pub fn shoot_at_hero_and_army(&self, hero: &mut Hero) {
        hero.take_damage(self.volley_damage);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.walls = self.walls.saturating_sub(amount);
        if self.walls == 0 {
            self.state = DefenseState::Taken;
        }
    }
}
