use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellKind {
    Offensive,
    Defensive,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub kind: SpellKind,
    pub power: u32,
}

impl Spell {
    pub fn new(name: impl Into<String>, kind: SpellKind, power: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            power,
        }
    }

    pub fn fireball() -> Self {
        Self::new("Fireball", SpellKind::Offensive, 30)
    }

    pub fn stone_skin() -> Self {
        Self::new("Stone Skin", SpellKind::Defensive, 20)
    }

    pub fn is_offensive(&self) -> bool {
        self.kind == SpellKind::Offensive
    }
}
