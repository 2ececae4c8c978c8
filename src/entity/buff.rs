//! Buffs: a single active enhancement held by a hero

use serde::{Deserialize, Serialize};

/// What a buff enhances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffType {
    Offensive,
    Defensive,
}

/// Grade of a buff; the two tiers are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffTier {
    Normal,
    Super,
}

/// An immutable buff. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    name: String,
    tier: BuffTier,
    buff_type: BuffType,
}

impl Buff {
    pub fn new(name: impl Into<String>, tier: BuffTier, buff_type: BuffType) -> Self {
        Self {
            name: name.into(),
            tier,
            buff_type,
        }
    }

    /// Normal-tier buff
    pub fn normal(buff_type: BuffType) -> Self {
        Self::new("normal duper buff", BuffTier::Normal, buff_type)
    }

    /// Super-tier buff, reserved for seasoned heroes in high spirits
    pub fn super_buff(buff_type: BuffType) -> Self {
        Self::new("super duper buff", BuffTier::Super, buff_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> BuffTier {
        self.tier
    }

    pub fn buff_type(&self) -> BuffType {
        self.buff_type
    }

    pub fn is_super(&self) -> bool {
        self.tier == BuffTier::Super
    }
}
