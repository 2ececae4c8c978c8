//! Treasures, and the gifts grateful people press into a hero's hands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    pub name: String,
    pub worth: Decimal,
}

impl Treasure {
    pub fn new(name: impl Into<String>, worth: Decimal) -> Self {
        Self {
            name: name.into(),
            worth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub name: String,
    pub value: Decimal,
}

impl Gift {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<Gift> for Treasure {
    fn from(gift: Gift) -> Self {
        Treasure::new(gift.name, gift.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratefulPerson {
    pub name: String,
    gift: Gift,
}

impl GratefulPerson {
    pub fn new(name: impl Into<String>, gift: Gift) -> Self {
        Self {
            name: name.into(),
            gift,
        }
    }

    pub fn give_gift(&self) -> Gift {
        self.gift.clone()
    }
}
