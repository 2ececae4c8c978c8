//! Lockpicks, consumed one attempt at a time

use crate::core::types::LockpickId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockpick {
    pub id: LockpickId,
    used: bool,
}

impl Lockpick {
    pub fn new(id: u32) -> Self {
        Self {
            id: LockpickId(id),
            used: false,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Mark this pick as spent by an attempt
    pub fn mark_used(&mut self) {
        self.used = true;
    }
}

/// A fresh set of picks numbered `1..=count`
pub fn lockpick_set(count: u32) -> Vec<Lockpick> {
    (1..=count).map(Lockpick::new).collect()
}
