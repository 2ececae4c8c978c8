//! Encounter rules - fixed values the resolvers are built around

// Progression cycles
pub const SPECIAL_SPELL_CYCLE: u32 = 10;
pub const BONUS_MONEY_CYCLE: u32 = 5;

// Dragon heists
pub const MAX_GOLD_PER_HEIST: i64 = 2000;
pub const DRAGON_FIGHT_GOLD_THRESHOLD: i64 = 1000;

// Fortress defense
pub const FORTRESS_ARMY_THRESHOLD: usize = 100;
pub const GENERAL_NAME: &str = "General";
pub const FORTRESS_MIN_ALLIES: usize = 5;

// Morale levels
pub const LOW_MORALE_LEVEL: u8 = 1;
pub const FAIR_MORALE_LEVEL: u8 = 2;
pub const ALMIGHTY_MORALE_LEVEL: u8 = 3;

// Strength adjustment before facing a mighty dragon (ADDITIVE)
pub const LOW_MORALE_STRENGTH_GAIN: i32 = -1;
pub const FAIR_MORALE_STRENGTH_GAIN: i32 = 3;
pub const ALMIGHTY_MORALE_STRENGTH_GAIN: i32 = 10;
