pub mod buff;
pub mod equipment;
pub mod hero;
pub mod lockpick;
pub mod spell;

pub use buff::{Buff, BuffTier, BuffType};
pub use equipment::{ArmorSlot, Weapon};
pub use hero::Hero;
pub use lockpick::{lockpick_set, Lockpick};
pub use spell::{Spell, SpellKind};
