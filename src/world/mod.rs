//! Encounter targets: chests, castles, foes, treasure and traders

pub mod castle;
pub mod chest;
pub mod foes;
pub mod merchant;
pub mod treasure;

pub use castle::{Castle, DefenseState};
pub use chest::Chest;
pub use foes::{Boss, Dragon, DragonKind, Enemy};
pub use merchant::{Merchant, Product, Receipt};
pub use treasure::{Gift, GratefulPerson, Treasure};
