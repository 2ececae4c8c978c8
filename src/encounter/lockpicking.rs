//! Lockpicking: chests in the dungeon, doors of castles
//!
//! Picks are tried strictly in inventory order through an index cursor.
//! Every attempt spends its pick; the walk stops at the first success, so
//! later picks stay fresh.

use crate::encounter::GameMaster;
use crate::engine::OutcomeProvider;
use crate::entity::Hero;
use crate::world::{Castle, Chest};
use rust_decimal::Decimal;
use serde::Serialize;

/// How a chest encounter ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChestOutcome {
    Opened { attempts: usize, payout: Decimal },
    /// Every pick was tried and the lock held; nothing was awarded
    Exhausted { attempts: usize },
}

impl ChestOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, ChestOutcome::Opened { .. })
    }

    pub fn attempts(&self) -> usize {
        match self {
            ChestOutcome::Opened { attempts, .. } | ChestOutcome::Exhausted { attempts } => *attempts,
        }
    }
}

/// How a castle break-in ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BreakInOutcome {
    Stolen { attempts: usize, worth: Decimal },
    /// The main door never gave way
    DoorHeld { attempts: usize },
}

impl BreakInOutcome {
    pub fn is_stolen(&self) -> bool {
        matches!(self, BreakInOutcome::Stolen { .. })
    }
}

impl<P: OutcomeProvider> GameMaster<P> {
    /// Work through the hero's lockpicks until the chest opens
    ///
    /// Skill and guardian risk both climb with every attempt, whether it
    /// succeeds or not. The provider sees the values from before the attempt.
    pub fn open_loot_chest(&mut self, hero: &mut Hero, chest: &mut Chest) -> ChestOutcome {
        let step = self.config.guardian_chance_step;
        let mut cursor = 0;

        while cursor < hero.lockpicks.len() {
            let opened = self.provider.attempt_to_open(
                &hero.lockpicks[cursor],
                hero.lockpicking_level(),
                chest.guardian_chance(),
            );

            hero.lockpicks[cursor].mark_used();
            hero.increase_lockpicking();
            chest.raise_guardian_chance(step);
            cursor += 1;

            tracing::debug!(
                "{} lockpick attempt {}: {} (guardian chance now {}%)",
                hero.name,
                cursor,
                if opened { "opened" } else { "failed" },
                chest.guardian_chance()
            );

            if opened {
                hero.add_money(chest.money);
                tracing::info!("{} opened the chest after {} attempts", hero.name, cursor);
                return ChestOutcome::Opened {
                    attempts: cursor,
                    payout: chest.money,
                };
            }
        }

        tracing::info!("{} ran out of lockpicks after {} attempts", hero.name, cursor);
        ChestOutcome::Exhausted { attempts: cursor }
    }

    /// Pick the castle's main door, then empty its jewelry box
    ///
    /// Door attempts spend picks but do not train the hero's skill.
    pub fn break_into_castle_and_steal(&mut self, hero: &mut Hero, castle: &Castle) -> BreakInOutcome {
        let mut cursor = 0;
        let mut door_opened = false;

        while cursor < hero.lockpicks.len() {
            let opened = self
                .provider
                .attempt_to_open_door(&hero.lockpicks[cursor], hero.lockpicking_level());
            hero.lockpicks[cursor].mark_used();
            cursor += 1;

            if opened {
                door_opened = true;
                break;
            }
        }

        if !door_opened {
            tracing::info!("The doors of {} held against {}", castle.name, hero.name);
            return BreakInOutcome::DoorHeld { attempts: cursor };
        }

        let worth = self.provider.steal_from_jewelery_box(castle, hero);
        hero.add_money(worth);
        tracing::info!("{} stole jewelry worth {} from {}", hero.name, worth, castle.name);

        BreakInOutcome::Stolen {
            attempts: cursor,
            worth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MockOutcomeProvider;
    use crate::entity::lockpick_set;
    use mockall::Sequence;

    #[test]
    fn test_opens_loot_on_first_attempt() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_attempt_to_open()
            .withf(|pick, level, chance| pick.id.0 == 1 && *level == 10 && *chance == 20)
            .times(1)
            .return_const(true);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_lockpicks(lockpick_set(3));
        let mut chest = Chest::default();

        let outcome = gm.open_loot_chest(&mut hero, &mut chest);

        assert!(outcome.is_opened());
        assert_eq!(hero.money(), Decimal::from(100) + chest.money);
        assert_eq!(hero.unused_lockpicks(), 2);
    }

    #[test]
    fn test_opens_loot_after_multiple_attempts() {
        let mut provider = MockOutcomeProvider::new();
        let mut seq = Sequence::new();
        for (id, level, chance, opens) in [(1, 10, 20, false), (2, 11, 25, false), (3, 12, 30, true)] {
            provider
                .expect_attempt_to_open()
                .withf(move |pick, l, c| pick.id.0 == id && *l == level && *c == chance)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(opens);
        }

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_lockpicks(lockpick_set(4));
        let mut chest = Chest::new(Decimal::from(80));

        let outcome = gm.open_loot_chest(&mut hero, &mut chest);

        assert_eq!(
            outcome,
            ChestOutcome::Opened {
                attempts: 3,
                payout: Decimal::from(80)
            }
        );
        assert_eq!(hero.money(), Decimal::from(180));
        assert_eq!(hero.lockpicking_level(), 13);
        assert_eq!(chest.guardian_chance(), 35);
        assert!(!hero.lockpicks[3].is_used());
    }

    #[test]
    fn test_exhausted_picks_award_nothing() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_attempt_to_open()
            .times(2)
            .return_const(false);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_lockpicks(lockpick_set(2));
        let mut chest = Chest::default();

        let outcome = gm.open_loot_chest(&mut hero, &mut chest);

        assert_eq!(outcome, ChestOutcome::Exhausted { attempts: 2 });
        assert_eq!(hero.money(), Decimal::from(100));
        assert_eq!(hero.unused_lockpicks(), 0);
        assert_eq!(hero.lockpicking_level(), 12);
    }

    #[test]
    fn test_no_picks_no_attempts() {
        let provider = MockOutcomeProvider::new();
        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric");
        let mut chest = Chest::default();

        let outcome = gm.open_loot_chest(&mut hero, &mut chest);

        assert_eq!(outcome.attempts(), 0);
        assert_eq!(chest.guardian_chance(), 20);
    }

    #[test]
    fn test_breaks_into_castle_and_steals_jewelry() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_attempt_to_open_door()
            .withf(|_, level| *level == 10)
            .times(1)
            .return_const(true);
        provider
            .expect_steal_from_jewelery_box()
            .times(1)
            .return_const(Decimal::from(100));

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_lockpicks(lockpick_set(2));
        let castle = Castle::new("Highkeep");

        let outcome = gm.break_into_castle_and_steal(&mut hero, &castle);

        assert_eq!(
            outcome,
            BreakInOutcome::Stolen {
                attempts: 1,
                worth: Decimal::from(100)
            }
        );
        assert_eq!(hero.money(), Decimal::from(200));
        assert_eq!(hero.lockpicking_level(), 10);
    }

    #[test]
    fn test_door_holds_without_stealing() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_attempt_to_open_door()
            .times(3)
            .return_const(false);
        provider.expect_steal_from_jewelery_box().never();

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_lockpicks(lockpick_set(3));
        let castle = Castle::new("Highkeep");

        let outcome = gm.break_into_castle_and_steal(&mut hero, &castle);

        assert_eq!(outcome, BreakInOutcome::DoorHeld { attempts: 3 });
        assert_eq!(hero.money(), Decimal::from(100));
    }
}
