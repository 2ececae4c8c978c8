//! Dragon heists: gold, treasure, and counting the haul

use crate::core::error::{Result, SagaError};
use crate::encounter::constants::{DRAGON_FIGHT_GOLD_THRESHOLD, MAX_GOLD_PER_HEIST};
use crate::encounter::GameMaster;
use crate::engine::OutcomeProvider;
use crate::entity::Hero;
use crate::world::{Dragon, Treasure};
use rust_decimal::Decimal;

impl<P: OutcomeProvider> GameMaster<P> {
    /// Try to steal `amount` gold from a dragon
    ///
    /// Amounts are validated before anything happens. Large hauls
    /// (`DRAGON_FIGHT_GOLD_THRESHOLD` and up) wake the dragon, and the hero
    /// must win the fight before the theft is attempted.
    pub fn steal_gold_from_dragon(
        &mut self,
        hero: &mut Hero,
        dragon: &mut Dragon,
        amount: Option<i64>,
    ) -> Result<bool> {
        let amount = match amount {
            Some(amount) if amount > 0 => amount,
            other => return Err(SagaError::InvalidGoldAmount(other)),
        };

        if amount > MAX_GOLD_PER_HEIST {
            return Err(SagaError::GoldLimitExceeded {
                requested: amount,
                limit: MAX_GOLD_PER_HEIST,
            });
        }

        if amount >= DRAGON_FIGHT_GOLD_THRESHOLD {
            tracing::debug!("{} wakes {} reaching for {} gold", hero.name, dragon.name, amount);
            if !self.provider.fight_with_dragon(hero, dragon) {
                hero.slay();
                tracing::info!("{} was slain by {}", hero.name, dragon.name);
                return Err(SagaError::SlainByDragon);
            }
            dragon.slay();
        }

        let stolen = self.provider.steal_gold(hero, dragon, Decimal::from(amount));
        tracing::info!(
            "{} {} {} gold from {}",
            hero.name,
            if stolen { "stole" } else { "failed to steal" },
            amount,
            dragon.name
        );
        Ok(stolen)
    }

    /// Try to carry off the chosen treasures from a dragon's hoard
    pub fn steal_treasure_from_dragon(
        &mut self,
        hero: &mut Hero,
        dragon: &mut Dragon,
        treasures: &[Treasure],
    ) -> Result<bool> {
        if treasures.is_empty() {
            return Err(SagaError::HeroIsAChicken);
        }

        let stolen = self.provider.steal_treasures(hero, dragon, treasures);
        tracing::info!(
            "{} went for {} treasures of {}: {}",
            hero.name,
            treasures.len(),
            dragon.name,
            if stolen { "success" } else { "caught" }
        );
        Ok(stolen)
    }
}

/// Hero's gold plus the worth of every treasure listed
pub fn count_loot(treasures: &[Treasure], hero: &Hero) -> Decimal {
    treasures
        .iter()
        .fold(hero.money(), |total, treasure| total + treasure.worth)
}
