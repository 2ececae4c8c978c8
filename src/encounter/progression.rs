//! Leveling up and the rewards that come with it

use crate::encounter::constants::{BONUS_MONEY_CYCLE, SPECIAL_SPELL_CYCLE};
use crate::encounter::GameMaster;
use crate::engine::OutcomeProvider;
use crate::entity::Hero;

impl<P: OutcomeProvider> GameMaster<P> {
    /// Raise the hero one level and hand out whatever rewards the new level earns
    ///
    /// Every tenth level grants a special spell, every fifth a money bonus,
    /// and a hero without a buff always receives a random one. The checks are
    /// independent: level 10 earns both the spell and the bonus.
    ///
    /// Returns the hero's new level.
    pub fn level_up(&mut self, hero: &mut Hero) -> u32 {
        let level = hero.gain_level();

        if level % SPECIAL_SPELL_CYCLE == 0 {
            let spell = self.provider.generate_special_spell();
            tracing::info!("{} reached level {} and learned {}", hero.name, level, spell.name);
            hero.add_spell(spell);
        }

        if level % BONUS_MONEY_CYCLE == 0 {
            let bonus = self.provider.generate_bonus_money();
            tracing::debug!("{} earned a bonus of {} gold", hero.name, bonus);
            hero.add_money(bonus);
        }

        if hero.active_buff().is_none() {
            let buff = self.provider.generate_random_buff();
            tracing::debug!("{} gained {:?}", hero.name, buff);
            hero.grant_buff(buff);
        }

        level
    }
}
