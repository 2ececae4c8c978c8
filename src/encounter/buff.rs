use crate::encounter::GameMaster;
use crate::engine::OutcomeProvider;
use crate::entity::{Buff, BuffType, Hero};

impl<P: OutcomeProvider> GameMaster<P> {
    /// Grant a buff of `buff_type` unless the hero already holds one
    ///
    /// The provider decides the tier from the hero's level and morale.
    pub fn gain_buff(&mut self, hero: &mut Hero, buff_type: BuffType) {
        if hero.active_buff().is_some() {
            return;
        }

        let buff = if self.provider.give_super_buff(hero.level(), hero.morale_level) {
            Buff::super_buff(buff_type)
        } else {
            Buff::normal(buff_type)
        };

        tracing::debug!("{} is blessed with a {:?} buff", hero.name, buff.tier());
        hero.grant_buff(buff);
    }
}

#[cfg(test)]
mod tests {
    use crate::encounter::GameMaster;
    use crate::engine::MockOutcomeProvider;
    use crate::entity::{Buff, BuffTier, BuffType, Hero};
    use mockall::predicate::eq;

    #[test]
    fn test_gives_hero_super_buff() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_give_super_buff()
            .with(eq(75), eq(8))
            .times(1)
            .return_const(true);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_level(75).with_morale(8);

        gm.gain_buff(&mut hero, BuffType::Offensive);

        let buff = hero.active_buff().unwrap();
        assert_eq!(buff.tier(), BuffTier::Super);
        assert_eq!(buff.buff_type(), BuffType::Offensive);
    }

    #[test]
    fn test_gives_normal_buff_when_super_denied() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_give_super_buff().times(1).return_const(false);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric");

        gm.gain_buff(&mut hero, BuffType::Defensive);

        let buff = hero.active_buff().unwrap();
        assert_eq!(buff.tier(), BuffTier::Normal);
        assert_eq!(buff.buff_type(), BuffType::Defensive);
    }

    #[test]
    fn test_existing_buff_left_alone() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_give_super_buff().never();

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric").with_buff(Buff::normal(BuffType::Offensive));

        gm.gain_buff(&mut hero, BuffType::Defensive);
        gm.gain_buff(&mut hero, BuffType::Offensive);

        assert_eq!(hero.active_buff(), Some(&Buff::normal(BuffType::Offensive)));
    }
}
