//! Combat encounters: boss fights, mighty dragons, and the final blow
//!
//! Fight loops run until the provider reports a deadly outcome, capped by
//! `EncounterConfig::max_combat_rounds`.

use crate::core::error::{Result, SagaError};
use crate::core::types::Encounter;
use crate::encounter::constants::{
    ALMIGHTY_MORALE_LEVEL, ALMIGHTY_MORALE_STRENGTH_GAIN, FAIR_MORALE_LEVEL,
    FAIR_MORALE_STRENGTH_GAIN, LOW_MORALE_LEVEL, LOW_MORALE_STRENGTH_GAIN,
};
use crate::encounter::GameMaster;
use crate::engine::{FinalBlow, OutcomeProvider};
use crate::entity::Hero;
use crate::world::{Boss, Dragon, Enemy};

/// Discrete morale tiers a hero can fight at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoraleTier {
    Low,
    Fair,
    Almighty,
}

impl MoraleTier {
    /// Tier for a morale level; values outside the scale have no tier
    pub fn from_level(morale_level: u8) -> Option<Self> {
        match morale_level {
            LOW_MORALE_LEVEL => Some(MoraleTier::Low),
            FAIR_MORALE_LEVEL => Some(MoraleTier::Fair),
            ALMIGHTY_MORALE_LEVEL => Some(MoraleTier::Almighty),
            _ => None,
        }
    }

    pub fn strength_gain(&self) -> i32 {
        match self {
            MoraleTier::Low => LOW_MORALE_STRENGTH_GAIN,
            MoraleTier::Fair => FAIR_MORALE_STRENGTH_GAIN,
            MoraleTier::Almighty => ALMIGHTY_MORALE_STRENGTH_GAIN,
        }
    }
}

impl<P: OutcomeProvider> GameMaster<P> {
    /// Fight a boss to the death
    ///
    /// Opens with the hero's strongest offensive spell, then trades attacks
    /// until one is deadly. Returns the number of attack rounds fought.
    pub fn fight_the_boss(&mut self, hero: &Hero, boss: &mut Boss) -> Result<u32> {
        match hero.most_powerful_offensive_spell() {
            Some(spell) => {
                tracing::debug!("{} opens with {} against {}", hero.name, spell.name, boss.name);
                self.provider.cast_spell(spell, boss);
            }
            None => tracing::warn!("{} knows no offensive spell to open with", hero.name),
        }

        let limit = self.config.max_combat_rounds;
        let mut rounds = 0;

        while boss.is_alive() {
            if rounds >= limit {
                return Err(SagaError::RoundLimitExceeded {
                    encounter: Encounter::BossFight,
                    limit,
                });
            }
            rounds += 1;

            let weapon = &hero.equipped_weapon;
            let critical = self.provider.determine_critical(weapon, hero);
            let outcome = self.provider.attack(weapon, boss, critical);

            tracing::debug!(
                "Round {}: {} strikes {} (critical: {}, deadly: {})",
                rounds,
                hero.name,
                boss.name,
                critical,
                outcome.deadly
            );

            if outcome.deadly {
                boss.slay();
            }
        }

        tracing::info!("{} slew {} in {} rounds", hero.name, boss.name, rounds);
        Ok(rounds)
    }

    /// Face a mighty dragon in a single decisive fight
    ///
    /// Morale steels (or saps) the hero's strength before the fight. A win
    /// slays the dragon, a loss slays the hero.
    pub fn fight_with_mighty_dragon(&mut self, hero: &mut Hero, dragon: &mut Dragon) -> bool {
        if let Some(tier) = MoraleTier::from_level(hero.morale_level) {
            hero.add_strength(tier.strength_gain());
            tracing::debug!(
                "{} fights at {:?} morale, strength now {}",
                hero.name,
                tier,
                hero.strength
            );
        }

        let dragon_slain = self.provider.fight_with_dragon(hero, dragon);
        if dragon_slain {
            dragon.slay();
            tracing::info!("{} slew the mighty {}", hero.name, dragon.name);
        } else {
            hero.slay();
            tracing::info!("{} fell to the mighty {}", hero.name, dragon.name);
        }

        dragon_slain
    }

    /// Let an enemy strike until a blow lands critically, then settle the duel
    pub fn face_death(&mut self, hero: &mut Hero, enemy: &Enemy) -> Result<FinalBlow> {
        let limit = self.config.max_combat_rounds;
        let mut strikes = 0;

        loop {
            if strikes >= limit {
                return Err(SagaError::RoundLimitExceeded {
                    encounter: Encounter::FinalBlow,
                    limit,
                });
            }
            strikes += 1;

            if self.provider.hit(enemy, hero).critical {
                break;
            }
        }

        let blow = self.provider.deadly_final_blow(enemy, hero);
        match blow {
            FinalBlow::HeroSlain => {
                hero.slay();
                tracing::info!("{} was slain by {} after {} strikes", hero.name, enemy.name, strikes);
            }
            FinalBlow::HeroOvercomesDeath => {
                tracing::info!("{} overcame death and crushed {}", hero.name, enemy.name);
            }
        }

        Ok(blow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EncounterConfig;
    use crate::engine::{AttackOutcome, Hit, MockOutcomeProvider};
    use crate::entity::{Spell, SpellKind, Weapon};
    use mockall::Sequence;

    #[test]
    fn test_kills_boss_with_critical_hit() {
        let mut provider = MockOutcomeProvider::new();
        let mut seq = Sequence::new();
        provider.expect_cast_spell().times(1).return_const(());
        for critical in [false, false, true] {
            provider
                .expect_determine_critical()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(critical);
            provider
                .expect_attack()
                .withf(move |weapon, _, c| weapon.name == "Sword" && *c == critical)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(AttackOutcome { deadly: critical });
        }

        let mut gm = GameMaster::new(provider);
        let hero = Hero::new("Aldric")
            .with_weapon(Weapon::sword())
            .with_spells(vec![Spell::fireball()]);
        let mut boss = Boss::new("Lich King", 500);

        let rounds = gm.fight_the_boss(&hero, &mut boss).unwrap();

        assert_eq!(rounds, 3);
        assert!(!boss.is_alive());
    }

    #[test]
    fn test_strongest_offensive_spell_opens() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_cast_spell()
            .withf(|spell, _| spell.name == "Meteor")
            .times(1)
            .return_const(());
        provider.expect_determine_critical().return_const(false);
        provider
            .expect_attack()
            .times(1)
            .return_const(AttackOutcome::deadly());

        let mut gm = GameMaster::new(provider);
        let hero = Hero::new("Mira").with_spells(vec![
            Spell::new("Spark", SpellKind::Offensive, 5),
            Spell::new("Meteor", SpellKind::Offensive, 80),
            Spell::new("Aegis", SpellKind::Defensive, 99),
        ]);
        let mut boss = Boss::new("Golem", 300);

        assert_eq!(gm.fight_the_boss(&hero, &mut boss).unwrap(), 1);
    }

    #[test]
    fn test_no_spell_skips_opener() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_cast_spell().never();
        provider.expect_determine_critical().return_const(true);
        provider
            .expect_attack()
            .times(1)
            .return_const(AttackOutcome::deadly());

        let mut gm = GameMaster::new(provider);
        let hero = Hero::new("Brute");
        let mut boss = Boss::new("Golem", 300);

        assert!(gm.fight_the_boss(&hero, &mut boss).is_ok());
    }

    #[test]
    fn test_endless_boss_fight_hits_round_cap() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_cast_spell().return_const(());
        provider.expect_determine_critical().return_const(false);
        provider
            .expect_attack()
            .times(5)
            .return_const(AttackOutcome::glancing());

        let config = EncounterConfig {
            max_combat_rounds: 5,
            ..Default::default()
        };
        let mut gm = GameMaster::with_config(provider, config);
        let hero = Hero::new("Aldric");
        let mut boss = Boss::new("Immortal", u32::MAX);

        let err = gm.fight_the_boss(&hero, &mut boss).unwrap_err();

        assert!(matches!(
            err,
            SagaError::RoundLimitExceeded {
                encounter: Encounter::BossFight,
                limit: 5
            }
        ));
        assert!(boss.is_alive());
    }

    #[test]
    fn test_morale_tiers() {
        assert_eq!(MoraleTier::from_level(1), Some(MoraleTier::Low));
        assert_eq!(MoraleTier::from_level(3), Some(MoraleTier::Almighty));
        assert_eq!(MoraleTier::from_level(0), None);
        assert_eq!(MoraleTier::from_level(8), None);
    }

    #[test]
    fn test_mighty_dragon_strength_by_morale() {
        for (morale, expected_strength) in [(1, 9), (2, 13), (3, 20), (7, 10)] {
            let mut provider = MockOutcomeProvider::new();
            provider
                .expect_fight_with_dragon()
                .withf(move |hero, _| hero.strength == expected_strength)
                .times(1)
                .return_const(true);

            let mut gm = GameMaster::new(provider);
            let mut hero = Hero::new("Aldric").with_morale(morale);
            let mut dragon = Dragon::mighty("Smaug", 50);

            assert!(gm.fight_with_mighty_dragon(&mut hero, &mut dragon));
            assert_eq!(hero.strength, expected_strength);
            assert!(!dragon.is_alive());
        }
    }

    #[test]
    fn test_losing_to_mighty_dragon_is_fatal() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_fight_with_dragon().return_const(false);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric");
        let mut dragon = Dragon::mighty("Smaug", 90);

        assert!(!gm.fight_with_mighty_dragon(&mut hero, &mut dragon));
        assert!(!hero.is_alive());
        assert!(dragon.is_alive());
    }

    #[test]
    fn test_hero_does_not_die_just_like_that() {
        let mut provider = MockOutcomeProvider::new();
        let mut seq = Sequence::new();
        for critical in [false, true] {
            provider
                .expect_hit()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(Hit { critical });
        }
        provider
            .expect_deadly_final_blow()
            .times(1)
            .return_const(FinalBlow::HeroOvercomesDeath);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric");
        let enemy = Enemy::new("Black Knight", 30);

        let blow = gm.face_death(&mut hero, &enemy).unwrap();

        assert_eq!(blow, FinalBlow::HeroOvercomesDeath);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_final_blow_slays_hero() {
        let mut provider = MockOutcomeProvider::new();
        provider.expect_hit().return_const(Hit { critical: true });
        provider
            .expect_deadly_final_blow()
            .return_const(FinalBlow::HeroSlain);

        let mut gm = GameMaster::new(provider);
        let mut hero = Hero::new("Aldric");

        gm.face_death(&mut hero, &Enemy::new("Black Knight", 30)).unwrap();

        assert!(!hero.is_alive());
    }

    #[test]
    fn test_endless_glancing_hits_hit_round_cap() {
        let mut provider = MockOutcomeProvider::new();
        provider
            .expect_hit()
            .times(4)
            .return_const(Hit { critical: false });
        provider.expect_deadly_final_blow().never();

        let config = EncounterConfig {
            max_combat_rounds: 4,
            ..Default::default()
        };
        let mut gm = GameMaster::with_config(provider, config);
        let mut hero = Hero::new("Aldric");
        let enemy = Enemy::new("Black Knight", 30);

        let err = gm.face_death(&mut hero, &enemy).unwrap_err();

        assert!(matches!(
            err,
            SagaError::RoundLimitExceeded {
                encounter: Encounter::FinalBlow,
                limit: 4
            }
        ));
        assert!(hero.is_alive());
    }
}
