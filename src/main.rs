//! Hero Saga - Encounter Runner
//!
//! Runs a single encounter against a seeded outcome provider and prints a
//! report of the result and the hero's final state.

use clap::{Parser, ValueEnum};
use hero_saga::core::error::Result;
use hero_saga::core::{EncounterConfig, HeroId};
use hero_saga::encounter::{count_loot, defend_fortress, upgrade_armor, GameMaster};
use hero_saga::engine::SeededOutcomes;
use hero_saga::entity::{lockpick_set, BuffType, Hero, Spell, Weapon};
use hero_saga::world::{
    Boss, Castle, Chest, Dragon, Enemy, Gift, GratefulPerson, Merchant, Product, Treasure,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum EncounterKind {
    LevelUp,
    Buff,
    Chest,
    BreakIn,
    Boss,
    MightyDragon,
    Siege,
    Fortress,
    StealGold,
    StealTreasure,
    FaceDeath,
    UpgradeArmor,
    Tribute,
}

/// Encounter Runner - resolve one hero encounter with seeded dice
#[derive(Parser, Debug)]
#[command(name = "hero-saga")]
#[command(about = "Resolve a hero encounter and report the outcome")]
struct Args {
    /// Encounter to run
    #[arg(long, value_enum, default_value = "boss")]
    encounter: EncounterKind,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Encounter config (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gold to steal (steal-gold only)
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<i64>,

    /// Starting hero level
    #[arg(long, default_value_t = 9)]
    level: u32,

    /// Starting hero morale (1 low, 2 fair, 3 almighty)
    #[arg(long, default_value_t = 2)]
    morale: u8,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// Report structure
#[derive(Serialize)]
struct EncounterReport {
    encounter: EncounterKind,
    seed: u64,
    result: Option<serde_json::Value>,
    failure: Option<String>,
    hero: Hero,
}

fn sample_hero(args: &Args) -> Hero {
    Hero::new("Aldric")
        .with_level(args.level)
        .with_morale(args.morale)
        .with_lockpicks(lockpick_set(5))
        .with_weapon(Weapon::sword())
        .with_spells(vec![Spell::fireball(), Spell::stone_skin()])
        .with_allies(vec![HeroId::new(), HeroId::new(), HeroId::new()])
}

fn sample_hoard() -> Vec<Treasure> {
    vec![
        Treasure::new("Golden Goblet", Decimal::from(120)),
        Treasure::new("Ruby Crown", Decimal::from(480)),
        Treasure::new("Silver Chalice", Decimal::from(75)),
    ]
}

fn run_encounter(
    gm: &mut GameMaster<SeededOutcomes>,
    kind: EncounterKind,
    hero: &mut Hero,
    amount: Option<i64>,
) -> Result<serde_json::Value> {
    let value = match kind {
        EncounterKind::LevelUp => serde_json::to_value(gm.level_up(hero))?,
        EncounterKind::Buff => {
            gm.gain_buff(hero, BuffType::Offensive);
            serde_json::to_value(hero.active_buff())?
        }
        EncounterKind::Chest => {
            let mut chest = Chest::default();
            serde_json::to_value(gm.open_loot_chest(hero, &mut chest))?
        }
        EncounterKind::BreakIn => {
            let castle = Castle::new("Highkeep");
            serde_json::to_value(gm.break_into_castle_and_steal(hero, &castle))?
        }
        EncounterKind::Boss => {
            let mut boss = Boss::new("Lich King", 250);
            serde_json::to_value(gm.fight_the_boss(hero, &mut boss)?)?
        }
        EncounterKind::MightyDragon => {
            let mut dragon = Dragon::mighty("Smaug", 15);
            serde_json::to_value(gm.fight_with_mighty_dragon(hero, &mut dragon))?
        }
        EncounterKind::Siege => {
            let mut castle = Castle::new("Highkeep");
            serde_json::to_value(gm.defend_castle(hero, &mut castle)?)?
        }
        EncounterKind::Fortress => {
            let mut castle = Castle::new("Highkeep").with_outer_walls(60);
            let army: Vec<Enemy> = (0..120)
                .map(|i| Enemy::new(format!("Raider {}", i), 5))
                .collect();
            serde_json::to_value(defend_fortress(hero, &mut castle, &army))?
        }
        EncounterKind::StealGold => {
            let mut dragon = Dragon::new("Glaurung", 12).with_gold(Decimal::from(5000));
            serde_json::to_value(gm.steal_gold_from_dragon(hero, &mut dragon, amount)?)?
        }
        EncounterKind::StealTreasure => {
            let hoard = sample_hoard();
            let wanted = hoard[..2].to_vec();
            let mut dragon = Dragon::new("Glaurung", 12).with_hoard(hoard);
            let stolen = gm.steal_treasure_from_dragon(hero, &mut dragon, &wanted)?;
            serde_json::json!({
                "stolen": stolen,
                "loot_worth": count_loot(&hero.treasure_chest, hero),
            })
        }
        EncounterKind::FaceDeath => {
            let enemy = Enemy::new("Black Knight", 30);
            serde_json::to_value(gm.face_death(hero, &enemy)?)?
        }
        EncounterKind::UpgradeArmor => {
            let merchant = Merchant::new(
                "Gorm",
                vec![
                    Product::new("Helmet", Decimal::from(25)),
                    Product::new("Chestplate", Decimal::from(60)),
                ],
            );
            serde_json::to_value(upgrade_armor(&merchant, hero).to_string())?
        }
        EncounterKind::Tribute => {
            let people = [
                GratefulPerson::new("Baker", Gift::new("Bread", Decimal::from(2))),
                GratefulPerson::new("Widow", Gift::new("Silver Ring", Decimal::from(40))),
            ];
            serde_json::to_value(gm.pay_tribute(&people, hero))?
        }
    };
    Ok(value)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EncounterConfig::load(path)?,
        None => EncounterConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Running {:?} encounter with seed {}", args.encounter, seed);

    let mut gm = GameMaster::with_config(SeededOutcomes::new(seed), config);
    let mut hero = sample_hero(&args);

    let (result, failure) = match run_encounter(&mut gm, args.encounter, &mut hero, args.amount) {
        Ok(value) => (Some(value), None),
        Err(e) => {
            tracing::warn!("Encounter failed: {}", e);
            (None, Some(e.to_string()))
        }
    };

    let report = EncounterReport {
        encounter: args.encounter,
        seed,
        result,
        failure,
        hero,
    };

    match args.format.as_str() {
        "text" => {
            println!("Encounter Result");
            println!("================");
            println!("Encounter: {:?}", report.encounter);
            println!("Seed: {}", report.seed);
            match (&report.result, &report.failure) {
                (Some(value), _) => println!("Result: {}", value),
                (None, Some(failure)) => println!("Failure: {}", failure),
                (None, None) => println!("Result: none"),
            }
            println!();
            println!(
                "{}: level {}, {} gold, {} health, lockpicking {}",
                report.hero.name,
                report.hero.level(),
                report.hero.money(),
                report.hero.health,
                report.hero.lockpicking_level()
            );
        }
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
