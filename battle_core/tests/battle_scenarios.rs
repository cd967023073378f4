//! Integration test: Catalogs -> Session selections -> Battle outcome
//!
//! These tests drive the engine only through the session operations a
//! calculator front end would use.

use battle_core::combat::{FixedHitSampler, HitSampler, RngHitSampler};
use battle_core::config::{parse_catalogs, parse_scenario};
use battle_core::{Catalogs, CombatBias, EquipmentSlot, HitMultiplier, Outcome, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CATALOGS: &str = r#"
[mobs."Boar"]
health = 10
damage = 10

[mobs."Boar *"]
health = 20
damage = 15

[mobs."Greydwarf"]
health = 40
damage = 10

[armor.helmet]
"Leather Helmet 1" = 2

[armor.shield]
"Wood Shield (Round) 1" = 6

[weapons]
"Iron Sword 1" = 55
"Crude Bow 1" = 22

[arrows]
"Needle Arrow" = 62

[foods."Black soup"]
health = 50
stamina = 17
"#;

fn catalogs() -> Catalogs {
    parse_catalogs(CATALOGS).expect("test catalogs parse")
}

/// Counts hit samples per multiplier while delegating to a real RNG
struct CountingSampler {
    inner: RngHitSampler<StdRng>,
    player_hits: Vec<u32>,
    enemy_hits: Vec<u32>,
    player_multiplier: HitMultiplier,
}

impl HitSampler for CountingSampler {
    fn hits(&mut self, multiplier: HitMultiplier) -> u32 {
        let hits = self.inner.hits(multiplier);
        if multiplier == self.player_multiplier {
            self.player_hits.push(hits);
        } else {
            self.enemy_hits.push(hits);
        }
        hits
    }
}

#[test]
fn unarmed_player_is_defeated_by_a_boar() {
    let mut session = Session::new(catalogs());
    session.set_skill_level(0.5);
    session.set_combat_bias(0.0);
    session.add_enemy("Boar");

    let stats = session.player_stats();
    assert_eq!(stats.health, 25);
    assert_eq!(stats.armor, 0);
    assert_eq!(stats.damage, 0);

    // No fractional multipliers at bias 0, so every run is the same
    for seed in 0..20 {
        match session.compute_outcome_seeded(seed) {
            Outcome::Defeat {
                remaining_enemies,
                remaining_enemy_health,
            } => {
                assert_eq!(remaining_enemies, 1);
                assert_eq!(remaining_enemy_health, 7);
            }
            other => panic!("expected defeat, got {:?}", other),
        }
    }
}

#[test]
fn iron_sword_one_shots_a_strong_boar() {
    let mut session = Session::new(catalogs());
    session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
    session.set_skill_level(1.0);
    session.add_enemy("Boar *");

    assert_eq!(session.player_stats().damage, 55);

    let outcome = session.compute_outcome();
    assert_eq!(
        outcome,
        Outcome::Victory {
            final_health: 25,
            initial_health: 25,
            health_percentage: 100,
        }
    );
    assert_eq!(
        outcome.message(),
        "Victory! You would defeat all enemies with 25 HP remaining (100% health)."
    );
}

#[test]
fn full_player_bias_gives_exactly_two_hits() {
    let mut session = Session::new(catalogs());
    session.set_combat_bias(1.0);
    // Enough health on both sides for a long fight
    session.set_food(0, Some("Black soup"));
    session.set_food(1, Some("Black soup"));
    session.set_food(2, Some("Black soup"));
    session.set_equipment(EquipmentSlot::Shield, Some("Wood Shield (Round) 1"));
    for _ in 0..5 {
        session.add_enemy("Greydwarf");
    }

    let bias = session.combat_bias();
    let mut sampler = CountingSampler {
        inner: RngHitSampler::new(StdRng::seed_from_u64(2024)),
        player_hits: Vec::new(),
        enemy_hits: Vec::new(),
        player_multiplier: bias.player_multiplier(),
    };

    for _ in 0..50 {
        let _ = session.compute_outcome_with_sampler(&mut sampler);
    }

    assert!(sampler.player_hits.len() > 100);
    assert!(sampler.enemy_hits.len() > 100);
    assert!(sampler.player_hits.iter().all(|&h| h == 2));
    assert!(sampler.enemy_hits.iter().all(|&h| h == 1));
}

#[test]
fn bow_uses_arrow_bonus() {
    let mut session = Session::new(catalogs());
    session.set_skill_level(1.0);
    session.set_equipment(EquipmentSlot::Weapon, Some("Crude Bow 1"));
    session.set_equipment(EquipmentSlot::Arrow, Some("Needle Arrow"));
    assert_eq!(session.player_stats().damage, 84);

    session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
    assert_eq!(session.player_stats().damage, 55);
}

#[test]
fn simulation_leaves_battlefield_untouched() {
    let mut session = Session::new(catalogs());
    session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
    session.set_skill_level(1.0);
    session.add_enemy("Boar");
    session.add_enemy("Greydwarf");

    let before = session.battlefield().clone();
    let _ = session.compute_outcome();
    let _ = session.forecast(25);
    assert_eq!(session.battlefield(), &before);
}

#[test]
fn every_outcome_terminates_across_the_slider_range() {
    let mut session = Session::new(catalogs());
    session.add_enemy("Greydwarf");
    session.add_enemy("Boar *");

    let mut rng = StdRng::seed_from_u64(99);
    for step in -10..=10 {
        let bias = f64::from(step) / 10.0;
        session.set_combat_bias(bias);
        for skill in [0.0, 0.25, 0.5, 1.0] {
            session.set_skill_level(skill);
            let mut sampler = RngHitSampler::new(&mut rng);
            let outcome = session.compute_outcome_with_sampler(&mut sampler);
            assert_ne!(outcome, Outcome::Waiting);
        }
    }
}

#[test]
fn worst_and_best_case_bracket_the_forecast() {
    let mut session = Session::new(catalogs());
    session.set_equipment(EquipmentSlot::Weapon, Some("Crude Bow 1"));
    session.set_skill_level(1.0);
    session.set_combat_bias(0.5);
    session.add_enemy("Greydwarf");

    // Bonus hits only ever help the player at positive bias
    let worst = session.compute_outcome_with_sampler(&mut FixedHitSampler::guaranteed_only());
    let best = session.compute_outcome_with_sampler(&mut FixedHitSampler::with_bonus());

    match (worst, best) {
        (
            Outcome::Victory {
                final_health: worst_health, ..
            },
            Outcome::Victory {
                final_health: best_health, ..
            },
        ) => {
            assert_eq!(worst_health, 15);
            assert_eq!(best_health, 25);
        }
        other => panic!("expected two victories, got {:?}", other),
    }
}

#[test]
fn scenario_file_round_trip_through_session() {
    let scenario = parse_scenario(
        r#"
food = ["Black soup"]
skill_level = 1.0
combat_bias = 0.0
enemies = ["Boar", "Boar *", "Unknown Beast"]

[equipment]
weapon = "Iron Sword 1"
helmet = "Leather Helmet 1"
"#,
    )
    .expect("scenario parses");

    let session = scenario.build_session(catalogs());
    assert_eq!(session.battlefield().len(), 2);
    assert_eq!(session.combat_bias(), CombatBias::EQUAL);

    let stats = session.player_stats();
    assert_eq!(stats.health, 75);
    assert_eq!(stats.armor, 2);

    // 55 damage kills both boars in round one
    assert_eq!(session.compute_outcome(), Outcome::victory(75, 75));
}
