//! Session - Selections and battlefield owned by one calculator user
//!
//! Setters only mutate state. Callers ask for a fresh verdict with
//! [`Session::compute_outcome`] after whatever changes they make.

use crate::battlefield::{Battlefield, EnemyInstance};
use crate::combat::{resolve_battle_with_sampler, Forecast, HitSampler, Outcome, RngHitSampler};
use crate::config::{Catalogs, CombatConstants};
use crate::stat_block::{Combatant, Loadout};
use crate::types::{CombatBias, EnemyId, EquipmentSlot, SkillLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One user's calculator state
#[derive(Debug, Clone)]
pub struct Session {
    catalogs: Catalogs,
    constants: CombatConstants,
    loadout: Loadout,
    skill_level: SkillLevel,
    combat_bias: CombatBias,
    battlefield: Battlefield,
}

impl Session {
    /// Create a session with default constants
    pub fn new(catalogs: Catalogs) -> Self {
        Self::with_constants(catalogs, CombatConstants::default())
    }

    /// Create a session with custom constants
    pub fn with_constants(catalogs: Catalogs, constants: CombatConstants) -> Self {
        Session {
            catalogs,
            constants,
            loadout: Loadout::new(),
            skill_level: SkillLevel::default(),
            combat_bias: CombatBias::EQUAL,
            battlefield: Battlefield::new(),
        }
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn skill_level(&self) -> SkillLevel {
        self.skill_level
    }

    pub fn combat_bias(&self) -> CombatBias {
        self.combat_bias
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    // === Battlefield ===

    /// Add a mob from the catalog to the end of the battlefield
    ///
    /// Returns `None` and changes nothing when the name is empty or unknown.
    pub fn add_enemy(&mut self, name: &str) -> Option<&EnemyInstance> {
        if name.is_empty() {
            return None;
        }
        let Some(stats) = self.catalogs.mob(name) else {
            tracing::warn!(mob = name, "unknown mob, not added");
            return None;
        };
        let enemy = self.battlefield.add(name, stats);
        tracing::debug!(id = %enemy.id, mob = name, "enemy added");
        Some(enemy)
    }

    /// Remove an enemy; unknown ids are ignored
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<EnemyInstance> {
        self.battlefield.remove(id)
    }

    /// Remove every enemy from the battlefield
    pub fn clear_enemies(&mut self) {
        self.battlefield.clear();
    }

    // === Selections ===

    /// Select an item for a slot, or clear it with `None` or an empty name
    pub fn set_equipment(&mut self, slot: EquipmentSlot, item: Option<&str>) {
        match item.filter(|name| !name.is_empty()) {
            Some(name) => {
                self.loadout.equip(slot, name);
            }
            None => {
                self.loadout.unequip(slot);
            }
        }
    }

    /// Select a food for slot 0, 1 or 2, or clear it with `None` or an empty name
    pub fn set_food(&mut self, index: usize, food: Option<&str>) {
        let food = food.filter(|name| !name.is_empty()).map(str::to_string);
        if !self.loadout.set_food(index, food) {
            tracing::warn!(index, "food slot out of range, ignored");
        }
    }

    /// Set the skill level, clamped into `[0, 1]`
    pub fn set_skill_level(&mut self, value: f64) {
        self.skill_level = SkillLevel::new(value);
    }

    /// Set the combat bias, clamped into `[-1, 1]`
    pub fn set_combat_bias(&mut self, value: f64) {
        self.combat_bias = CombatBias::new(value);
    }

    // === Computation ===

    /// Player stats for the current selections
    pub fn player_stats(&self) -> Combatant {
        self.loadout.combatant(&self.catalogs, &self.constants, self.skill_level)
    }

    /// Simulate the battle with fresh randomness
    ///
    /// Identical state can produce different outcomes between calls.
    pub fn compute_outcome(&self) -> Outcome {
        let mut sampler = RngHitSampler::new(rand::thread_rng());
        self.compute_outcome_with_sampler(&mut sampler)
    }

    /// Simulate the battle with a seeded generator; the same seed and state
    /// always produce the same outcome
    pub fn compute_outcome_seeded(&self, seed: u64) -> Outcome {
        let mut sampler = RngHitSampler::new(StdRng::seed_from_u64(seed));
        self.compute_outcome_with_sampler(&mut sampler)
    }

    /// Simulate the battle drawing hit counts from `sampler`
    ///
    /// The fight runs on a snapshot; the battlefield itself is never touched.
    pub fn compute_outcome_with_sampler(&self, sampler: &mut impl HitSampler) -> Outcome {
        if self.battlefield.is_empty() {
            return Outcome::Waiting;
        }
        resolve_battle_with_sampler(
            &self.player_stats(),
            self.battlefield.snapshot(),
            self.combat_bias,
            self.constants.round_cap,
            sampler,
        )
    }

    /// Simulate the battle `trials` times
    pub fn forecast(&self, trials: u32) -> Forecast {
        let mut rng = rand::thread_rng();
        self.forecast_with_rng(trials, &mut rng)
    }

    /// Simulate the battle `trials` times from a fixed seed
    pub fn forecast_seeded(&self, trials: u32, seed: u64) -> Forecast {
        let mut rng = StdRng::seed_from_u64(seed);
        self.forecast_with_rng(trials, &mut rng)
    }

    /// Simulate the battle `trials` times with a provided RNG
    pub fn forecast_with_rng(&self, trials: u32, rng: &mut impl rand::Rng) -> Forecast {
        Forecast::run(
            &self.player_stats(),
            &self.battlefield,
            self.combat_bias,
            self.constants.round_cap,
            trials,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedHitSampler;
    use crate::config::default_catalogs;

    fn session() -> Session {
        Session::new(default_catalogs())
    }

    #[test]
    fn test_add_enemy() {
        let mut session = session();
        let boar = session.add_enemy("Boar").cloned().unwrap();
        assert_eq!(boar.name, "Boar");
        assert_eq!(boar.current_health, 10);
        assert_eq!(session.battlefield().len(), 1);
    }

    #[test]
    fn test_add_enemy_ignores_bad_names() {
        let mut session = session();
        assert!(session.add_enemy("").is_none());
        assert!(session.add_enemy("Dragon").is_none());
        assert!(session.battlefield().is_empty());
    }

    #[test]
    fn test_remove_enemy() {
        let mut session = session();
        let id = session.add_enemy("Boar").map(|e| e.id).unwrap();
        session.add_enemy("Neck");

        assert!(session.remove_enemy(EnemyId(1234)).is_none());
        assert_eq!(session.battlefield().len(), 2);

        assert!(session.remove_enemy(id).is_some());
        assert_eq!(session.battlefield().enemies()[0].name, "Neck");
    }

    #[test]
    fn test_catalog_changes_do_not_touch_placed_enemies() {
        let mut catalogs = default_catalogs();
        let mut session = Session::new(catalogs.clone());
        session.add_enemy("Boar");

        catalogs.mobs.insert(
            "Boar".to_string(),
            crate::config::MobStats {
                health: 999,
                damage: 999,
            },
        );
        let mut session2 = Session::new(catalogs);
        session2.add_enemy("Boar");

        assert_eq!(session.battlefield().enemies()[0].max_health, 10);
        assert_eq!(session2.battlefield().enemies()[0].max_health, 999);
    }

    #[test]
    fn test_set_equipment_and_clear() {
        let mut session = session();
        session.set_skill_level(1.0);
        session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
        assert_eq!(session.player_stats().damage, 55);

        session.set_equipment(EquipmentSlot::Weapon, Some(""));
        assert_eq!(session.loadout().equipped(EquipmentSlot::Weapon), None);
        assert_eq!(session.player_stats().damage, 0);

        session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
        session.set_equipment(EquipmentSlot::Weapon, None);
        assert_eq!(session.player_stats().damage, 0);
    }

    #[test]
    fn test_set_food() {
        let mut session = session();
        session.set_food(0, Some("Black soup"));
        session.set_food(5, Some("Black soup"));
        assert_eq!(session.player_stats().health, 75);

        session.set_food(0, Some(""));
        assert_eq!(session.player_stats().health, 25);
    }

    #[test]
    fn test_sliders_are_clamped() {
        let mut session = session();
        session.set_skill_level(2.0);
        assert_eq!(session.skill_level(), SkillLevel::MAX);
        session.set_combat_bias(-3.0);
        assert_eq!(session.combat_bias().value(), -1.0);
    }

    #[test]
    fn test_empty_battlefield_is_waiting() {
        let mut session = session();
        session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
        session.set_combat_bias(1.0);
        assert_eq!(session.compute_outcome(), Outcome::Waiting);
        assert_eq!(session.compute_outcome_seeded(1), Outcome::Waiting);
    }

    #[test]
    fn test_outcome_follows_state_changes() {
        let mut session = session();
        session.add_enemy("Boar");
        let mut sampler = FixedHitSampler::guaranteed_only();
        let outcome = session.compute_outcome_with_sampler(&mut sampler);
        assert!(outcome.is_defeat());

        session.set_skill_level(1.0);
        session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
        let outcome = session.compute_outcome_with_sampler(&mut sampler);
        assert!(outcome.is_victory());
    }

    #[test]
    fn test_outcome_leaves_battlefield_untouched() {
        let mut session = session();
        session.set_skill_level(1.0);
        session.set_equipment(EquipmentSlot::Weapon, Some("Iron Sword 1"));
        session.add_enemy("Boar");
        session.add_enemy("Neck");
        let before = session.battlefield().clone();

        let outcome = session.compute_outcome_with_sampler(&mut FixedHitSampler::guaranteed_only());
        assert!(outcome.is_victory());
        assert_eq!(session.battlefield(), &before);
        assert_eq!(session.battlefield().enemies()[0].current_health, 10);

        // Every run starts from the full roster again
        let again = session.compute_outcome_with_sampler(&mut FixedHitSampler::guaranteed_only());
        assert_eq!(again, outcome);
    }

    #[test]
    fn test_seeded_outcome_is_stable() {
        let mut session = session();
        session.set_equipment(EquipmentSlot::Weapon, Some("Club 1"));
        session.set_combat_bias(-0.6);
        session.add_enemy("Greydwarf");
        session.add_enemy("Greyling");

        assert_eq!(
            session.compute_outcome_seeded(77),
            session.compute_outcome_seeded(77)
        );
        assert_eq!(
            session.forecast_seeded(40, 77),
            session.forecast_seeded(40, 77)
        );
        assert_eq!(session.forecast_seeded(40, 77).trials, 40);
    }

    #[test]
    fn test_custom_round_cap() {
        let constants = CombatConstants {
            round_cap: 1,
            ..Default::default()
        };
        let mut session = Session::with_constants(default_catalogs(), constants);
        session.set_food(0, Some("Ashlands gourmet bowl"));
        session.add_enemy("Greydwarf");

        // One damage per round cannot kill 40 health in one round
        let outcome = session.compute_outcome_with_sampler(&mut FixedHitSampler::guaranteed_only());
        assert_eq!(outcome, Outcome::Stalemate);
    }
}
