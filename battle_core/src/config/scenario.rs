//! Scenario files - a full session snapshot in one TOML document

use super::{Catalogs, CombatConstants, ConfigError};
use crate::session::Session;
use crate::types::{CombatBias, EquipmentSlot, SkillLevel, FOOD_SLOTS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Item names selected per equipment slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSelection {
    pub helmet: Option<String>,
    pub chest: Option<String>,
    pub leg: Option<String>,
    pub cape: Option<String>,
    pub shield: Option<String>,
    pub weapon: Option<String>,
    pub arrow: Option<String>,
}

impl EquipmentSelection {
    fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        let item = match slot {
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Chest => &self.chest,
            EquipmentSlot::Leg => &self.leg,
            EquipmentSlot::Cape => &self.cape,
            EquipmentSlot::Shield => &self.shield,
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Arrow => &self.arrow,
        };
        item.as_deref()
    }
}

/// Everything needed to reproduce one forecast
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub equipment: EquipmentSelection,
    /// Up to three foods, in slot order
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub combat_bias: CombatBias,
    /// Mob names added to the battlefield, in order
    #[serde(default)]
    pub enemies: Vec<String>,
    /// Number of runs for a forecast; a single run when absent
    #[serde(default)]
    pub trials: Option<u32>,
    /// Seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub constants: CombatConstants,
}

impl Scenario {
    /// Reject scenarios that cannot be expressed as a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.food.len() > FOOD_SLOTS {
            return Err(ConfigError::ValidationError(format!(
                "scenario lists {} foods, at most {} can be eaten",
                self.food.len(),
                FOOD_SLOTS
            )));
        }
        if self.trials == Some(0) {
            return Err(ConfigError::ValidationError(
                "trials must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a session by replaying the scenario through the session setters
    ///
    /// Unknown enemies are skipped the same way `Session::add_enemy` skips them.
    pub fn build_session(&self, catalogs: Catalogs) -> Session {
        let mut session = Session::with_constants(catalogs, self.constants.clone());

        for slot in EquipmentSlot::all() {
            session.set_equipment(*slot, self.equipment.get(*slot));
        }
        for (index, food) in self.food.iter().enumerate() {
            session.set_food(index, Some(food.as_str()));
        }
        session.set_skill_level(self.skill_level.value());
        session.set_combat_bias(self.combat_bias.value());
        for enemy in &self.enemies {
            session.add_enemy(enemy);
        }

        session
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = super::load_toml(path)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = super::parse_toml(content)?;
    scenario.validate()?;
    Ok(scenario)
}
