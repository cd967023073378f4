//! Static lookup tables for mobs, armor, weapons, arrows and food
//!
//! Every lookup is permissive: a name that is not in the catalog contributes
//! zero instead of failing, so a half-filled selection still produces stats.

use super::ConfigError;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog stats of a mob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobStats {
    pub health: u32,
    pub damage: u32,
}

/// Bonuses granted by eating a food
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStats {
    #[serde(default)]
    pub health: u32,
    #[serde(default)]
    pub stamina: u32,
}

/// Armor values per slot, keyed by item name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmorCatalog {
    #[serde(default)]
    pub helmet: BTreeMap<String, u32>,
    #[serde(default)]
    pub chest: BTreeMap<String, u32>,
    #[serde(default)]
    pub leg: BTreeMap<String, u32>,
    #[serde(default)]
    pub cape: BTreeMap<String, u32>,
    #[serde(default)]
    pub shield: BTreeMap<String, u32>,
}

impl ArmorCatalog {
    /// Items for an armor slot; weapon and arrow slots have no armor table
    pub fn slot(&self, slot: EquipmentSlot) -> Option<&BTreeMap<String, u32>> {
        match slot {
            EquipmentSlot::Helmet => Some(&self.helmet),
            EquipmentSlot::Chest => Some(&self.chest),
            EquipmentSlot::Leg => Some(&self.leg),
            EquipmentSlot::Cape => Some(&self.cape),
            EquipmentSlot::Shield => Some(&self.shield),
            EquipmentSlot::Weapon | EquipmentSlot::Arrow => None,
        }
    }
}

/// All static tables consumed by the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default)]
    pub mobs: BTreeMap<String, MobStats>,
    #[serde(default)]
    pub armor: ArmorCatalog,
    #[serde(default)]
    pub weapons: BTreeMap<String, u32>,
    #[serde(default)]
    pub arrows: BTreeMap<String, u32>,
    #[serde(default)]
    pub foods: BTreeMap<String, FoodStats>,
}

impl Catalogs {
    /// Create an empty catalog set
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a mob; unlike the stat lookups there is no sensible default
    pub fn mob(&self, name: &str) -> Option<MobStats> {
        self.mobs.get(name).copied()
    }

    /// Armor of an item in a slot, 0 when unknown
    pub fn armor_value(&self, slot: EquipmentSlot, item: &str) -> u32 {
        self.armor
            .slot(slot)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0)
    }

    /// Base damage of a weapon, 0 when unknown
    pub fn weapon_damage(&self, weapon: &str) -> u32 {
        self.weapons.get(weapon).copied().unwrap_or(0)
    }

    /// Bonus damage of an arrow, 0 when unknown
    pub fn arrow_damage(&self, arrow: &str) -> u32 {
        self.arrows.get(arrow).copied().unwrap_or(0)
    }

    /// Bonuses of a food, zero when unknown
    pub fn food(&self, food: &str) -> FoodStats {
        self.foods.get(food).copied().unwrap_or_default()
    }

    /// Item names selectable for an equipment slot, in catalog order
    pub fn items_for(&self, slot: EquipmentSlot) -> Vec<&str> {
        let table = match slot {
            EquipmentSlot::Weapon => Some(&self.weapons),
            EquipmentSlot::Arrow => Some(&self.arrows),
            armor_slot => self.armor.slot(armor_slot),
        };
        table
            .map(|items| items.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Reject entries that could never be selected
    pub fn validate(&self) -> Result<(), ConfigError> {
        let empty_in = |table: &str| {
            ConfigError::ValidationError(format!("empty item name in {table} catalog"))
        };

        if self.mobs.keys().any(|name| name.trim().is_empty()) {
            return Err(empty_in("mob"));
        }
        for slot in EquipmentSlot::armor_slots() {
            if let Some(items) = self.armor.slot(*slot) {
                if items.keys().any(|name| name.trim().is_empty()) {
                    return Err(empty_in(slot.as_str()));
                }
            }
        }
        if self.weapons.keys().any(|name| name.trim().is_empty()) {
            return Err(empty_in("weapon"));
        }
        if self.arrows.keys().any(|name| name.trim().is_empty()) {
            return Err(empty_in("arrow"));
        }
        if self.foods.keys().any(|name| name.trim().is_empty()) {
            return Err(empty_in("food"));
        }
        Ok(())
    }
}

/// Load catalogs from a TOML or JSON file
pub fn load_catalogs(path: &Path) -> Result<Catalogs, ConfigError> {
    let catalogs: Catalogs = super::load_any(path)?;
    catalogs.validate()?;
    tracing::debug!(
        path = %path.display(),
        mobs = catalogs.mobs.len(),
        weapons = catalogs.weapons.len(),
        foods = catalogs.foods.len(),
        "loaded catalogs"
    );
    Ok(catalogs)
}

/// Load catalogs from a TOML string
pub fn parse_catalogs(content: &str) -> Result<Catalogs, ConfigError> {
    let catalogs: Catalogs = super::parse_toml(content)?;
    catalogs.validate()?;
    Ok(catalogs)
}

/// Load catalogs from a JSON string
pub fn parse_catalogs_json(content: &str) -> Result<Catalogs, ConfigError> {
    let catalogs: Catalogs = super::parse_json(content)?;
    catalogs.validate()?;
    Ok(catalogs)
}

/// Get the bundled catalogs
pub fn default_catalogs() -> Catalogs {
    let toml = include_str!("../../config/catalogs.toml");
    parse_catalogs(toml).unwrap_or_else(|err| {
        tracing::warn!(
            %err,
            "bundled catalogs failed to parse, using a minimal set"
        );
        let mut catalogs = Catalogs::new();
        catalogs.mobs.insert(
            "Boar".to_string(),
            MobStats {
                health: 10,
                damage: 10,
            },
        );
        catalogs
    })
}
