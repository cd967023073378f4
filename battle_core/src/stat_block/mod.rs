//! Stat aggregation - Player stats derived from equipment, food and skill

mod aggregator;

pub use aggregator::StatAccumulator;

use crate::config::{Catalogs, CombatConstants};
use crate::source::{BaseStatsSource, FoodSource, GearSource, StatSource};
use crate::types::{EquipmentSlot, SkillLevel, FOOD_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Effective stats of the player going into a battle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub health: i64,
    pub stamina: i64,
    pub armor: u32,
    pub damage: u32,
}

impl Combatant {
    /// Build a combatant from a set of stat sources
    ///
    /// Sources are applied in ascending priority order. The result depends
    /// only on the inputs, so calling this twice yields identical stats.
    pub fn from_sources(
        catalogs: &Catalogs,
        sources: &[Box<dyn StatSource>],
        skill: SkillLevel,
    ) -> Self {
        let mut accumulator = StatAccumulator::new();

        // Sort sources by priority
        let mut sorted_sources: Vec<_> = sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        for source in sorted_sources {
            source.apply(catalogs, &mut accumulator);
        }

        accumulator.into_combatant(skill)
    }

    /// Whether the combatant can still fight
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Equipment and food selections of the player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    /// Equipped item names by slot
    #[serde(default)]
    equipped: HashMap<EquipmentSlot, String>,
    /// Food names by slot
    #[serde(default)]
    food: [Option<String>; FOOD_SLOTS],
}

impl Loadout {
    /// Create an empty loadout
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item, returning the one it replaces
    pub fn equip(&mut self, slot: EquipmentSlot, item: impl Into<String>) -> Option<String> {
        self.equipped.insert(slot, item.into())
    }

    /// Clear a slot, returning what was in it
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        self.equipped.remove(&slot)
    }

    /// Item equipped in a slot
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&str> {
        self.equipped.get(&slot).map(String::as_str)
    }

    /// All equipped items, in slot order
    pub fn all_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> {
        EquipmentSlot::all()
            .iter()
            .filter_map(|slot| self.equipped(*slot).map(|item| (*slot, item)))
    }

    /// Put a food in a slot (or empty it); returns false for an index past the last slot
    pub fn set_food(&mut self, index: usize, food: Option<String>) -> bool {
        match self.food.get_mut(index) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// All eaten foods, in slot order
    pub fn foods(&self) -> impl Iterator<Item = &str> {
        self.food.iter().filter_map(|f| f.as_deref())
    }

    /// Stat sources for this loadout, including the base stats
    pub fn sources(&self, constants: &CombatConstants) -> Vec<Box<dyn StatSource>> {
        let mut sources: Vec<Box<dyn StatSource>> = Vec::new();
        sources.push(Box::new(BaseStatsSource::new(constants)));

        for (slot, item) in self.all_equipped() {
            sources.push(Box::new(GearSource::new(slot, item)));
        }
        for food in self.foods() {
            sources.push(Box::new(FoodSource::new(food)));
        }

        sources
    }

    /// Aggregate this loadout into combatant stats
    pub fn combatant(
        &self,
        catalogs: &Catalogs,
        constants: &CombatConstants,
        skill: SkillLevel,
    ) -> Combatant {
        Combatant::from_sources(catalogs, &self.sources(constants), skill)
    }
}
