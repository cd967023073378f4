//! StatAccumulator - Collects stat contributions before producing a Combatant

use super::Combatant;
use crate::types::SkillLevel;

/// Accumulates stat contributions from various sources
///
/// Arrow damage is collected separately from weapon damage because it only
/// counts when the weapon turns out to be bow-class, which is not known
/// until every source has been applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatAccumulator {
    // === Resources ===
    pub health_flat: i64,
    pub stamina_flat: i64,

    // === Defenses ===
    pub armor_flat: u32,

    // === Offense ===
    pub weapon_damage: u32,
    pub arrow_damage: u32,
    pub bow_equipped: bool,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Weapon damage plus the arrow bonus when a bow is equipped
    pub fn raw_damage(&self) -> u32 {
        if self.bow_equipped {
            self.weapon_damage.saturating_add(self.arrow_damage)
        } else {
            self.weapon_damage
        }
    }

    /// Damage after scaling by skill, rounded half up
    pub fn scaled_damage(&self, skill: SkillLevel) -> u32 {
        let scaled = f64::from(self.raw_damage()) * skill.value();
        // Skill is clamped to [0, 1] so the product is never negative
        scaled.round() as u32
    }

    /// Produce the final combatant stats
    pub fn into_combatant(self, skill: SkillLevel) -> Combatant {
        Combatant {
            health: self.health_flat,
            stamina: self.stamina_flat,
            armor: self.armor_flat,
            damage: self.scaled_damage(skill),
        }
    }
}
