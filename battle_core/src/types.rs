//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};

/// Marker substring identifying bow-class weapons
pub const BOW_MARKER: &str = "Bow";

/// Number of food slots a player can fill
pub const FOOD_SLOTS: usize = 3;

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Helmet,
    Chest,
    Leg,
    Cape,
    Shield,
    Weapon,
    Arrow,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Leg,
            EquipmentSlot::Cape,
            EquipmentSlot::Shield,
            EquipmentSlot::Weapon,
            EquipmentSlot::Arrow,
        ]
    }

    /// Slots that contribute armor
    pub fn armor_slots() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Leg,
            EquipmentSlot::Cape,
            EquipmentSlot::Shield,
        ]
    }

    /// Lowercase name, as used in catalog and scenario files
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentSlot::Helmet => "helmet",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Leg => "leg",
            EquipmentSlot::Cape => "cape",
            EquipmentSlot::Shield => "shield",
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Arrow => "arrow",
        }
    }
}

/// Whether a weapon benefits from an equipped arrow
pub fn is_bow_class(weapon: &str) -> bool {
    weapon.contains(BOW_MARKER)
}

/// Identifier of an enemy placed on a battlefield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u64);

impl From<u64> for EnemyId {
    fn from(id: u64) -> Self {
        EnemyId(id)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fraction of the maximum skill a player has with their weapon, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SkillLevel(f64);

impl SkillLevel {
    /// Full skill, damage is unscaled
    pub const MAX: SkillLevel = SkillLevel(1.0);

    /// Create a skill level, clamping into `[0, 1]` (NaN becomes 0)
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return SkillLevel(0.0);
        }
        SkillLevel(value.clamp(0.0, 1.0))
    }

    /// The raw scalar
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel(0.5)
    }
}

impl From<f64> for SkillLevel {
    fn from(value: f64) -> Self {
        SkillLevel::new(value)
    }
}

impl From<SkillLevel> for f64 {
    fn from(skill: SkillLevel) -> Self {
        skill.0
    }
}

/// Which side lands more attacks per round, in `[-1, 1]`
///
/// Zero is symmetric, positive values favor the player and negative values
/// favor the enemies. A bias of `0.3` lets the player land 130% of their
/// attacks while enemies keep landing 100%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct CombatBias(f64);

impl CombatBias {
    /// Both sides land the same number of attacks
    pub const EQUAL: CombatBias = CombatBias(0.0);

    /// Create a bias, clamping into `[-1, 1]` (NaN becomes 0)
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return CombatBias::EQUAL;
        }
        CombatBias(value.clamp(-1.0, 1.0))
    }

    /// The raw scalar
    pub fn value(self) -> f64 {
        self.0
    }

    /// Hit multiplier for the player, in `[1, 2]`
    pub fn player_multiplier(self) -> HitMultiplier {
        HitMultiplier(1.0 + self.0.max(0.0))
    }

    /// Hit multiplier for every enemy, in `[1, 2]`
    pub fn enemy_multiplier(self) -> HitMultiplier {
        HitMultiplier(1.0 + (-self.0).max(0.0))
    }

    /// Short badge text, e.g. "Equal" or "+30% Player"
    pub fn label(self) -> String {
        let percent = (self.0.abs() * 100.0).round();
        if self.0 == 0.0 {
            "Equal".to_string()
        } else if self.0 > 0.0 {
            format!("+{percent}% Player")
        } else {
            format!("+{percent}% Enemies")
        }
    }

    /// Sentence describing how many attacks each side lands
    pub fn describe(self) -> String {
        let percent = ((1.0 + self.0.abs()) * 100.0).round();
        if self.0 == 0.0 {
            "Both sides land equal attacks".to_string()
        } else if self.0 > 0.0 {
            format!("Player lands {percent}% attacks, enemies land 100% attacks")
        } else {
            format!("Player lands 100% attacks, enemies land {percent}% attacks")
        }
    }
}

impl From<f64> for CombatBias {
    fn from(value: f64) -> Self {
        CombatBias::new(value)
    }
}

impl From<CombatBias> for f64 {
    fn from(bias: CombatBias) -> Self {
        bias.0
    }
}

/// Expected attacks landed per round, split into whole hits and a bonus chance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitMultiplier(f64);

impl HitMultiplier {
    /// Create a multiplier; negative and NaN values become 0
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return HitMultiplier(0.0);
        }
        HitMultiplier(value.max(0.0))
    }

    /// The raw multiplier
    pub fn value(self) -> f64 {
        self.0
    }

    /// Hits landed every round
    pub fn guaranteed(self) -> u32 {
        self.0.floor() as u32
    }

    /// Probability of one extra hit on top of the guaranteed ones
    pub fn bonus_chance(self) -> f64 {
        self.0 - self.0.floor()
    }
}
