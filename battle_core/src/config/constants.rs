//! Combat constants configuration

use serde::{Deserialize, Serialize};

/// Tunable combat constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Health of a player who has eaten nothing
    #[serde(default = "default_base_health")]
    pub base_health: i64,
    /// Stamina of a player who has eaten nothing
    #[serde(default = "default_base_stamina")]
    pub base_stamina: i64,
    /// Rounds simulated before a battle is called a stalemate
    #[serde(default = "default_round_cap")]
    pub round_cap: u32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            base_health: default_base_health(),
            base_stamina: default_base_stamina(),
            round_cap: default_round_cap(),
        }
    }
}

fn default_base_health() -> i64 {
    25
}
fn default_base_stamina() -> i64 {
    50
}
fn default_round_cap() -> u32 {
    100
}
