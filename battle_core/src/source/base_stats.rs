//! BaseStatsSource - Stats every player starts with

use crate::config::{Catalogs, CombatConstants};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Health and stamina of a player before eating
pub struct BaseStatsSource {
    pub health: i64,
    pub stamina: i64,
}

impl BaseStatsSource {
    /// Create a base stats source from the combat constants
    pub fn new(constants: &CombatConstants) -> Self {
        BaseStatsSource {
            health: constants.base_health,
            stamina: constants.base_stamina,
        }
    }
}

impl Default for BaseStatsSource {
    fn default() -> Self {
        Self::new(&CombatConstants::default())
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, _catalogs: &Catalogs, stats: &mut StatAccumulator) {
        stats.health_flat += self.health;
        stats.stamina_flat += self.stamina;
    }
}
