//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod food;
mod gear;

pub use base_stats::BaseStatsSource;
pub use food::FoodSource;
pub use gear::GearSource;

use crate::config::Catalogs;
use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a Combatant
pub trait StatSource: Send + Sync {
    /// Identifier for this source (item or food name for selections)
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Gear: 0
    /// - Food: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator, resolving names
    /// against the catalogs
    fn apply(&self, catalogs: &Catalogs, stats: &mut StatAccumulator);
}
