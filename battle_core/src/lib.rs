//! battle_core - Battle forecast engine for a survival game combat calculator
//!
//! This library provides:
//! - Catalogs: Static mob, armor, weapon, arrow and food tables (TOML or JSON)
//! - Stat aggregation: Player health, stamina, armor and damage from a loadout
//! - resolve_hit: The damage a single hit deals through armor
//! - Battle resolution: Round-based simulation ending in an Outcome
//! - Session: Selections and battlefield with explicit recomputation

pub mod battlefield;
pub mod combat;
pub mod config;
pub mod defense;
pub mod prelude;
pub mod session;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use battlefield::{Battlefield, EnemyInstance};
pub use combat::{
    resolve_battle, resolve_battle_with_rng, resolve_battle_with_sampler, FixedHitSampler,
    Forecast, HitSampler, Outcome, RngHitSampler,
};
pub use config::{default_catalogs, Catalogs, CombatConstants, ConfigError, Scenario};
pub use defense::resolve_hit;
pub use session::Session;
pub use source::{BaseStatsSource, FoodSource, GearSource, StatSource};
pub use stat_block::{Combatant, Loadout, StatAccumulator};
pub use types::{CombatBias, EnemyId, EquipmentSlot, HitMultiplier, SkillLevel};
