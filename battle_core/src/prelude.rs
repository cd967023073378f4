//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CombatBias, EnemyId, EquipmentSlot, SkillLevel};

// Stats
pub use crate::stat_block::{Combatant, Loadout};

// Combat
pub use crate::combat::{Forecast, HitSampler, Outcome};
pub use crate::defense::resolve_hit;

// Session and data
pub use crate::battlefield::EnemyInstance;
pub use crate::config::{default_catalogs, Catalogs};
pub use crate::session::Session;
