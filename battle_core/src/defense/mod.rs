//! Defense system - Armor against incoming hits

mod armor;

pub use armor::{armor_dominates, resolve_hit};
