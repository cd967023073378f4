//! Combat resolution - Simulate the player against a roster of enemies

mod forecast;
mod resolution;
mod result;
mod sampler;

pub use forecast::Forecast;
pub use resolution::{resolve_battle, resolve_battle_with_rng, resolve_battle_with_sampler};
pub use result::Outcome;
pub use sampler::{FixedHitSampler, HitSampler, RngHitSampler};
