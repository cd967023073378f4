//! Hit sampling - How many attacks land in a round

use crate::types::HitMultiplier;
use rand::Rng;

/// Decides how many hits an attacker lands against one target in one round
pub trait HitSampler {
    fn hits(&mut self, multiplier: HitMultiplier) -> u32;
}

/// Samples the bonus hit from a random number generator
///
/// Every round lands the guaranteed hits, plus one extra hit with
/// probability equal to the multiplier's fractional part.
pub struct RngHitSampler<R> {
    rng: R,
}

impl<R: Rng> RngHitSampler<R> {
    pub fn new(rng: R) -> Self {
        RngHitSampler { rng }
    }
}

impl<R: Rng> HitSampler for RngHitSampler<R> {
    fn hits(&mut self, multiplier: HitMultiplier) -> u32 {
        let bonus = if self.rng.gen::<f64>() < multiplier.bonus_chance() {
            1
        } else {
            0
        };
        multiplier.guaranteed() + bonus
    }
}

/// Deterministic sampler for tests and "worst/best case" previews
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedHitSampler {
    /// Land the bonus hit whenever it has any chance at all
    pub always_bonus: bool,
}

impl FixedHitSampler {
    /// Only ever land the guaranteed hits
    pub fn guaranteed_only() -> Self {
        FixedHitSampler {
            always_bonus: false,
        }
    }

    /// Land the bonus hit whenever the multiplier has a fractional part
    pub fn with_bonus() -> Self {
        FixedHitSampler { always_bonus: true }
    }
}

impl HitSampler for FixedHitSampler {
    fn hits(&mut self, multiplier: HitMultiplier) -> u32 {
        let bonus = u32::from(self.always_bonus && multiplier.bonus_chance() > 0.0);
        multiplier.guaranteed() + bonus
    }
}
