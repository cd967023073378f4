//! Forecast - Summary of many independent runs of the same battle

use super::resolution::resolve_battle_with_sampler;
use super::result::Outcome;
use super::sampler::RngHitSampler;
use crate::battlefield::Battlefield;
use crate::stat_block::Combatant;
use crate::types::CombatBias;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tally of outcomes over repeated simulations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub trials: u32,
    pub victories: u32,
    pub defeats: u32,
    pub stalemates: u32,
    pub waiting: u32,
    /// Sum of health percentages over all victories
    victory_health_total: i64,
}

impl Forecast {
    /// Simulate the same battle `trials` times, each on a fresh snapshot
    /// of the battlefield
    pub fn run(
        player: &Combatant,
        battlefield: &Battlefield,
        bias: CombatBias,
        round_cap: u32,
        trials: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut forecast = Forecast::default();
        let mut sampler = RngHitSampler::new(rng);

        for _ in 0..trials {
            let working = battlefield.snapshot();
            let outcome =
                resolve_battle_with_sampler(player, working, bias, round_cap, &mut sampler);
            forecast.record(&outcome);
        }

        tracing::debug!(
            trials,
            victories = forecast.victories,
            defeats = forecast.defeats,
            stalemates = forecast.stalemates,
            "forecast finished"
        );

        forecast
    }

    /// Add one outcome to the tally
    pub fn record(&mut self, outcome: &Outcome) {
        self.trials += 1;
        match outcome {
            Outcome::Waiting => self.waiting += 1,
            Outcome::Victory {
                health_percentage, ..
            } => {
                self.victories += 1;
                self.victory_health_total += health_percentage;
            }
            Outcome::Defeat { .. } => self.defeats += 1,
            Outcome::Stalemate => self.stalemates += 1,
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.trials)
        }
    }

    /// Fraction of runs won, in `[0, 1]`
    pub fn victory_rate(&self) -> f64 {
        self.rate(self.victories)
    }

    /// Fraction of runs lost, in `[0, 1]`
    pub fn defeat_rate(&self) -> f64 {
        self.rate(self.defeats)
    }

    /// Fraction of runs that hit the round cap, in `[0, 1]`
    pub fn stalemate_rate(&self) -> f64 {
        self.rate(self.stalemates)
    }

    /// Average remaining health percentage over the won runs
    pub fn mean_victory_health(&self) -> Option<f64> {
        if self.victories == 0 {
            None
        } else {
            Some(self.victory_health_total as f64 / f64::from(self.victories))
        }
    }

    /// Tag of the most frequent outcome ("victory", "defeat", ...)
    ///
    /// Ties favor the player: victory, then stalemate, then defeat.
    pub fn most_likely(&self) -> &'static str {
        if self.trials == 0 || self.waiting == self.trials {
            return "waiting";
        }
        let ranked = [
            (self.victories, "victory"),
            (self.stalemates, "stalemate"),
            (self.defeats, "defeat"),
        ];
        let mut best = ranked[0];
        for entry in ranked {
            if entry.0 > best.0 {
                best = entry;
            }
        }
        best.1
    }

    /// One-line summary, e.g. "72% victory, 28% defeat"
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.victories > 0 {
            parts.push(format!("{:.0}% victory", self.victory_rate() * 100.0));
        }
        if self.defeats > 0 {
            parts.push(format!("{:.0}% defeat", self.defeat_rate() * 100.0));
        }
        if self.stalemates > 0 {
            parts.push(format!("{:.0}% stalemate", self.stalemate_rate() * 100.0));
        }

        if parts.is_empty() {
            "No battles simulated".to_string()
        } else {
            parts.join(", ")
        }
    }
}
