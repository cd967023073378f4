//! Outcome - Verdict of a simulated battle

use serde::{Deserialize, Serialize};

/// Result of simulating a battle to its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// No enemies on the battlefield, nothing was simulated
    Waiting,
    /// Every enemy was defeated
    Victory {
        /// Player health when the last enemy fell
        final_health: i64,
        /// Player health going into the battle
        initial_health: i64,
        /// `final_health` as a rounded percentage of `initial_health`
        health_percentage: i64,
    },
    /// The player fell
    Defeat {
        /// Enemies still standing
        remaining_enemies: usize,
        /// Summed current health of the enemies still standing
        remaining_enemy_health: i64,
    },
    /// Neither side won within the round cap
    Stalemate,
}

impl Outcome {
    /// Build a victory, deriving the health percentage
    pub fn victory(final_health: i64, initial_health: i64) -> Self {
        let health_percentage = if initial_health > 0 {
            (final_health as f64 / initial_health as f64 * 100.0).round() as i64
        } else {
            0
        };
        Outcome::Victory {
            final_health,
            initial_health,
            health_percentage,
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory { .. })
    }

    pub fn is_defeat(&self) -> bool {
        matches!(self, Outcome::Defeat { .. })
    }

    /// Short lowercase tag, e.g. "victory"
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Waiting => "waiting",
            Outcome::Victory { .. } => "victory",
            Outcome::Defeat { .. } => "defeat",
            Outcome::Stalemate => "stalemate",
        }
    }

    /// Human readable verdict
    pub fn message(&self) -> String {
        match self {
            Outcome::Waiting => "Add mobs to the battlefield to see the outcome".to_string(),
            Outcome::Victory {
                final_health,
                health_percentage,
                ..
            } => format!(
                "Victory! You would defeat all enemies with {final_health} HP remaining ({health_percentage}% health)."
            ),
            Outcome::Defeat {
                remaining_enemy_health, ..
            } => format!(
                "Defeat! You would be defeated with enemies having {remaining_enemy_health} total HP remaining."
            ),
            Outcome::Stalemate => {
                "Battle would likely end in a stalemate (too many rounds).".to_string()
            }
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
