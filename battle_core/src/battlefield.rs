//! Battlefield - The ordered roster of enemies the player will face

use crate::config::MobStats;
use crate::types::EnemyId;
use serde::{Deserialize, Serialize};

/// One enemy placed on the battlefield
///
/// Stats are copied from the catalog when the enemy is added, so later
/// catalog edits do not change enemies that are already placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyInstance {
    pub id: EnemyId,
    pub name: String,
    pub current_health: i64,
    pub max_health: i64,
    pub damage: u32,
}

impl EnemyInstance {
    /// Create an enemy at full health from catalog stats
    pub fn new(id: EnemyId, name: impl Into<String>, stats: MobStats) -> Self {
        EnemyInstance {
            id,
            name: name.into(),
            current_health: i64::from(stats.health),
            max_health: i64::from(stats.health),
            damage: stats.damage,
        }
    }

    /// Check if the enemy is still standing
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }
}

/// Ordered collection of enemies, mutated only by add and remove
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Battlefield {
    enemies: Vec<EnemyInstance>,
    next_id: u64,
}

impl Battlefield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new enemy at the end of the roster
    pub fn add(&mut self, name: impl Into<String>, stats: MobStats) -> &EnemyInstance {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        self.enemies.push(EnemyInstance::new(id, name, stats));
        &self.enemies[self.enemies.len() - 1]
    }

    /// Remove an enemy, keeping the order of the others
    pub fn remove(&mut self, id: EnemyId) -> Option<EnemyInstance> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Enemies in insertion order
    pub fn enemies(&self) -> &[EnemyInstance] {
        &self.enemies
    }

    /// Independent copy of the roster for a simulation run to consume
    pub fn snapshot(&self) -> Vec<EnemyInstance> {
        self.enemies.clone()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Remove every enemy; ids keep counting up
    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}
