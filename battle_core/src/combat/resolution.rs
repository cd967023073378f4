//! Battle resolution - Round-based fight between the player and a roster

use super::result::Outcome;
use super::sampler::{HitSampler, RngHitSampler};
use crate::battlefield::EnemyInstance;
use crate::config::CombatConstants;
use crate::defense::resolve_hit;
use crate::stat_block::Combatant;
use crate::types::CombatBias;
use rand::Rng;

/// Resolve a battle with the thread-local RNG and the default round cap
pub fn resolve_battle(player: &Combatant, enemies: &[EnemyInstance], bias: CombatBias) -> Outcome {
    let mut rng = rand::thread_rng();
    resolve_battle_with_rng(player, enemies, bias, &mut rng)
}

/// Resolve a battle with a provided RNG (for deterministic testing)
pub fn resolve_battle_with_rng(
    player: &Combatant,
    enemies: &[EnemyInstance],
    bias: CombatBias,
    rng: &mut impl Rng,
) -> Outcome {
    let mut sampler = RngHitSampler::new(rng);
    let round_cap = CombatConstants::default().round_cap;
    resolve_battle_with_sampler(player, enemies.to_vec(), bias, round_cap, &mut sampler)
}

/// Resolve a battle, drawing hit counts from `sampler`
///
/// Each round:
/// 1. The player attacks every enemy in roster order. Hits against an enemy
///    stop as soon as it drops; leftover hits are lost, not carried over.
/// 2. Fallen enemies are removed. An empty roster is a victory.
/// 3. Every surviving enemy attacks the player, in order, until the player
///    drops.
/// 4. A fallen player is a defeat. Passing `round_cap` rounds is a stalemate.
///
/// `working` is consumed by the fight. Pass a snapshot of the roster
/// (see [`Battlefield::snapshot`](crate::battlefield::Battlefield::snapshot)).
pub fn resolve_battle_with_sampler(
    player: &Combatant,
    mut working: Vec<EnemyInstance>,
    bias: CombatBias,
    round_cap: u32,
    sampler: &mut impl HitSampler,
) -> Outcome {
    if working.is_empty() {
        return Outcome::Waiting;
    }

    if !player.is_alive() {
        return defeat(&working);
    }

    let initial_health = player.health;
    let mut player_health = initial_health;

    let player_multiplier = bias.player_multiplier();
    let enemy_multiplier = bias.enemy_multiplier();
    let player_hit = i64::from(resolve_hit(player.damage, 0));

    tracing::debug!(
        enemies = working.len(),
        player_health,
        player_armor = player.armor,
        player_damage = player.damage,
        bias = bias.value(),
        "battle started"
    );

    let mut round: u32 = 1;
    loop {
        // Player attack phase
        for enemy in working.iter_mut().filter(|e| e.is_alive()) {
            let hits = sampler.hits(player_multiplier);
            for _ in 0..hits {
                enemy.current_health -= player_hit;
                if !enemy.is_alive() {
                    break;
                }
            }
        }

        working.retain(EnemyInstance::is_alive);

        if working.is_empty() {
            let outcome = Outcome::victory(player_health, initial_health);
            tracing::debug!(round, player_health, "battle won");
            return outcome;
        }

        // Enemy attack phase
        'enemies: for enemy in &working {
            let hits = sampler.hits(enemy_multiplier);
            let enemy_hit = i64::from(resolve_hit(enemy.damage, player.armor));
            for _ in 0..hits {
                player_health -= enemy_hit;
                if player_health <= 0 {
                    break 'enemies;
                }
            }
        }

        if player_health <= 0 {
            let outcome = defeat(&working);
            tracing::debug!(round, remaining = working.len(), "battle lost");
            return outcome;
        }

        tracing::trace!(
            round,
            player_health,
            enemies = working.len(),
            "round finished"
        );

        round += 1;
        if round > round_cap {
            tracing::debug!(round_cap, player_health, "battle hit the round cap");
            return Outcome::Stalemate;
        }
    }
}

fn defeat(survivors: &[EnemyInstance]) -> Outcome {
    Outcome::Defeat {
        remaining_enemies: survivors.len(),
        remaining_enemy_health: survivors.iter().map(|e| e.current_health).sum(),
    }
}
