//! Armor - Damage dealt by a single hit

/// Whether armor is strong enough to switch a hit to the quadratic falloff
///
/// Armor dominates once it reaches half the attacker's damage. Zero armor
/// never dominates, which also keeps the falloff branch from dividing by zero.
pub fn armor_dominates(attacker_damage: u32, defender_armor: u32) -> bool {
    defender_armor > 0 && u64::from(defender_armor) * 2 >= u64::from(attacker_damage)
}

/// Calculate the damage a single hit deals through armor
///
/// While armor is below half the damage it subtracts linearly:
/// `damage - armor`. Past that point damage falls off with the square:
/// `floor(damage * damage / (armor * 4))`.
///
/// The falloff is computed in exact integer arithmetic. Evaluating
/// `damage / (armor * 4) * damage` in floating point can land just under a
/// whole number and floor one lower: 198 damage against 363 armor deals 27
/// here, where the float form gives 26.
///
/// A hit always deals at least 1 damage, so a fight can never stall on
/// fully absorbed hits.
///
/// # Arguments
/// * `attacker_damage` - The attacker's damage value
/// * `defender_armor` - The defender's total armor
///
/// # Returns
/// The damage dealt, never less than 1
pub fn resolve_hit(attacker_damage: u32, defender_armor: u32) -> u32 {
    let dealt = if armor_dominates(attacker_damage, defender_armor) {
        let damage = u64::from(attacker_damage);
        // Bounded by damage / 2 in this branch
        (damage * damage / (4 * u64::from(defender_armor))) as u32
    } else {
        attacker_damage.saturating_sub(defender_armor)
    };

    dealt.max(1)
}
