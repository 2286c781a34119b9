//! Wave generation - rolls fresh enemies from the stat ranges.

use crate::actors::Enemy;
use crate::constants::*;

use rand::Rng;

/// Roll a single enemy with uniform stats from the spawn ranges
pub fn roll_enemy(rng: &mut impl Rng) -> Enemy {
    let health = rng.gen_range(ENEMY_HEALTH_MIN..=ENEMY_HEALTH_MAX);
    let damage = rng.gen_range(ENEMY_DAMAGE_MIN..=ENEMY_DAMAGE_MAX);
    Enemy::new(health, damage)
}

/// Roll a full wave roster. Each enemy's stats are drawn independently.
pub fn generate_wave(count: usize, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..count).map(|_| roll_enemy(rng)).collect()
}
