//! Combat actors: the shared stat block plus the player and enemy types.

use crate::constants::*;

/// Stat block shared by every combatant
#[derive(Debug, Clone, Copy)]
pub struct ActorStats {
    pub current_health: i32,
    pub max_health: i32,
    pub damage: i32,
}

impl ActorStats {
    pub fn new(health: i32, damage: i32) -> Self {
        Self {
            current_health: health,
            max_health: health,
            damage,
        }
    }

    /// Apply damage without clamping. Death handling is the caller's job,
    /// so health may sit below zero until the caller checks it.
    pub fn take_damage(&mut self, amount: i32) {
        self.current_health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }
}

/// The player character
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub stats: ActorStats,
    pub healing_power: i32,
}

impl Player {
    pub fn new(health: i32, damage: i32, healing_power: i32) -> Self {
        Self {
            stats: ActorStats::new(health, damage),
            healing_power,
        }
    }

    /// Player with the standard starting loadout
    pub fn starting() -> Self {
        Self::new(
            PLAYER_STARTING_HEALTH,
            PLAYER_STARTING_DAMAGE,
            PLAYER_STARTING_HEALING,
        )
    }

    /// Restore healing power worth of health, never exceeding the maximum
    pub fn heal(&mut self) {
        self.stats.current_health =
            (self.stats.current_health + self.healing_power).min(self.stats.max_health);
    }

    /// Health a heal would actually restore right now
    pub fn restorable_health(&self) -> i32 {
        self.healing_power
            .min(self.stats.max_health - self.stats.current_health)
    }

    /// Raise the health ceiling. Current health is not refilled.
    pub fn increase_health(&mut self, amount: i32) {
        self.stats.max_health += amount;
    }

    pub fn increase_damage(&mut self, amount: i32) {
        self.stats.damage += amount;
    }

    pub fn increase_healing(&mut self, amount: i32) {
        self.healing_power += amount;
    }
}

/// A wave enemy. Same stat block as the player minus healing; kept as its
/// own type so enemy-only behavior has somewhere to live.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub stats: ActorStats,
}

impl Enemy {
    pub fn new(health: i32, damage: i32) -> Self {
        Self {
            stats: ActorStats::new(health, damage),
        }
    }
}
