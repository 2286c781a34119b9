//! Core gameplay constants (player stats, upgrades).

/// Player's starting health (also the starting maximum)
pub const PLAYER_STARTING_HEALTH: i32 = 10;
/// Player's starting attack damage
pub const PLAYER_STARTING_DAMAGE: i32 = 3;
/// Player's starting healing power
pub const PLAYER_STARTING_HEALING: i32 = 5;

/// Maximum health gained from the health upgrade
pub const UPGRADE_HEALTH_AMOUNT: i32 = 5;
/// Attack damage gained from the damage upgrade
pub const UPGRADE_DAMAGE_AMOUNT: i32 = 1;
/// Healing power gained from the healing upgrade
pub const UPGRADE_HEALING_AMOUNT: i32 = 2;
