//! Enemy stat rolls and wave sizing constants.

/// Minimum rolled enemy health (inclusive)
pub const ENEMY_HEALTH_MIN: i32 = 1;
/// Maximum rolled enemy health (inclusive)
pub const ENEMY_HEALTH_MAX: i32 = 10;
/// Minimum rolled enemy damage (inclusive)
pub const ENEMY_DAMAGE_MIN: i32 = 1;
/// Maximum rolled enemy damage (inclusive)
pub const ENEMY_DAMAGE_MAX: i32 = 4;

/// Number of enemies in the first wave
pub const STARTING_WAVE_SIZE: usize = 1;
/// Cleared waves between each +1 to the wave size
pub const WAVE_GROWTH_INTERVAL: u32 = 4;
