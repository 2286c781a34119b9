//! Turn pacing constants.

/// Delay between the player's action and the first enemy strike (seconds)
pub const ACTION_RESOLVE_DELAY: f32 = 2.0;
/// Delay between consecutive enemy strikes (seconds)
pub const ENEMY_STRIKE_DELAY: f32 = 2.0;
/// How long combat messages stay on screen (seconds)
pub const MESSAGE_DURATION: f32 = 2.0;
/// Longest frame step fed to the clock, so a stalled frame cannot
/// collapse several combat beats into one
pub const MAX_FRAME_DT: f32 = 0.25;
