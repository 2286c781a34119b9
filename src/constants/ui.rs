//! UI and window constants.

/// Window title
pub const WINDOW_TITLE: &str = "Mob Slayer 2";
/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 620;

/// Width of an enemy card in the roster row
pub const ENEMY_CARD_WIDTH: f32 = 132.0;
/// Height of an enemy card in the roster row
pub const ENEMY_CARD_HEIGHT: f32 = 170.0;
/// Size of the enemy portrait inside a card
pub const ENEMY_PORTRAIT_SIZE: f32 = 64.0;
/// Size of the stat icons in the player panel
pub const STAT_ICON_SIZE: f32 = 20.0;
