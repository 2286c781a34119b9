//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod enemies;
mod gameplay;
mod time;
mod ui;

// Re-export all constants at the module level for easier access
pub use enemies::*;
pub use gameplay::*;
pub use time::*;
pub use ui::*;
