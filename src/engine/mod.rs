//! Game engine - owns all game state and provides a clean API to the
//! application shell.
//!
//! The engine handles:
//! - Screen mode and session lifecycle
//! - Turn pacing through the session timeline
//! - Translating game events into on-screen messages
//!
//! The application shell (main.rs) only handles:
//! - Window creation and the event loop
//! - Forwarding player intent to the engine
//! - Painting whatever the UI layer lays out

pub mod session;
pub mod simulation;

pub use session::{Phase, Session, SessionStats, StatUpgrade};
pub use simulation::TurnResult;

use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::ui::{MessageFeed, UiActions};

use rand::Rng;

/// Which screen the application is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen
    MainMenu,
    /// How-to-play screen
    Tutorial,
    /// A run is underway
    Playing,
    /// Run finished, statistics on display
    GameOver,
}

/// The game engine - owns all game state and simulation logic.
pub struct GameEngine {
    /// Current screen
    pub mode: GameMode,
    /// Live run data - None outside of Playing
    pub session: Option<Session>,
    /// Event queue for game events
    pub events: EventQueue,
    /// Transient combat messages
    pub messages: MessageFeed,
    /// Statistics of the most recently finished run
    pub last_run: Option<SessionStats>,
}

impl GameEngine {
    /// Create a new game engine on the main menu.
    pub fn new() -> Self {
        Self {
            mode: GameMode::MainMenu,
            session: None,
            events: EventQueue::new(),
            messages: MessageFeed::new(),
            last_run: None,
        }
    }

    /// Start a fresh run.
    pub fn start_game(&mut self, rng: &mut impl Rng) {
        self.messages.clear();
        self.session = Some(Session::new(rng, &mut self.events));
        self.mode = GameMode::Playing;
        self.process_events();
    }

    /// Check if a run is underway.
    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    /// Process a frame tick - ages messages, advances the session clock,
    /// and resolves every step that came due.
    pub fn tick(&mut self, dt: f32) {
        puffin::profile_function!();

        self.messages.update(dt);

        if let Some(session) = self.session.as_mut() {
            session.clock.advance(dt);
            simulation::advance_timeline(session, &mut self.events);
        }
        self.process_events();
    }

    /// Apply the player intent collected by the UI this frame.
    pub fn process_ui_actions(&mut self, actions: &UiActions, rng: &mut impl Rng) {
        if actions.start_game {
            self.start_game(rng);
        }
        if actions.show_tutorial {
            self.mode = GameMode::Tutorial;
        }
        if actions.back_to_menu {
            self.mode = GameMode::MainMenu;
            self.last_run = None;
        }

        if let Some(session) = self.session.as_mut() {
            if let Some(index) = actions.select_enemy {
                session.select_enemy(index);
            }
            if actions.attack {
                simulation::player_attack(session, &mut self.events);
            }
            if actions.heal {
                simulation::player_heal(session, &mut self.events);
            }
            if actions.quit_run {
                simulation::player_quit(session, &mut self.events);
            }
            if let Some(upgrade) = actions.upgrade {
                simulation::choose_upgrade(session, upgrade, rng, &mut self.events);
            }
        }

        self.process_events();
    }

    /// Drain game events into messages and screen transitions.
    fn process_events(&mut self) {
        for event in self.events.drain() {
            match event {
                GameEvent::AttackHit { damage, .. } => {
                    self.messages.push(
                        format!("You dealt {} damage to the enemy!", damage),
                        MESSAGE_DURATION,
                    );
                }
                GameEvent::EnemyKilled { damage, .. } => {
                    self.messages.push(
                        format!("You dealt {} damage to the enemy! Killing it!", damage),
                        MESSAGE_DURATION,
                    );
                }
                GameEvent::PlayerHealed { restored } => {
                    self.messages
                        .push(format!("You healed {} health!", restored), MESSAGE_DURATION);
                }
                GameEvent::EnemyStruck { damage, .. } => {
                    self.messages
                        .push(format!("Enemy dealt {} to you!", damage), MESSAGE_DURATION);
                }
                GameEvent::WaveCleared { .. } | GameEvent::WaveSpawned { .. } => {
                    // The upgrade window and the roster redraw announce these
                }
                GameEvent::GameOver {
                    waves_cleared,
                    enemies_killed,
                    damage_dealt,
                    healing_received,
                    health_restored,
                } => {
                    self.last_run = Some(SessionStats {
                        enemies_killed,
                        waves_cleared,
                        damage_dealt,
                        healing_received,
                        health_restored,
                    });
                    self.session = None;
                    self.mode = GameMode::GameOver;
                }
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
