//! Core session state - owns one run of the game.

use crate::actors::{Enemy, Player};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::spawning;
use crate::timeline::{GameClock, Timeline};

use rand::Rng;

/// Where the turn cycle currently stands.
///
/// This doubles as the input gate: player actions are accepted only
/// during `PlayerTurn`, upgrade choices only during `AwaitingUpgrade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to attack, heal, retarget, or quit
    PlayerTurn,
    /// An action landed; enemy strikes are pending on the timeline
    Resolving,
    /// Wave cleared; a stat upgrade must be chosen before anything else
    AwaitingUpgrade,
    /// The run is over
    GameOver,
}

/// Which stat to grow after a cleared wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatUpgrade {
    Health,
    Damage,
    Healing,
}

/// Running totals for one session, shown on the game-over screen
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub enemies_killed: u32,
    pub waves_cleared: u32,
    pub damage_dealt: i32,
    /// Credited with the full healing power on every heal, even when
    /// clamping restored less. Kept that way on purpose.
    pub healing_received: i32,
    /// Health actually restored after clamping
    pub health_restored: i32,
}

/// One game attempt, from start until the player dies or quits.
pub struct Session {
    pub player: Player,
    /// Live enemy roster for the current wave, in spawn order
    pub enemies: Vec<Enemy>,
    /// Roster index the next attack goes to
    pub selected_enemy: usize,
    /// Enemies rolled per wave; grows as waves are cleared
    pub max_enemies_per_wave: usize,
    pub stats: SessionStats,
    pub phase: Phase,
    /// Session time, accumulated from frame deltas
    pub clock: GameClock,
    /// Pending delayed resolve steps
    pub timeline: Timeline,
}

impl Session {
    /// Start a fresh run: standard player loadout, first wave rolled.
    pub fn new(rng: &mut impl Rng, events: &mut EventQueue) -> Self {
        let mut session = Self {
            player: Player::starting(),
            enemies: Vec::new(),
            selected_enemy: 0,
            max_enemies_per_wave: STARTING_WAVE_SIZE,
            stats: SessionStats::default(),
            phase: Phase::PlayerTurn,
            clock: GameClock::new(),
            timeline: Timeline::new(),
        };
        session.spawn_wave(rng, events);
        session
    }

    /// Roll a fresh roster for the next wave and point selection at the front.
    pub fn spawn_wave(&mut self, rng: &mut impl Rng, events: &mut EventQueue) {
        self.enemies = spawning::generate_wave(self.max_enemies_per_wave, rng);
        self.selected_enemy = 0;
        events.push(GameEvent::WaveSpawned {
            count: self.enemies.len(),
        });
    }

    /// Point the next attack at a roster index. Ignored while input is
    /// gated or when the index is out of range.
    pub fn select_enemy(&mut self, index: usize) {
        if self.phase == Phase::PlayerTurn && index < self.enemies.len() {
            self.selected_enemy = index;
        }
    }

    /// Keep the selection on a live enemy after a kill shrinks the roster
    pub fn clamp_selection(&mut self) {
        if self.selected_enemy >= self.enemies.len() {
            self.selected_enemy = self.enemies.len().saturating_sub(1);
        }
    }

    /// Whether the player may act right now. The single gate the UI
    /// consults to enable the action buttons.
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }
}
