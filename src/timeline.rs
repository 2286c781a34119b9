//! Turn pacing through delayed continuations.
//!
//! Combat resolves in timed beats: the player's action lands, then each
//! enemy strikes one at a time with a pause between steps. Instead of
//! ambient event-loop callbacks, every delayed step is scheduled here and
//! resumed by the engine once the game clock passes its due time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

// =============================================================================
// GAME CLOCK
// =============================================================================

/// Global game time clock (in seconds)
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds, accumulated from frame deltas
    pub time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance time by an elapsed frame delta
    pub fn advance(&mut self, elapsed: f32) {
        debug_assert!(
            elapsed >= 0.0,
            "Cannot go backwards in time: delta {}",
            elapsed
        );
        self.time += elapsed;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// RESOLVE STEPS
// =============================================================================

/// A delayed continuation in the combat round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    /// The enemy at this roster index takes its swing
    EnemyStrike { index: usize },
    /// The strike sequence is over; clear the wave or hand control back
    EndOfRound,
}

/// A step waiting on the timeline
#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    step: ResolveStep,
    due_time: f32,
}

impl PartialEq for ScheduledStep {
    fn eq(&self, other: &Self) -> bool {
        self.due_time == other.due_time && self.step == other.step
    }
}

impl Eq for ScheduledStep {}

impl PartialOrd for ScheduledStep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledStep {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest time first)
        other
            .due_time
            .partial_cmp(&self.due_time)
            .unwrap_or(Ordering::Equal)
    }
}

// =============================================================================
// TIMELINE
// =============================================================================

/// Pending resolve steps, ordered by due time (min-heap)
#[derive(Debug, Clone)]
pub struct Timeline {
    pending: BinaryHeap<ScheduledStep>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            pending: BinaryHeap::new(),
        }
    }

    /// Schedule a step to resolve `delay` seconds after `now`
    pub fn schedule_in(&mut self, now: f32, delay: f32, step: ResolveStep) {
        self.pending.push(ScheduledStep {
            step,
            due_time: now + delay,
        });
    }

    /// Get the next step (earliest), if any
    pub fn peek_next(&self) -> Option<(ResolveStep, f32)> {
        self.pending.peek().map(|s| (s.step, s.due_time))
    }

    /// Pop the next step if its due time has passed
    pub fn pop_due(&mut self, now: f32) -> Option<ResolveStep> {
        match self.pending.peek() {
            Some(s) if s.due_time <= now => self.pending.pop().map(|s| s.step),
            _ => None,
        }
    }

    /// Check if there are any pending steps
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
