//! Game event system for decoupled communication between systems.
//!
//! The combat simulation emits events, the presentation layer consumes
//! them. This lets the message feed and screens react without the
//! simulation knowing anything about egui.

/// Game events the simulation can emit
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The player attacked an enemy that survived the hit
    AttackHit {
        target: usize,
        damage: i32,
    },
    /// The player attacked an enemy and killed it
    EnemyKilled {
        target: usize,
        damage: i32,
    },
    /// The player healed
    PlayerHealed {
        /// Health actually restored after clamping to the maximum
        restored: i32,
    },
    /// An enemy struck the player
    EnemyStruck {
        attacker: usize,
        damage: i32,
    },
    /// Every enemy in the wave is dead
    WaveCleared {
        wave: u32,
    },
    /// A fresh wave spawned
    WaveSpawned {
        count: usize,
    },
    /// The player died or quit; the run is over
    GameOver {
        waves_cleared: u32,
        enemies_killed: u32,
        damage_dealt: i32,
        healing_received: i32,
        health_restored: i32,
    },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::AttackHit {
            target: 0,
            damage: 3,
        });
        queue.push(GameEvent::PlayerHealed { restored: 2 });
        assert!(!queue.is_empty());

        let drained: Vec<GameEvent> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], GameEvent::AttackHit { damage: 3, .. }));
        assert!(matches!(drained[1], GameEvent::PlayerHealed { restored: 2 }));
        assert!(queue.is_empty());
    }
}
