//! Tick source
//!
//! One logical 15 ms tick drives every timed derivation: the four drift
//! families, the countdown, and the turtle dive/surface cadence. `advance`
//! covers exactly one tick and returns its events in merge order, with any
//! dive or surface pulse that came due appended at the end.

use crate::consts::{DIVE_CYCLE_MS, DIVE_OFFSET_MS, TICK_INTERVAL_MS};
use crate::sim::event::GameEvent;

/// Produces the per-tick event batches.
#[derive(Debug)]
pub struct TickScheduler {
    ticks: u64,
    next_dive_ms: u64,
    next_surface_ms: u64,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler {
    /// Scheduler at time zero: the first surface pulse is due immediately,
    /// the first dive two seconds in.
    pub fn new() -> Self {
        Self { ticks: 0, next_dive_ms: DIVE_OFFSET_MS, next_surface_ms: 0 }
    }

    /// Game time covered so far, in ms.
    pub fn elapsed_ms(&self) -> u64 {
        self.ticks * TICK_INTERVAL_MS
    }

    /// Advance one tick and return its event batch.
    pub fn advance(&mut self) -> Vec<GameEvent> {
        self.ticks += 1;
        let now = self.elapsed_ms();

        let mut batch = vec![
            GameEvent::vehicle_drift(),
            GameEvent::countdown(),
            GameEvent::turtle_drift(),
            GameEvent::floater_drift(),
            GameEvent::crocodile_drift(),
        ];
        while self.next_dive_ms <= now {
            batch.push(GameEvent::Submerge { submerged: true });
            self.next_dive_ms += DIVE_CYCLE_MS;
        }
        while self.next_surface_ms <= now {
            batch.push(GameEvent::Submerge { submerged: false });
            self.next_surface_ms += DIVE_CYCLE_MS;
        }
        batch
    }
}
