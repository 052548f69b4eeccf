//! Event vocabulary
//!
//! Every change enters the fold as one of these tagged events. Each kind
//! carries exactly the delta it applies; fields it does not mention simply
//! pass through the fold untouched.

use serde::{Deserialize, Serialize};

use super::state::GamePhase;
use crate::consts::*;

/// Directional key the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKey {
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    /// The fixed step one press (or repeat) of this key commands.
    #[inline]
    pub fn step(self) -> (f32, f32) {
        match self {
            MoveKey::Left => (-STEP_X, 0.0),
            MoveKey::Right => (STEP_X, 0.0),
            MoveKey::Up => (0.0, -STEP_Y),
            MoveKey::Down => (0.0, STEP_Y),
        }
    }
}

/// One event entering the fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Countdown step; also clears the one-shot restart flag.
    Tick { time_delta: f32 },
    /// Directional move command, one key press or repeat worth.
    PlayerMove { dx: f32, dy: f32 },
    /// A platform carries the player: drift them along and mark them riding.
    Ride { drift: f32 },
    /// Per-vehicle horizontal drift for one tick.
    VehicleDrift { dx: [f32; VEHICLE_COUNT] },
    /// Per-floater horizontal drift for one tick.
    FloaterDrift { dx: [f32; FLOATER_COUNT] },
    /// Per-turtle horizontal drift for one tick.
    TurtleDrift { dx: [f32; TURTLE_COUNT] },
    /// Crocodile horizontal drift for one tick.
    CrocodileDrift { dx: f32 },
    /// The turtles dove or surfaced.
    Submerge { submerged: bool },
    /// Status transition: a user restart or a rule-raised terminal phase.
    Status { phase: GamePhase },
    /// The player reached home slot `slot`.
    Finish { slot: u8 },
}

impl GameEvent {
    /// Standard countdown tick.
    pub fn countdown() -> Self {
        GameEvent::Tick { time_delta: -TIME_DECAY_PER_TICK }
    }

    /// Move command for one press or repeat of `key`.
    pub fn player_move(key: MoveKey) -> Self {
        let (dx, dy) = key.step();
        GameEvent::PlayerMove { dx, dy }
    }

    /// One tick of road traffic: odd rows rush left, even rows crawl right.
    pub fn vehicle_drift() -> Self {
        GameEvent::VehicleDrift {
            dx: std::array::from_fn(|i| {
                if (i / VEHICLES_PER_ROW) % 2 == 1 {
                    VEHICLE_DRIFT_LEFT
                } else {
                    VEHICLE_DRIFT_RIGHT
                }
            }),
        }
    }

    /// One tick of driftwood drift, the wide pair ahead of the narrow three.
    pub fn floater_drift() -> Self {
        GameEvent::FloaterDrift {
            dx: std::array::from_fn(|i| {
                if i < WIDE_PLATFORMS { FLOATER_DRIFT_WIDE } else { FLOATER_DRIFT_NARROW }
            }),
        }
    }

    /// One tick of turtle drift, swimming against the driftwood.
    pub fn turtle_drift() -> Self {
        GameEvent::TurtleDrift {
            dx: std::array::from_fn(|i| {
                if i < WIDE_PLATFORMS { TURTLE_DRIFT_WIDE } else { TURTLE_DRIFT_NARROW }
            }),
        }
    }

    /// One tick of crocodile drift.
    pub fn crocodile_drift() -> Self {
        GameEvent::CrocodileDrift { dx: CROCODILE_DRIFT }
    }
}
