//! Game state and entity layout
//!
//! One immutable value holds everything the rules can see. Folding an event
//! always produces a fresh value; nothing here mutates in place.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play; no terminal condition reached yet
    #[default]
    None,
    /// Pre-run phase; accepted by the fold but raised by nothing today
    Start,
    /// Run lost to a collision, a drowning, or the countdown hitting zero
    End,
    /// Reset command. Never stored: folding it yields a fresh initial state
    Restart,
    /// Every home slot is filled
    Win,
    /// Home-slot arrival. Never stored: folding it resets the field while
    /// keeping the accumulated slots
    Finish,
}

/// Terminal phase plus the one-shot overlay-reset flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStatus {
    pub phase: GamePhase,
    /// Raised by a restart fold, cleared by the next tick. Tells the view
    /// to drop whatever terminal overlay it is showing.
    pub restart_flag: bool,
}

/// The frog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub radius: f32,
    pub pos: Vec2,
    /// Set while a platform carries the player. Every fold clears it unless
    /// the event re-asserts it, so a platform must keep re-claiming its
    /// rider one ride event at a time.
    pub autoflow: bool,
}

/// Complete game state: deterministic, comparable, serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Road traffic, three vehicles per row, bottom row first.
    pub vehicles: [Vec2; VEHICLE_COUNT],
    /// Driftwood platforms; indices 0-1 are the wide kind.
    pub floaters: [Vec2; FLOATER_COUNT],
    /// Turtle rafts; same width convention as the floaters.
    pub turtles: [Vec2; TURTLE_COUNT],
    /// Lone decoration cruising the lower driftwood lane.
    pub crocodile: Vec2,
    pub status: GameStatus,
    /// Home slots already filled, by index.
    pub finished_slots: BTreeSet<u8>,
    /// Countdown fraction; starts at 1.0 and decays every tick.
    pub time_remaining: f32,
    /// While set, turtles carry nothing and the view hides them.
    pub turtles_submerged: bool,
}

impl GameState {
    /// The arrangement every run starts from and resets to.
    pub fn initial() -> Self {
        Self {
            player: Player {
                radius: PLAYER_RADIUS,
                pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                autoflow: false,
            },
            vehicles: std::array::from_fn(|i| {
                Vec2::new(VEHICLE_SPACING_X * i as f32, vehicle_row_y(i / VEHICLES_PER_ROW))
            }),
            floaters: [
                Vec2::new(-400.0, 255.0),
                Vec2::new(340.0, 255.0),
                Vec2::new(-250.0, 449.0),
                Vec2::new(160.0, 449.0),
                Vec2::new(570.0, 449.0),
            ],
            turtles: [
                Vec2::new(960.0, 352.0),
                Vec2::new(220.0, 352.0),
                Vec2::new(960.0, 546.0),
                Vec2::new(540.0, 546.0),
                Vec2::new(120.0, 546.0),
            ],
            crocodile: Vec2::new(70.0, 255.0),
            status: GameStatus::default(),
            finished_slots: BTreeSet::new(),
            time_remaining: 1.0,
            turtles_submerged: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Vertical position of road row `row` (0 = bottom row).
#[inline]
pub fn vehicle_row_y(row: usize) -> f32 {
    FIELD_HEIGHT - ROAD_BOTTOM_OFFSET - ROAD_ROW_PITCH * row as f32
}

/// Width of the floater or turtle at `index`.
#[inline]
pub fn platform_width(index: usize) -> f32 {
    if index < WIDE_PLATFORMS { PLATFORM_WIDE } else { PLATFORM_NARROW }
}

/// Body rectangle of a vehicle.
#[inline]
pub fn vehicle_body(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, VEHICLE_WIDTH, LANE_HEIGHT)
}

/// Body rectangle of the floater or turtle at `index`.
#[inline]
pub fn platform_body(pos: Vec2, index: usize) -> Rect {
    Rect::new(pos.x, pos.y, platform_width(index), LANE_HEIGHT)
}
