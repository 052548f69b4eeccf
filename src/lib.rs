//! Lilyhop - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game core (state, events, reducer, rules)
//! - `engine`: Single event channel that folds events and drains follow-ups
//! - `input`: Keyboard presses/releases turned into repeating move commands
//! - `schedule`: Fixed 15 ms tick source and the turtle dive cadence
//! - `view`: Contract the drawing layer implements

pub mod engine;
pub mod input;
pub mod schedule;
pub mod sim;
pub mod view;

pub use engine::GameEngine;
pub use sim::event::{GameEvent, MoveKey};
pub use sim::state::{GamePhase, GameState};
pub use view::{GameView, NullView};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (SVG units)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 1280.0;

    /// Decorative chrome the player can never enter
    pub const SIDE_MARGIN: f32 = 43.0;
    pub const TOP_MARGIN: f32 = 165.0;
    pub const BOTTOM_MARGIN: f32 = 90.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_START_X: f32 = 580.0;
    pub const PLAYER_START_Y: f32 = 1160.0;
    /// One keypress worth of travel
    pub const STEP_X: f32 = 102.0;
    pub const STEP_Y: f32 = 97.0;

    /// Road traffic - four rows of three, counted bottom row first
    pub const VEHICLE_COUNT: usize = 12;
    pub const VEHICLES_PER_ROW: usize = 3;
    pub const VEHICLE_WIDTH: f32 = 100.0;
    pub const VEHICLE_SPACING_X: f32 = 280.0;
    /// First row sits this far above the bottom edge; rows stack upward
    pub const ROAD_BOTTOM_OFFSET: f32 = 234.0;
    pub const ROAD_ROW_PITCH: f32 = 102.0;
    /// Rows alternate direction: even rows crawl right, odd rows rush left
    pub const VEHICLE_DRIFT_RIGHT: f32 = 1.0;
    pub const VEHICLE_DRIFT_LEFT: f32 = -4.0;

    /// Every lane occupant is this tall
    pub const LANE_HEIGHT: f32 = 60.0;

    /// River platforms - the first two of each family are the wide kind
    pub const FLOATER_COUNT: usize = 5;
    pub const TURTLE_COUNT: usize = 5;
    pub const WIDE_PLATFORMS: usize = 2;
    pub const PLATFORM_WIDE: f32 = 400.0;
    pub const PLATFORM_NARROW: f32 = 250.0;
    /// Per-tick platform drift (turtles swim against the driftwood)
    pub const FLOATER_DRIFT_WIDE: f32 = 2.0;
    pub const FLOATER_DRIFT_NARROW: f32 = 1.0;
    pub const TURTLE_DRIFT_WIDE: f32 = -3.0;
    pub const TURTLE_DRIFT_NARROW: f32 = -1.0;
    /// Carry applied to a rider per rule pass
    pub const RIDE_FLOATER_WIDE: f32 = 0.40;
    pub const RIDE_FLOATER_NARROW: f32 = 0.20;
    pub const RIDE_TURTLE_WIDE: f32 = -0.6;
    pub const RIDE_TURTLE_NARROW: f32 = -0.20;

    /// The crocodile is decoration: drawn at 200 wide, wrapped as if 400
    pub const CROCODILE_WIDTH: f32 = 200.0;
    pub const CROCODILE_WRAP_WIDTH: f32 = 400.0;
    pub const CROCODILE_DRIFT: f32 = 2.0;

    /// Home row
    pub const HOME_SLOT_COUNT: usize = 5;
    pub const HOME_SLOT_SPACING: f32 = 203.0;

    /// Clock
    pub const TICK_INTERVAL_MS: u64 = 15;
    /// Countdown fraction lost per tick (zero in 30 s)
    pub const TIME_DECAY_PER_TICK: f32 = 0.0005;
    pub const KEY_REPEAT_MS: u64 = 200;
    /// Turtles dive every 3 s, offset 2 s from the matching surface pulse
    pub const DIVE_CYCLE_MS: u64 = 3000;
    pub const DIVE_OFFSET_MS: u64 = 2000;
}
