//! Deterministic game core
//!
//! Everything that decides gameplay lives here and is pure:
//! - States fold through the reducer one event at a time
//! - The dispatcher derives follow-up events from each result
//! - No clocks, no randomness, no platform dependencies

pub mod dispatch;
pub mod event;
pub mod geometry;
pub mod reducer;
pub mod state;

pub use dispatch::{judge_finish, render, slot_center};
pub use event::{GameEvent, MoveKey};
pub use geometry::{
    Rect, circle_hits_rect, circle_on_platform, clamp_player_x, clamp_player_y, in_lane_band,
    wrap_x,
};
pub use reducer::reduce;
pub use state::{
    GamePhase, GameState, GameStatus, Player, platform_body, platform_width, vehicle_body,
    vehicle_row_y,
};
