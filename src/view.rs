//! View contract
//!
//! The drawing layer lives outside this crate; the dispatcher talks to it
//! through this trait. Calls are absolute and idempotent: positions to set,
//! visibility to apply, a countdown fraction, and the two terminal
//! overlays. Implementations redraw eagerly on every call.

use glam::Vec2;

/// Sink for one rendered state.
pub trait GameView {
    /// Move the player disc.
    fn set_player(&mut self, pos: Vec2, radius: f32);
    /// Move vehicle `index`.
    fn set_vehicle(&mut self, index: usize, pos: Vec2);
    /// Move floater `index`.
    fn set_floater(&mut self, index: usize, pos: Vec2);
    /// Move turtle `index`.
    fn set_turtle(&mut self, index: usize, pos: Vec2);
    /// Show or hide turtle `index`; hidden while the turtles are under.
    fn set_turtle_visible(&mut self, index: usize, visible: bool);
    /// Move the crocodile.
    fn set_crocodile(&mut self, pos: Vec2);
    /// Show or hide the marker parked on home slot `slot`.
    fn set_home_marker_visible(&mut self, slot: u8, visible: bool);
    /// Update the countdown bar with the remaining fraction of the clock.
    fn set_time_percent(&mut self, fraction: f32);
    /// Show the run-lost overlay.
    fn show_end_overlay(&mut self);
    /// Show the run-won overlay.
    fn show_win_overlay(&mut self);
    /// Drop both terminal overlays after a restart.
    fn clear_overlays(&mut self);
}

/// View that ignores every call; for headless sessions and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl GameView for NullView {
    fn set_player(&mut self, _pos: Vec2, _radius: f32) {}
    fn set_vehicle(&mut self, _index: usize, _pos: Vec2) {}
    fn set_floater(&mut self, _index: usize, _pos: Vec2) {}
    fn set_turtle(&mut self, _index: usize, _pos: Vec2) {}
    fn set_turtle_visible(&mut self, _index: usize, _visible: bool) {}
    fn set_crocodile(&mut self, _pos: Vec2) {}
    fn set_home_marker_visible(&mut self, _slot: u8, _visible: bool) {}
    fn set_time_percent(&mut self, _fraction: f32) {}
    fn show_end_overlay(&mut self) {}
    fn show_win_overlay(&mut self) {}
    fn clear_overlays(&mut self) {}
}
