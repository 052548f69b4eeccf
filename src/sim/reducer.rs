//! The fold
//!
//! `reduce` turns the previous state plus one event into the next state.
//! Restart and finish are checked first and rebuild the state outright;
//! every other kind merges into a copy of the previous state and touches
//! only its own fields.

use super::event::GameEvent;
use super::geometry::{clamp_player_x, clamp_player_y, wrap_x};
use super::state::{GamePhase, GameState, platform_width};
use crate::consts::{CROCODILE_WRAP_WIDTH, VEHICLE_WIDTH};

/// Fold one event into the accumulated state.
pub fn reduce(prev: &GameState, event: &GameEvent) -> GameState {
    match event {
        GameEvent::Status { phase: GamePhase::Restart } => restarted(),
        GameEvent::Status { phase: GamePhase::Finish } => finished(prev, None),
        GameEvent::Finish { slot } => finished(prev, Some(*slot)),

        GameEvent::Tick { time_delta } => {
            let mut next = pass_through(prev);
            next.time_remaining += time_delta;
            next.status.restart_flag = false;
            next
        }
        GameEvent::PlayerMove { dx, dy } => {
            let mut next = pass_through(prev);
            let r = next.player.radius;
            next.player.pos.x = clamp_player_x(next.player.pos.x + dx, r);
            next.player.pos.y = clamp_player_y(next.player.pos.y + dy, r);
            next
        }
        GameEvent::Ride { drift } => {
            let mut next = pass_through(prev);
            let r = next.player.radius;
            next.player.pos.x = clamp_player_x(next.player.pos.x + drift, r);
            next.player.autoflow = true;
            next
        }
        GameEvent::VehicleDrift { dx } => {
            let mut next = pass_through(prev);
            for (pos, dx) in next.vehicles.iter_mut().zip(dx.iter()) {
                pos.x = wrap_x(pos.x + dx, VEHICLE_WIDTH);
            }
            next
        }
        GameEvent::FloaterDrift { dx } => {
            let mut next = pass_through(prev);
            for (i, (pos, dx)) in next.floaters.iter_mut().zip(dx.iter()).enumerate() {
                pos.x = wrap_x(pos.x + dx, platform_width(i));
            }
            next
        }
        GameEvent::TurtleDrift { dx } => {
            let mut next = pass_through(prev);
            for (i, (pos, dx)) in next.turtles.iter_mut().zip(dx.iter()).enumerate() {
                pos.x = wrap_x(pos.x + dx, platform_width(i));
            }
            next
        }
        GameEvent::CrocodileDrift { dx } => {
            let mut next = pass_through(prev);
            next.crocodile.x = wrap_x(next.crocodile.x + dx, CROCODILE_WRAP_WIDTH);
            next
        }
        GameEvent::Submerge { submerged } => {
            let mut next = pass_through(prev);
            next.turtles_submerged = *submerged;
            next
        }
        GameEvent::Status { phase } => {
            let mut next = pass_through(prev);
            next.status.phase = *phase;
            next
        }
    }
}

/// Baseline for every field-wise merge: a copy of the previous state with
/// the riding flag cleared. Riding never survives a fold on its own; the
/// platform has to keep re-claiming the player.
fn pass_through(prev: &GameState) -> GameState {
    let mut next = prev.clone();
    next.player.autoflow = false;
    next
}

/// Full reset with the one-shot overlay flag raised.
fn restarted() -> GameState {
    log::info!("run reset");
    let mut next = GameState::initial();
    next.status.restart_flag = true;
    next
}

/// Finish path: the field resets but the banked home slots carry over,
/// growing by `slot` when one is named.
fn finished(prev: &GameState, slot: Option<u8>) -> GameState {
    let mut next = GameState::initial();
    next.finished_slots = prev.finished_slots.clone();
    if let Some(slot) = slot {
        next.finished_slots.insert(slot);
        log::info!("home slot {} banked ({} filled)", slot, next.finished_slots.len());
    }
    next
}
