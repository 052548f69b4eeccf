//! Render dispatch and rule evaluation
//!
//! Consumes one accumulated state: pushes it to the view, then derives the
//! semantic events the rules owe for it (collisions, drownings, rides,
//! finishes, timeout, win). Derived events are returned to the caller, not
//! applied here; the engine owns the queue and the fold.

use glam::Vec2;

use super::event::GameEvent;
use super::geometry::{circle_hits_rect, circle_on_platform, in_lane_band};
use super::state::{GamePhase, GameState, Player, platform_body, vehicle_body};
use crate::consts::*;
use crate::view::GameView;

/// Apply one state to the view and collect the follow-up events.
///
/// A raised restart flag clears the terminal overlays first. A stored End
/// or Win phase shows its overlay and skips every rule pass, freezing the
/// picture while folds continue underneath.
pub fn render(state: &GameState, view: &mut dyn GameView) -> Vec<GameEvent> {
    if state.status.restart_flag {
        view.clear_overlays();
    }
    match state.status.phase {
        GamePhase::End => {
            view.show_end_overlay();
            return Vec::new();
        }
        GamePhase::Win => {
            view.show_win_overlay();
            return Vec::new();
        }
        _ => {}
    }

    let mut raised = Vec::new();
    render_vehicles(state, view, &mut raised);
    render_water(state, view, &mut raised);
    render_player(state, view, &mut raised);
    render_timebar(state, view, &mut raised);
    render_home_slots(state, view, &mut raised);
    raised
}

/// Place the traffic, then test the player against every vehicle body.
fn render_vehicles(state: &GameState, view: &mut dyn GameView, raised: &mut Vec<GameEvent>) {
    for (i, pos) in state.vehicles.iter().enumerate() {
        view.set_vehicle(i, *pos);
    }
    let hit = state
        .vehicles
        .iter()
        .any(|pos| circle_hits_rect(state.player.pos, state.player.radius, vehicle_body(*pos)));
    if hit {
        log::info!("vehicle collision at {}", state.player.pos);
        raised.push(GameEvent::Status { phase: GamePhase::End });
    }
}

/// Place the river and evaluate support.
///
/// A player already marked riding was claimed by this very fold; the water
/// rules stand down until the flag decays. Otherwise each platform family
/// gets a chance to claim the player, and an unclaimed player standing in
/// a family's lane band drowns.
fn render_water(state: &GameState, view: &mut dyn GameView, raised: &mut Vec<GameEvent>) {
    for (i, pos) in state.turtles.iter().enumerate() {
        view.set_turtle(i, *pos);
        view.set_turtle_visible(i, !state.turtles_submerged);
    }
    for (i, pos) in state.floaters.iter().enumerate() {
        view.set_floater(i, *pos);
    }
    view.set_crocodile(state.crocodile);

    if state.player.autoflow {
        return;
    }
    let player = &state.player;

    let mut on_floater = false;
    for (i, pos) in state.floaters.iter().enumerate() {
        if circle_on_platform(player.pos, player.radius, platform_body(*pos, i)) {
            raised.push(GameEvent::Ride { drift: floater_ride_drift(i) });
            on_floater = true;
        }
    }
    let in_floater_lane = state
        .floaters
        .iter()
        .enumerate()
        .any(|(i, pos)| in_lane_band(player.pos.y, platform_body(*pos, i)));
    if !on_floater && in_floater_lane {
        log::info!("drowned in a driftwood lane at {}", player.pos);
        raised.push(GameEvent::Status { phase: GamePhase::End });
    }

    let in_turtle_lane = state
        .turtles
        .iter()
        .enumerate()
        .any(|(i, pos)| in_lane_band(player.pos.y, platform_body(*pos, i)));
    let mut on_turtle = false;
    for (i, pos) in state.turtles.iter().enumerate() {
        if circle_on_platform(player.pos, player.radius, platform_body(*pos, i)) {
            raised.push(GameEvent::Ride { drift: turtle_ride_drift(i) });
            on_turtle = true;
        }
    }
    if !on_turtle && in_turtle_lane {
        log::info!("drowned in a turtle lane at {}", player.pos);
        raised.push(GameEvent::Status { phase: GamePhase::End });
    }
    // Submerged turtles support nothing, even a player standing on one.
    if state.turtles_submerged && in_turtle_lane {
        log::info!("turtles dove under the player at {}", player.pos);
        raised.push(GameEvent::Status { phase: GamePhase::End });
    }
}

/// Place the player and judge home-slot arrival.
fn render_player(state: &GameState, view: &mut dyn GameView, raised: &mut Vec<GameEvent>) {
    view.set_player(state.player.pos, state.player.radius);
    if let Some(slot) = judge_finish(&state.player) {
        log::debug!("home slot {slot} reached");
        raised.push(GameEvent::Finish { slot });
    }
}

/// Feed the countdown bar, or end the run once the clock is spent.
fn render_timebar(state: &GameState, view: &mut dyn GameView, raised: &mut Vec<GameEvent>) {
    if state.time_remaining > 0.0 {
        view.set_time_percent(state.time_remaining);
    } else if state.status.phase != GamePhase::End {
        log::info!("countdown expired");
        raised.push(GameEvent::Status { phase: GamePhase::End });
    }
}

/// Mirror the banked slots onto the home row, or call the win.
fn render_home_slots(state: &GameState, view: &mut dyn GameView, raised: &mut Vec<GameEvent>) {
    if state.finished_slots.len() >= HOME_SLOT_COUNT {
        log::info!("all {} home slots filled", HOME_SLOT_COUNT);
        raised.push(GameEvent::Status { phase: GamePhase::Win });
        return;
    }
    for slot in 0..HOME_SLOT_COUNT as u8 {
        view.set_home_marker_visible(slot, state.finished_slots.contains(&slot));
    }
}

/// Center of home slot `index` on the finish row.
#[inline]
pub fn slot_center(index: usize) -> Vec2 {
    Vec2::new(
        index as f32 * HOME_SLOT_SPACING + PLAYER_RADIUS + SIDE_MARGIN,
        PLAYER_RADIUS + TOP_MARGIN,
    )
}

/// First home slot whose center lies within two radii of the player.
pub fn judge_finish(player: &Player) -> Option<u8> {
    (0..HOME_SLOT_COUNT)
        .find(|&i| slot_center(i).distance(player.pos) <= 2.0 * player.radius)
        .map(|i| i as u8)
}

/// Carry per rule pass while standing on floater `index`.
#[inline]
fn floater_ride_drift(index: usize) -> f32 {
    if index < WIDE_PLATFORMS { RIDE_FLOATER_WIDE } else { RIDE_FLOATER_NARROW }
}

/// Carry per rule pass while standing on turtle `index`.
#[inline]
fn turtle_ride_drift(index: usize) -> f32 {
    if index < WIDE_PLATFORMS { RIDE_TURTLE_WIDE } else { RIDE_TURTLE_NARROW }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NullView;

    fn at(x: f32, y: f32) -> GameState {
        let mut state = GameState::initial();
        state.player.pos = Vec2::new(x, y);
        state
    }

    #[test]
    fn quiet_start_raises_nothing() {
        let state = GameState::initial();
        assert!(render(&state, &mut NullView).is_empty());
    }

    #[test]
    fn vehicle_contact_raises_end() {
        let mut state = at(50.0, 1063.0);
        state.vehicles[0] = Vec2::new(0.0, 1046.0);
        let raised = render(&state, &mut NullView);
        assert!(raised.contains(&GameEvent::Status { phase: GamePhase::End }));
    }

    #[test]
    fn supported_player_is_claimed_not_drowned() {
        // Floater 1 spans 340..740 at row 255; its deck claims (580, 287).
        let state = at(580.0, 287.0);
        let raised = render(&state, &mut NullView);
        assert_eq!(raised, vec![GameEvent::Ride { drift: RIDE_FLOATER_WIDE }]);
    }

    #[test]
    fn unsupported_player_in_a_wet_lane_drowns() {
        // 280 falls between floater 0 (ends at 30) and floater 1 (starts 310).
        let state = at(280.0, 287.0);
        let raised = render(&state, &mut NullView);
        assert_eq!(raised, vec![GameEvent::Status { phase: GamePhase::End }]);
    }

    #[test]
    fn riding_flag_stands_the_water_rules_down() {
        let mut state = at(280.0, 287.0);
        state.player.autoflow = true;
        assert!(render(&state, &mut NullView).is_empty());
    }

    #[test]
    fn turtle_claims_then_submergence_kills() {
        // Turtle 1 spans 220..620 at row 352.
        let mut state = at(580.0, 384.0);
        let raised = render(&state, &mut NullView);
        assert_eq!(raised, vec![GameEvent::Ride { drift: RIDE_TURTLE_WIDE }]);

        state.turtles_submerged = true;
        let raised = render(&state, &mut NullView);
        assert_eq!(
            raised,
            vec![
                GameEvent::Ride { drift: RIDE_TURTLE_WIDE },
                GameEvent::Status { phase: GamePhase::End },
            ]
        );
    }

    #[test]
    fn slot_centers_sit_on_the_finish_row() {
        assert_eq!(slot_center(0), Vec2::new(73.0, 195.0));
        assert_eq!(slot_center(2), Vec2::new(479.0, 195.0));
        assert_eq!(slot_center(4), Vec2::new(885.0, 195.0));
    }

    #[test]
    fn judge_finish_needs_two_radii() {
        let state = at(479.0, 195.0);
        assert_eq!(judge_finish(&state.player), Some(2));
        // 60 away is still inside the inclusive boundary.
        let state = at(479.0 + 60.0, 195.0);
        assert_eq!(judge_finish(&state.player), Some(2));
        let state = at(479.0 + 61.0, 195.0);
        assert_eq!(judge_finish(&state.player), None);
    }

    #[test]
    fn slot_zero_counts_like_any_other() {
        let state = at(73.0, 195.0);
        assert_eq!(judge_finish(&state.player), Some(0));
    }

    #[test]
    fn arrival_raises_a_finish_event() {
        let state = at(73.0, 195.0);
        let raised = render(&state, &mut NullView);
        assert!(raised.contains(&GameEvent::Finish { slot: 0 }));
    }

    #[test]
    fn spent_clock_raises_end_once() {
        let mut state = GameState::initial();
        state.time_remaining = 0.0;
        let raised = render(&state, &mut NullView);
        assert_eq!(raised, vec![GameEvent::Status { phase: GamePhase::End }]);
    }

    #[test]
    fn full_home_row_raises_win() {
        let mut state = GameState::initial();
        state.finished_slots = (0..5).collect();
        let raised = render(&state, &mut NullView);
        assert_eq!(raised, vec![GameEvent::Status { phase: GamePhase::Win }]);
    }

    #[test]
    fn terminal_phases_freeze_rule_evaluation() {
        // A stored End suppresses even a live vehicle collision.
        let mut state = at(50.0, 1063.0);
        state.vehicles[0] = Vec2::new(0.0, 1046.0);
        state.status.phase = GamePhase::End;
        assert!(render(&state, &mut NullView).is_empty());

        state.status.phase = GamePhase::Win;
        assert!(render(&state, &mut NullView).is_empty());
    }
}
