//! Collision, containment, and bounds arithmetic
//!
//! The geometric half of the rules: a circular player against axis-aligned
//! lane rectangles, toroidal wrapping for lane occupants, and the clamps
//! that keep the player inside the playable area.

use glam::Vec2;

use crate::consts::{BOTTOM_MARGIN, FIELD_HEIGHT, FIELD_WIDTH, SIDE_MARGIN, TOP_MARGIN};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Circle/rectangle overlap test.
///
/// Piecewise by where the center projects: inside both spans is an
/// immediate hit, inside one span compares against the near edge, outside
/// both compares against the near corner. Touching at exactly `radius`
/// does not count.
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    let inside_x = center.x >= rect.left() && center.x <= rect.right();
    let inside_y = center.y >= rect.top() && center.y <= rect.bottom();
    match (inside_x, inside_y) {
        (true, true) => true,
        (true, false) => {
            let edge = if center.y < rect.top() { rect.top() } else { rect.bottom() };
            (center.y - edge).abs() < radius
        }
        (false, true) => {
            let edge = if center.x < rect.left() { rect.left() } else { rect.right() };
            (center.x - edge).abs() < radius
        }
        (false, false) => {
            let corner = Vec2::new(
                if center.x < rect.left() { rect.left() } else { rect.right() },
                if center.y < rect.top() { rect.top() } else { rect.bottom() },
            );
            center.distance(corner) < radius
        }
    }
}

/// Platform support test: the center must lie within the rectangle expanded
/// by `radius` on every side, so the player can hang over a platform edge by
/// up to one radius before falling off.
#[inline]
pub fn circle_on_platform(center: Vec2, radius: f32, rect: Rect) -> bool {
    center.x >= rect.left() - radius
        && center.x <= rect.right() + radius
        && center.y >= rect.top() - radius
        && center.y <= rect.bottom() + radius
}

/// True when `y` falls inside the rectangle's vertical band, both edges
/// included. Horizontal position is deliberately ignored.
#[inline]
pub fn in_lane_band(y: f32, rect: Rect) -> bool {
    y >= rect.top() && y <= rect.bottom()
}

/// Wrap a lane occupant of the given `width` around the field.
///
/// Leaving on the right re-enters just off the left edge and vice versa;
/// anything already in range passes through untouched. Single drift steps
/// are far smaller than the field, so one adjustment is always enough.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    if x > FIELD_WIDTH {
        x - FIELD_WIDTH - width
    } else if x < -width {
        x + FIELD_WIDTH + width
    } else {
        x
    }
}

/// Clamp a player x into the playable columns.
#[inline]
pub fn clamp_player_x(x: f32, radius: f32) -> f32 {
    x.clamp(radius + SIDE_MARGIN, FIELD_WIDTH - radius - SIDE_MARGIN)
}

/// Clamp a player y between the home row and the start row.
#[inline]
pub fn clamp_player_y(y: f32, radius: f32) -> f32 {
    y.clamp(radius + TOP_MARGIN, FIELD_HEIGHT - radius - BOTTOM_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLATFORM_WIDE, PLAYER_RADIUS};
    use proptest::prelude::*;

    const LANE: Rect = Rect::new(0.0, 0.0, 100.0, 60.0);

    #[test]
    fn center_inside_rect_hits() {
        assert!(circle_hits_rect(Vec2::new(50.0, 30.0), 30.0, LANE));
    }

    #[test]
    fn side_approach_uses_nearest_edge() {
        // Level with the lane, approaching from the right.
        assert!(!circle_hits_rect(Vec2::new(150.0, 30.0), 30.0, LANE));
        assert!(circle_hits_rect(Vec2::new(120.0, 30.0), 30.0, LANE));
    }

    #[test]
    fn vertical_approach_uses_nearest_edge() {
        assert!(circle_hits_rect(Vec2::new(50.0, 80.0), 30.0, LANE));
        assert!(!circle_hits_rect(Vec2::new(50.0, 95.0), 30.0, LANE));
    }

    #[test]
    fn touching_at_exact_radius_is_a_miss() {
        // 30 units off the right edge: distance == radius, strict test.
        assert!(!circle_hits_rect(Vec2::new(130.0, 30.0), 30.0, LANE));
        assert!(!circle_hits_rect(Vec2::new(50.0, 90.0), 30.0, LANE));
    }

    #[test]
    fn corner_approach_uses_corner_distance() {
        // 25 right of and 25 below the bottom-right corner: ~35.36 away.
        assert!(!circle_hits_rect(Vec2::new(125.0, 85.0), 30.0, LANE));
        // 20/20 puts the corner ~28.28 away.
        assert!(circle_hits_rect(Vec2::new(120.0, 80.0), 30.0, LANE));
    }

    #[test]
    fn center_on_edge_projects_inside() {
        // Exactly on the right edge counts as inside the horizontal span.
        assert!(circle_hits_rect(Vec2::new(100.0, 30.0), 30.0, LANE));
    }

    #[test]
    fn platform_support_extends_one_radius_past_each_edge() {
        let deck = Rect::new(100.0, 200.0, PLATFORM_WIDE, 60.0);
        assert!(circle_on_platform(Vec2::new(70.0, 230.0), 30.0, deck));
        assert!(circle_on_platform(Vec2::new(530.0, 230.0), 30.0, deck));
        assert!(!circle_on_platform(Vec2::new(69.0, 230.0), 30.0, deck));
        assert!(!circle_on_platform(Vec2::new(531.0, 230.0), 30.0, deck));
    }

    #[test]
    fn lane_band_ignores_horizontal_position() {
        let deck = Rect::new(-400.0, 255.0, PLATFORM_WIDE, 60.0);
        assert!(in_lane_band(255.0, deck));
        assert!(in_lane_band(315.0, deck));
        assert!(in_lane_band(287.0, deck));
        assert!(!in_lane_band(254.9, deck));
        assert!(!in_lane_band(315.1, deck));
    }

    #[test]
    fn wrap_sends_right_overflow_left() {
        let wrapped = wrap_x(961.0, 400.0);
        assert!((wrapped - -399.0).abs() < 1e-4);
    }

    #[test]
    fn wrap_sends_left_overflow_right() {
        let wrapped = wrap_x(-404.0, 400.0);
        assert!((wrapped - 956.0).abs() < 1e-4);
    }

    #[test]
    fn wrap_passes_in_range_values_through() {
        assert_eq!(wrap_x(0.0, 400.0), 0.0);
        assert_eq!(wrap_x(960.0, 400.0), 960.0);
        assert_eq!(wrap_x(-400.0, 400.0), -400.0);
    }

    #[test]
    fn player_clamps_stop_at_the_chrome() {
        assert_eq!(clamp_player_x(0.0, PLAYER_RADIUS), 73.0);
        assert_eq!(clamp_player_x(2000.0, PLAYER_RADIUS), 887.0);
        assert_eq!(clamp_player_y(0.0, PLAYER_RADIUS), 195.0);
        assert_eq!(clamp_player_y(2000.0, PLAYER_RADIUS), 1160.0);
    }

    proptest! {
        #[test]
        fn wrap_keeps_occupants_in_range(x in -400.0f32..960.0, step in -4.0f32..4.0) {
            let wrapped = wrap_x(x + step, 400.0);
            prop_assert!(wrapped >= -400.0);
            prop_assert!(wrapped <= 960.0);
        }

        #[test]
        fn wrap_is_identity_in_range(x in -250.0f32..=960.0) {
            prop_assert_eq!(wrap_x(x, 250.0), x);
        }

        #[test]
        fn clamps_always_land_in_the_playable_area(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let cx = clamp_player_x(x, PLAYER_RADIUS);
            let cy = clamp_player_y(y, PLAYER_RADIUS);
            prop_assert!((73.0..=887.0).contains(&cx));
            prop_assert!((195.0..=1160.0).contains(&cy));
        }
    }
}
