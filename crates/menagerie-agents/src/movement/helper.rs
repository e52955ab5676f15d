//! The shared stepping rules every movement pattern is built from.
//!
//! Two rules apply to every axis step, in order:
//!
//! 1. **Hunger scaling** -- a satisfied animal covers its full step
//!    distance, a hungry one a quarter of it (integer division), and a
//!    starving or unconscious one does not move at all.
//! 2. **Bound clamp and flip** -- a step that would carry a coordinate
//!    past an enclosure wall lands exactly on the wall and flips that
//!    axis' travel direction.

use menagerie_types::{HorizontalDirection, HungerState, VerticalDirection};

use crate::animal::Body;

/// Scale a step distance by the animal's hunger stage.
pub const fn scaled_distance(hunger: HungerState, distance: u32) -> u32 {
    match hunger {
        HungerState::Satisfied => distance,
        HungerState::Hungry => distance / 4,
        HungerState::Starving | HungerState::Unconscious => 0,
    }
}

/// Step the body horizontally by the hunger-scaled distance.
///
/// Clamps to the enclosure walls, flipping the horizontal direction on
/// contact.
pub const fn step_horizontal(body: &mut Body, distance: u32) {
    let distance = scaled_distance(body.hunger, distance);

    match body.x_direction {
        HorizontalDirection::Right => {
            if body.x.saturating_add(distance) > body.enclosure.width {
                body.x = body.enclosure.width;
                body.x_direction = HorizontalDirection::Left;
            } else {
                body.x = body.x.saturating_add(distance);
            }
        }
        HorizontalDirection::Left => {
            if distance > body.x {
                body.x = 0;
                body.x_direction = HorizontalDirection::Right;
            } else {
                body.x = body.x.saturating_sub(distance);
            }
        }
    }
}

/// Step the body vertically by the hunger-scaled distance.
///
/// `Down` increases `y` toward the floor (`y == height`). Clamps to the
/// floor and ceiling, flipping the vertical direction on contact.
pub const fn step_vertical(body: &mut Body, distance: u32) {
    let distance = scaled_distance(body.hunger, distance);

    match body.y_direction {
        VerticalDirection::Down => {
            if body.y.saturating_add(distance) > body.enclosure.height {
                body.y = body.enclosure.height;
                body.y_direction = VerticalDirection::Up;
            } else {
                body.y = body.y.saturating_add(distance);
            }
        }
        VerticalDirection::Up => {
            if distance > body.y {
                body.y = 0;
                body.y_direction = VerticalDirection::Down;
            } else {
                body.y = body.y.saturating_sub(distance);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::Enclosure;

    use super::*;

    fn body_at(x: u32, y: u32) -> Body {
        Body {
            x,
            y,
            x_direction: HorizontalDirection::Right,
            y_direction: VerticalDirection::Down,
            move_distance: 5,
            hunger: HungerState::Satisfied,
            enclosure: Enclosure::new(800, 400),
        }
    }

    #[test]
    fn satisfied_moves_full_distance() {
        assert_eq!(scaled_distance(HungerState::Satisfied, 8), 8);
    }

    #[test]
    fn hungry_moves_quarter_distance_truncated() {
        assert_eq!(scaled_distance(HungerState::Hungry, 8), 2);
        assert_eq!(scaled_distance(HungerState::Hungry, 5), 1);
        assert_eq!(scaled_distance(HungerState::Hungry, 3), 0);
    }

    #[test]
    fn starving_and_unconscious_do_not_move() {
        assert_eq!(scaled_distance(HungerState::Starving, 10), 0);
        assert_eq!(scaled_distance(HungerState::Unconscious, 10), 0);
    }

    #[test]
    fn hungry_near_wall_does_not_clamp() {
        // Move distance 5, hungry, heading right from x=798 with max 800:
        // effective distance 1, so the step lands at 799 without clamping.
        let mut body = body_at(798, 100);
        body.hunger = HungerState::Hungry;
        step_horizontal(&mut body, 5);
        assert_eq!(body.x, 799);
        assert_eq!(body.x_direction, HorizontalDirection::Right);
    }

    #[test]
    fn right_wall_clamps_and_flips() {
        let mut body = body_at(798, 100);
        step_horizontal(&mut body, 5);
        assert_eq!(body.x, 800);
        assert_eq!(body.x_direction, HorizontalDirection::Left);
    }

    #[test]
    fn left_wall_clamps_and_flips() {
        let mut body = body_at(3, 100);
        body.x_direction = HorizontalDirection::Left;
        step_horizontal(&mut body, 5);
        assert_eq!(body.x, 0);
        assert_eq!(body.x_direction, HorizontalDirection::Right);
    }

    #[test]
    fn floor_clamps_and_flips() {
        let mut body = body_at(100, 398);
        step_vertical(&mut body, 5);
        assert_eq!(body.y, 400);
        assert_eq!(body.y_direction, VerticalDirection::Up);
    }

    #[test]
    fn ceiling_clamps_and_flips() {
        let mut body = body_at(100, 2);
        body.y_direction = VerticalDirection::Up;
        step_vertical(&mut body, 5);
        assert_eq!(body.y, 0);
        assert_eq!(body.y_direction, VerticalDirection::Down);
    }

    #[test]
    fn step_exactly_onto_wall_does_not_flip() {
        // x + distance == width is still in bounds; the flip happens
        // only when the wall would be passed.
        let mut body = body_at(795, 100);
        step_horizontal(&mut body, 5);
        assert_eq!(body.x, 800);
        assert_eq!(body.x_direction, HorizontalDirection::Right);
    }
}
