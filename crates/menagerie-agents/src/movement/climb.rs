//! The three-phase climb, fall, scurry movement pattern.
//!
//! The cycle always runs Climbing -> Falling -> Scurrying -> Climbing:
//!
//! - **Climbing**: straight up a wall until the projected position
//!   would reach the per-cycle ceiling, then flip horizontal direction,
//!   point down, and fall.
//! - **Falling**: diagonal descent (one step distance horizontally, two
//!   vertically) until the floor.
//! - **Scurrying**: horizontal dash; on reaching either wall the
//!   position clamps exactly to it, a fresh ceiling is drawn from 15%
//!   to 85% of the enclosure height, and the climb starts over.
//!
//! Phase-transition checks use the raw move distance; the actual steps
//! go through the shared helper and are therefore hunger-scaled.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::animal::Body;
use crate::movement::helper;
use menagerie_types::VerticalDirection;

/// Vertical step multiplier while falling.
const FALL_FACTOR: u32 = 2;

/// Lower bound of the ceiling draw, in percent of enclosure height.
const CEILING_LOW_PCT: u32 = 15;

/// Upper bound of the ceiling draw, in percent of enclosure height.
const CEILING_HIGH_PCT: u32 = 85;

/// The phase a climbing animal is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimbPhase {
    /// Ascending a wall toward the current ceiling.
    Climbing,
    /// Diagonal descent toward the floor.
    Falling,
    /// Horizontal dash to the next wall.
    Scurrying,
}

/// Phase state for the climb pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbState {
    /// Current phase.
    phase: ClimbPhase,
    /// The `y` coordinate the current climb tops out at. Smaller values
    /// are higher (screen coordinates); 0 is the enclosure ceiling.
    ceiling: u32,
}

impl ClimbState {
    /// Start climbing toward the enclosure top; the first real ceiling
    /// is drawn at the end of the first scurry.
    pub const fn new() -> Self {
        Self {
            phase: ClimbPhase::Climbing,
            ceiling: 0,
        }
    }

    /// The current phase.
    pub const fn phase(&self) -> ClimbPhase {
        self.phase
    }

    /// The `y` coordinate the current climb tops out at.
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Apply one climb step to the body.
    pub fn step(&mut self, body: &mut Body, rng: &mut StdRng) {
        match self.phase {
            ClimbPhase::Climbing => {
                // A climbing animal always heads up.
                body.y_direction = VerticalDirection::Up;
                helper::step_vertical(body, body.move_distance);

                // Reached (or about to pass) the ceiling: turn around,
                // face the other way, and start falling.
                if body.y.saturating_sub(body.move_distance) <= self.ceiling {
                    body.y_direction = VerticalDirection::Down;
                    body.x_direction = body.x_direction.flipped();
                    self.phase = ClimbPhase::Falling;
                }
            }
            ClimbPhase::Falling => {
                helper::step_horizontal(body, body.move_distance);
                helper::step_vertical(body, body.move_distance.saturating_mul(FALL_FACTOR));

                if body.y.saturating_add(body.move_distance) >= body.enclosure.height {
                    self.phase = ClimbPhase::Scurrying;
                }
            }
            ClimbPhase::Scurrying => {
                helper::step_horizontal(body, body.move_distance);

                let at_left = body.move_distance >= body.x;
                let at_right =
                    body.x.saturating_add(body.move_distance) >= body.enclosure.width;
                if at_left || at_right {
                    // Clamp exactly onto whichever wall was reached.
                    body.x = if at_right { body.enclosure.width } else { 0 };

                    self.ceiling = draw_ceiling(body.enclosure.height, rng);
                    self.phase = ClimbPhase::Climbing;
                }
            }
        }
    }
}

impl Default for ClimbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a climb ceiling uniformly from 15% to 85% of the enclosure
/// height (inclusive).
fn draw_ceiling(height: u32, rng: &mut StdRng) -> u32 {
    let low = height.saturating_mul(CEILING_LOW_PCT) / 100;
    let high = height.saturating_mul(CEILING_HIGH_PCT) / 100;
    rng.random_range(low..=high)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::{Enclosure, HorizontalDirection, HungerState};
    use rand::SeedableRng;

    use super::*;

    fn test_body() -> Body {
        Body {
            x: 400,
            y: 390,
            x_direction: HorizontalDirection::Right,
            y_direction: VerticalDirection::Up,
            move_distance: 5,
            hunger: HungerState::Satisfied,
            enclosure: Enclosure::new(800, 400),
        }
    }

    #[test]
    fn ceiling_draw_stays_in_the_15_to_85_percent_band() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let ceiling = draw_ceiling(400, &mut rng);
            assert!((60..=340).contains(&ceiling), "ceiling {ceiling}");
        }
    }

    #[test]
    fn phases_cycle_in_order() {
        let mut state = ClimbState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(11);

        let mut transitions = Vec::new();
        let mut last = state.phase();

        for _ in 0..2000 {
            state.step(&mut body, &mut rng);
            if state.phase() != last {
                transitions.push(state.phase());
                last = state.phase();
            }
        }

        // Every observed transition follows the fixed cycle.
        assert!(transitions.len() >= 6, "expected several full cycles");
        for window in transitions.windows(2) {
            match window {
                [ClimbPhase::Climbing, next] => assert_eq!(*next, ClimbPhase::Falling),
                [ClimbPhase::Falling, next] => assert_eq!(*next, ClimbPhase::Scurrying),
                [ClimbPhase::Scurrying, next] => assert_eq!(*next, ClimbPhase::Climbing),
                _ => {}
            }
        }
    }

    #[test]
    fn scurry_exit_clamps_to_a_wall_and_redraws_ceiling() {
        let mut state = ClimbState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(13);

        // Drive until the first scurry completes.
        let mut completed = false;
        for _ in 0..2000 {
            let was_scurrying = state.phase() == ClimbPhase::Scurrying;
            state.step(&mut body, &mut rng);
            if was_scurrying && state.phase() == ClimbPhase::Climbing {
                assert!(body.x == 0 || body.x == body.enclosure.width);
                assert!((60..=340).contains(&state.ceiling()));
                completed = true;
                break;
            }
        }
        assert!(completed, "scurry never completed");
    }

    #[test]
    fn climbing_forces_upward_motion_until_the_ceiling() {
        let mut state = ClimbState::new();
        let mut body = test_body();
        body.y_direction = VerticalDirection::Down; // will be overridden
        let mut rng = StdRng::seed_from_u64(17);

        let y_before = body.y;
        state.step(&mut body, &mut rng);
        assert!(body.y < y_before);
    }

    #[test]
    fn position_stays_in_bounds_across_many_cycles() {
        let mut state = ClimbState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(19);

        for _ in 0..5000 {
            state.step(&mut body, &mut rng);
            assert!(body.enclosure.contains(body.x, body.y));
        }
    }
}
