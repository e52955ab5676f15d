//! The two-phase hover-and-zoom movement pattern.
//!
//! A hovering animal alternates between two phases, each lasting a
//! randomly drawn number of steps:
//!
//! - **Hovering**: short erratic steps at the base distance, with a
//!   fresh random direction pair drawn *every* step.
//! - **Zooming**: straight-line darts at four times the base distance,
//!   with the direction pair drawn once at phase entry.
//!
//! The remaining-step counter decreases by one per firing; when it
//! would go non-positive the phase switches and a new counter is drawn
//! -- from `[7, 10]` when entering Hovering, `[5, 8]` when entering
//! Zooming.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::animal::Body;
use crate::movement::helper;
use crate::movement::random_direction_pair;

/// Step-count range drawn when entering the Hovering phase.
const HOVER_STEPS: core::ops::RangeInclusive<u32> = 7..=10;

/// Step-count range drawn when entering the Zooming phase.
const ZOOM_STEPS: core::ops::RangeInclusive<u32> = 5..=8;

/// Multiplier applied to the step distance while zooming.
const ZOOM_FACTOR: u32 = 4;

/// The phase a hovering animal is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    /// Short erratic steps near one spot.
    Hovering,
    /// Fast straight darts across the enclosure.
    Zooming,
}

/// Phase state for the hover pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    /// Current phase.
    phase: HoverPhase,
    /// Steps remaining before the next phase switch.
    steps_left: u32,
}

impl HoverState {
    /// Start in the Hovering phase with an exhausted counter, so the
    /// first firing immediately draws a fresh phase.
    pub const fn new() -> Self {
        Self {
            phase: HoverPhase::Hovering,
            steps_left: 0,
        }
    }

    /// The current phase.
    pub const fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Steps remaining in the current phase.
    pub const fn steps_left(&self) -> u32 {
        self.steps_left
    }

    /// Apply one hover step to the body.
    pub fn step(&mut self, body: &mut Body, rng: &mut StdRng) {
        if self.steps_left == 0 {
            self.switch_phase(body, rng);
        }
        self.steps_left = self.steps_left.saturating_sub(1);

        let distance = match self.phase {
            HoverPhase::Hovering => {
                // Erratic: redraw the direction pair on every step.
                let (horizontal, vertical) = random_direction_pair(rng);
                body.x_direction = horizontal;
                body.y_direction = vertical;
                body.move_distance
            }
            HoverPhase::Zooming => body.move_distance.saturating_mul(ZOOM_FACTOR),
        };

        helper::step_horizontal(body, distance);
        helper::step_vertical(body, distance);
    }

    /// Switch to the other phase, drawing its step counter and, when
    /// entering Zooming, a fresh travel direction for the dart.
    fn switch_phase(&mut self, body: &mut Body, rng: &mut StdRng) {
        match self.phase {
            HoverPhase::Hovering => {
                self.phase = HoverPhase::Zooming;
                self.steps_left = rng.random_range(ZOOM_STEPS);

                let (horizontal, vertical) = random_direction_pair(rng);
                body.x_direction = horizontal;
                body.y_direction = vertical;
            }
            HoverPhase::Zooming => {
                self.phase = HoverPhase::Hovering;
                self.steps_left = rng.random_range(HOVER_STEPS);
            }
        }
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::{
        Enclosure, HorizontalDirection, HungerState, VerticalDirection,
    };
    use rand::SeedableRng;

    use super::*;

    fn test_body() -> Body {
        Body {
            x: 400,
            y: 200,
            x_direction: HorizontalDirection::Right,
            y_direction: VerticalDirection::Down,
            move_distance: 3,
            hunger: HungerState::Satisfied,
            enclosure: Enclosure::new(800, 400),
        }
    }

    #[test]
    fn counter_decreases_by_one_per_step() {
        let mut state = HoverState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(42);

        state.step(&mut body, &mut rng);
        let mut previous = state.steps_left();

        while previous > 0 {
            state.step(&mut body, &mut rng);
            assert_eq!(state.steps_left(), previous - 1);
            previous = state.steps_left();
        }
    }

    #[test]
    fn first_firing_enters_zooming() {
        // The initial counter is exhausted, so the very first step
        // switches out of the starting phase.
        let mut state = HoverState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(42);

        state.step(&mut body, &mut rng);
        assert_eq!(state.phase(), HoverPhase::Zooming);
    }

    #[test]
    fn phase_switch_draws_from_the_documented_ranges() {
        let mut state = HoverState::new();
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen_hover = false;
        let mut seen_zoom = false;

        // Run long enough to observe both phases several times.
        for _ in 0..200 {
            let before = state.steps_left();
            let phase_before = state.phase();
            state.step(&mut body, &mut rng);

            if before == 0 {
                // A switch happened this step; the drawn counter was
                // decremented once already.
                let drawn = state.steps_left() + 1;
                match state.phase() {
                    HoverPhase::Zooming => {
                        assert_ne!(phase_before, HoverPhase::Zooming);
                        assert!((5..=8).contains(&drawn), "zoom draw {drawn}");
                        seen_zoom = true;
                    }
                    HoverPhase::Hovering => {
                        assert_ne!(phase_before, HoverPhase::Hovering);
                        assert!((7..=10).contains(&drawn), "hover draw {drawn}");
                        seen_hover = true;
                    }
                }
            }
        }

        assert!(seen_hover && seen_zoom);
    }

    #[test]
    fn position_stays_in_bounds_under_zooming() {
        let mut state = HoverState::new();
        let mut body = test_body();
        body.move_distance = 10; // zoom steps of 40
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            state.step(&mut body, &mut rng);
            assert!(body.enclosure.contains(body.x, body.y));
        }
    }
}
