//! Movement patterns and their per-animal phase state.
//!
//! A [`MoveBehavior`] is one step function plus whatever state its
//! pattern needs between steps. The stateless patterns (pace, swim,
//! fly, still) live here; the multi-phase patterns keep their state
//! machines in [`hover`] and [`climb`].
//!
//! Every step routes through [`helper`], so hunger scaling and the
//! clamp-and-flip boundary rule apply uniformly.

pub mod climb;
pub mod helper;
pub mod hover;

use menagerie_types::{HorizontalDirection, MoveKind, VerticalDirection};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::animal::Body;

pub use climb::{ClimbPhase, ClimbState};
pub use hover::{HoverPhase, HoverState};

/// Fixed vertical flutter distance for the fly pattern.
const FLY_FLUTTER: u32 = 10;

/// A movement pattern with its phase state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveBehavior {
    /// Horizontal back-and-forth pacing.
    Pace,
    /// Diagonal swimming: full distance horizontally, half vertically.
    Swim,
    /// Horizontal travel with a fixed vertical flutter each step.
    Fly,
    /// No movement at all.
    Still,
    /// Two-phase hover-and-zoom darting.
    Hover(HoverState),
    /// Three-phase climb, fall, scurry cycle.
    Climb(ClimbState),
}

impl MoveBehavior {
    /// Create the behavior for a species' configured movement kind.
    pub const fn for_kind(kind: MoveKind) -> Self {
        match kind {
            MoveKind::Pace => Self::Pace,
            MoveKind::Swim => Self::Swim,
            MoveKind::Fly => Self::Fly,
            MoveKind::Still => Self::Still,
            MoveKind::Hover => Self::Hover(HoverState::new()),
            MoveKind::Climb => Self::Climb(ClimbState::new()),
        }
    }

    /// Apply one step of the pattern to the body.
    pub fn step(&mut self, body: &mut Body, rng: &mut StdRng) {
        match self {
            Self::Pace => helper::step_horizontal(body, body.move_distance),
            Self::Swim => {
                helper::step_horizontal(body, body.move_distance);
                helper::step_vertical(body, body.move_distance / 2);
            }
            Self::Fly => fly_step(body),
            Self::Still => {}
            Self::Hover(state) => state.step(body, rng),
            Self::Climb(state) => state.step(body, rng),
        }
    }
}

/// One fly step: a horizontal step plus a fixed vertical flutter that
/// flips the vertical direction every firing.
///
/// The flutter ignores hunger scaling (wings keep beating) but clamps
/// to the enclosure so the position invariant holds.
fn fly_step(body: &mut Body) {
    helper::step_horizontal(body, body.move_distance);

    match body.y_direction {
        VerticalDirection::Down => {
            body.y = body.y.saturating_add(FLY_FLUTTER).min(body.enclosure.height);
            body.y_direction = VerticalDirection::Up;
        }
        VerticalDirection::Up => {
            body.y = body.y.saturating_sub(FLY_FLUTTER);
            body.y_direction = VerticalDirection::Down;
        }
    }
}

/// Draw one random direction for each axis.
pub(crate) fn random_direction_pair(
    rng: &mut StdRng,
) -> (HorizontalDirection, VerticalDirection) {
    let horizontal = if rng.random_range(0..2) == 0 {
        HorizontalDirection::Left
    } else {
        HorizontalDirection::Right
    };
    let vertical = if rng.random_range(0..2) == 0 {
        VerticalDirection::Up
    } else {
        VerticalDirection::Down
    };
    (horizontal, vertical)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::{Enclosure, HungerState};
    use rand::SeedableRng;

    use super::*;

    fn test_body() -> Body {
        Body {
            x: 400,
            y: 200,
            x_direction: HorizontalDirection::Right,
            y_direction: VerticalDirection::Down,
            move_distance: 6,
            hunger: HungerState::Satisfied,
            enclosure: Enclosure::new(800, 400),
        }
    }

    #[test]
    fn pace_moves_only_horizontally() {
        let mut behavior = MoveBehavior::Pace;
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.x, 406);
        assert_eq!(body.y, 200);
    }

    #[test]
    fn swim_moves_half_distance_vertically() {
        let mut behavior = MoveBehavior::Swim;
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.x, 406);
        assert_eq!(body.y, 203);
    }

    #[test]
    fn fly_flutters_and_flips_each_step() {
        let mut behavior = MoveBehavior::Fly;
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.y, 210);
        assert_eq!(body.y_direction, VerticalDirection::Up);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.y, 200);
        assert_eq!(body.y_direction, VerticalDirection::Down);
    }

    #[test]
    fn fly_flutter_clamps_at_the_floor() {
        let mut behavior = MoveBehavior::Fly;
        let mut body = test_body();
        body.y = 395;
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.y, 400);
    }

    #[test]
    fn still_goes_nowhere() {
        let mut behavior = MoveBehavior::Still;
        let mut body = test_body();
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!((body.x, body.y), (400, 200));
    }

    #[test]
    fn starving_animals_do_not_pace() {
        let mut behavior = MoveBehavior::Pace;
        let mut body = test_body();
        body.hunger = HungerState::Starving;
        let mut rng = StdRng::seed_from_u64(1);

        behavior.step(&mut body, &mut rng);
        assert_eq!(body.x, 400);
    }

    #[test]
    fn behavior_state_roundtrips_through_serde() {
        let behavior = MoveBehavior::for_kind(MoveKind::Climb);
        let json = serde_json::to_string(&behavior).unwrap();
        let restored: MoveBehavior = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, behavior);
    }
}
