//! Enumeration types for the Menagerie simulation.
//!
//! The discrete vocabulary shared by every crate: species tags, the
//! hunger decay sequence, movement directions, and the behavior kind
//! selectors used by the species configuration table.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// A species of animal the zoo can house.
///
/// Each species maps to one cage and one row of the species
/// configuration table (behavior set, birth-weight ratio, display
/// proportions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// A pacing, live-bearing primate.
    Chimpanzee,
    /// A wild dog that buries bones before eating them.
    Dingo,
    /// A large flying raptor.
    Eagle,
    /// A tiny hovering bird.
    Hummingbird,
    /// A pacing marsupial.
    Kangaroo,
    /// A flightless pacing bird.
    Ostrich,
    /// An egg-laying, swimming mammal.
    Platypus,
    /// A large swimming fish.
    Shark,
    /// A climbing rodent.
    Squirrel,
}

impl Species {
    /// All species, in cage-registration order.
    pub const ALL: [Self; 9] = [
        Self::Chimpanzee,
        Self::Dingo,
        Self::Eagle,
        Self::Hummingbird,
        Self::Kangaroo,
        Self::Ostrich,
        Self::Platypus,
        Self::Shark,
        Self::Squirrel,
    ];
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Chimpanzee => "chimpanzee",
            Self::Dingo => "dingo",
            Self::Eagle => "eagle",
            Self::Hummingbird => "hummingbird",
            Self::Kangaroo => "kangaroo",
            Self::Ostrich => "ostrich",
            Self::Platypus => "platypus",
            Self::Shark => "shark",
            Self::Squirrel => "squirrel",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Biological sex of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
}

// ---------------------------------------------------------------------------
// Hunger
// ---------------------------------------------------------------------------

/// The four-stage hunger decay sequence.
///
/// Absent feeding, an animal's hunger advances one stage per decay
/// firing, in declaration order, and never regresses or skips. Only an
/// explicit feed resets it to [`HungerState::Satisfied`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HungerState {
    /// Recently fed; moves at full speed.
    Satisfied,
    /// Getting hungry; moves at a quarter speed.
    Hungry,
    /// Too weak to move.
    Starving,
    /// Collapsed; the decay driver has stopped.
    Unconscious,
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Horizontal travel direction within the enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    /// Toward `x == 0`.
    Left,
    /// Toward `x == width`.
    Right,
}

impl HorizontalDirection {
    /// The opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Vertical travel direction within the enclosure.
///
/// Screen coordinates: `Down` increases `y`, and the enclosure floor is
/// `y == height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDirection {
    /// Toward `y == 0` (the top of the enclosure).
    Up,
    /// Toward `y == height` (the floor).
    Down,
}

impl VerticalDirection {
    /// The opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

// ---------------------------------------------------------------------------
// Behavior kind selectors
// ---------------------------------------------------------------------------

/// The movement pattern assigned to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Horizontal back-and-forth pacing.
    Pace,
    /// Diagonal swimming (full horizontal, half vertical).
    Swim,
    /// Horizontal travel with a fixed vertical flutter.
    Fly,
    /// Two-phase hover-and-zoom darting.
    Hover,
    /// Three-phase climb, fall, scurry cycle.
    Climb,
    /// No movement at all.
    Still,
}

/// The eating behavior assigned to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EatKind {
    /// Eat the food directly.
    Consume,
    /// Bury the food, dig it back up, then eat it.
    BuryAndEatBone,
    /// Eat, then show affection.
    ShowAffection,
}

/// The reproduction behavior assigned to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReproduceKind {
    /// Bear live young and nurse them after birth.
    LiveBirth,
    /// Lay an egg which hatches immediately.
    LayEgg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunger_states_order_by_severity() {
        assert!(HungerState::Satisfied < HungerState::Hungry);
        assert!(HungerState::Hungry < HungerState::Starving);
        assert!(HungerState::Starving < HungerState::Unconscious);
    }

    #[test]
    fn directions_flip_symmetrically() {
        assert_eq!(HorizontalDirection::Left.flipped(), HorizontalDirection::Right);
        assert_eq!(HorizontalDirection::Right.flipped().flipped(), HorizontalDirection::Right);
        assert_eq!(VerticalDirection::Up.flipped(), VerticalDirection::Down);
        assert_eq!(VerticalDirection::Down.flipped().flipped(), VerticalDirection::Down);
    }

    #[test]
    fn all_species_are_listed_once() {
        let mut seen = std::collections::BTreeSet::new();
        for species in Species::ALL {
            assert!(seen.insert(species));
        }
        assert_eq!(seen.len(), 9);
    }
}
