//! The species configuration table.
//!
//! Specialization is data, not inheritance: every species maps to one
//! [`SpeciesProfile`] row fixing its behavior triple, its birth-weight
//! ratio, and its display proportions. The factory reads this table at
//! construction, so an animal can never exist without a complete
//! behavior set.

use menagerie_types::{EatKind, MoveKind, ReproduceKind, Species};
use rust_decimal::Decimal;

/// The fixed configuration of one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    /// Movement pattern assigned at creation.
    pub move_kind: MoveKind,
    /// Eating behavior assigned at creation.
    pub eat_kind: EatKind,
    /// Reproduction behavior assigned at creation.
    pub reproduce_kind: ReproduceKind,
    /// Newborn weight as a percentage of the mother's weight.
    pub birth_weight_pct: Decimal,
    /// Display proportion for a newborn (`age == 0`).
    pub newborn_display: Decimal,
    /// Display proportion for an adult.
    pub adult_display: Decimal,
}

/// Display proportion shared by most newborns.
const NEWBORN_DISPLAY: Decimal = Decimal::from_parts(4, 0, 0, false, 1); // 0.4

/// Display proportion shared by most adults.
const ADULT_DISPLAY: Decimal = Decimal::ONE;

/// Look up the configuration row for a species.
pub fn profile(species: Species) -> SpeciesProfile {
    match species {
        Species::Chimpanzee => SpeciesProfile {
            move_kind: MoveKind::Pace,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LiveBirth,
            birth_weight_pct: Decimal::new(100, 1), // 10.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Dingo => SpeciesProfile {
            move_kind: MoveKind::Pace,
            eat_kind: EatKind::BuryAndEatBone,
            reproduce_kind: ReproduceKind::LiveBirth,
            birth_weight_pct: Decimal::new(100, 1), // 10.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Eagle => SpeciesProfile {
            move_kind: MoveKind::Fly,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LayEgg,
            birth_weight_pct: Decimal::new(250, 1), // 25.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Hummingbird => SpeciesProfile {
            move_kind: MoveKind::Hover,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LayEgg,
            birth_weight_pct: Decimal::new(175, 1), // 17.5
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Kangaroo => SpeciesProfile {
            move_kind: MoveKind::Pace,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LiveBirth,
            birth_weight_pct: Decimal::new(130, 1), // 13.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Ostrich => SpeciesProfile {
            move_kind: MoveKind::Pace,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LayEgg,
            birth_weight_pct: Decimal::new(300, 1), // 30.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
        Species::Platypus => SpeciesProfile {
            move_kind: MoveKind::Swim,
            eat_kind: EatKind::ShowAffection,
            reproduce_kind: ReproduceKind::LayEgg,
            birth_weight_pct: Decimal::new(120, 1), // 12.0
            newborn_display: Decimal::new(5, 1),    // 0.5
            adult_display: Decimal::new(11, 1),     // 1.1
        },
        Species::Shark => SpeciesProfile {
            move_kind: MoveKind::Swim,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LayEgg,
            birth_weight_pct: Decimal::new(20, 1), // 2.0
            newborn_display: Decimal::ONE,
            adult_display: Decimal::new(15, 1), // 1.5
        },
        Species::Squirrel => SpeciesProfile {
            move_kind: MoveKind::Climb,
            eat_kind: EatKind::Consume,
            reproduce_kind: ReproduceKind::LiveBirth,
            birth_weight_pct: Decimal::new(170, 1), // 17.0
            newborn_display: NEWBORN_DISPLAY,
            adult_display: ADULT_DISPLAY,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::Species;

    use super::*;

    #[test]
    fn every_species_has_a_profile() {
        for species in Species::ALL {
            let row = profile(species);
            assert!(row.birth_weight_pct > Decimal::ZERO);
            assert!(row.newborn_display > Decimal::ZERO);
            assert!(row.adult_display > Decimal::ZERO);
        }
    }

    #[test]
    fn mammals_bear_live_young() {
        assert_eq!(profile(Species::Chimpanzee).reproduce_kind, ReproduceKind::LiveBirth);
        assert_eq!(profile(Species::Dingo).reproduce_kind, ReproduceKind::LiveBirth);
        assert_eq!(profile(Species::Kangaroo).reproduce_kind, ReproduceKind::LiveBirth);
        assert_eq!(profile(Species::Squirrel).reproduce_kind, ReproduceKind::LiveBirth);
        // The platypus is the odd mammal out: it lays eggs.
        assert_eq!(profile(Species::Platypus).reproduce_kind, ReproduceKind::LayEgg);
    }

    #[test]
    fn hummingbird_hovers_and_squirrel_climbs() {
        assert_eq!(profile(Species::Hummingbird).move_kind, MoveKind::Hover);
        assert_eq!(profile(Species::Squirrel).move_kind, MoveKind::Climb);
    }

    #[test]
    fn display_overrides() {
        let shark = profile(Species::Shark);
        assert_eq!(shark.newborn_display, Decimal::ONE);
        assert_eq!(shark.adult_display, Decimal::new(15, 1));

        let platypus = profile(Species::Platypus);
        assert_eq!(platypus.newborn_display, Decimal::new(5, 1));
        assert_eq!(platypus.adult_display, Decimal::new(11, 1));
    }
}
