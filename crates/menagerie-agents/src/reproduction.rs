//! Reproduction behaviors producing offspring.
//!
//! A delivery produces an [`Offspring`] -- a tagged result resolved
//! explicitly at the birthing-room boundary, never a runtime type
//! check. The newborn is a complete, first-class animal: it carries the
//! full species behavior set, a randomized placement drawn from the
//! mother's generator, and its own generator seed.
//!
//! Newborn weight is the mother's weight scaled by the species
//! birth-weight ratio. Live-bearing species additionally nurse the
//! newborn immediately: a milk portion worth 0.5% of the mother's
//! weight transfers from mother to child.

use menagerie_types::{Gender, ReproduceKind};
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::animal::Animal;
use crate::eating::Food;
use crate::error::AnimalError;
use crate::factory;
use crate::species;

/// Milk portion as a fraction of the mother's weight (0.5%).
const MILK_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 3); // 0.005

/// The result of a delivery, tagged by how the young arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Offspring {
    /// Born live and already nursed.
    LiveYoung(Animal),
    /// Hatched from an egg laid during delivery.
    Hatchling(Animal),
}

impl Offspring {
    /// The newborn animal, however it arrived.
    pub const fn animal(&self) -> &Animal {
        match self {
            Self::LiveYoung(animal) | Self::Hatchling(animal) => animal,
        }
    }

    /// Unwrap the newborn animal, consuming the tag.
    pub fn into_animal(self) -> Animal {
        match self {
            Self::LiveYoung(animal) | Self::Hatchling(animal) => animal,
        }
    }
}

/// Produce an offspring from the mother per her species' behavior.
///
/// The caller ([`Animal::reproduce`]) has already cleared the pregnancy
/// flag; this function only builds the newborn and applies the
/// species-specific delivery side effects.
///
/// # Errors
///
/// Returns a weight validation or overflow error if the newborn weight
/// computation or nursing transfer fails.
pub(crate) fn deliver(mother: &mut Animal, rng: &mut StdRng) -> Result<Offspring, AnimalError> {
    let profile = species::profile(mother.species());

    let birth_weight = mother
        .weight()
        .checked_mul(profile.birth_weight_pct)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| AnimalError::ArithmeticOverflow {
            context: String::from("newborn weight from birth-weight ratio"),
        })?;

    let name = format!("Baby {}", mother.name());
    let gender = if rng.random_range(0..2) == 0 {
        Gender::Female
    } else {
        Gender::Male
    };

    let mut newborn = factory::spawn_newborn(
        mother.species(),
        name,
        birth_weight,
        gender,
        mother.body().enclosure,
        rng,
    )?;

    match profile.reproduce_kind {
        ReproduceKind::LiveBirth => {
            nurse(mother, &mut newborn)?;
            Ok(Offspring::LiveYoung(newborn))
        }
        ReproduceKind::LayEgg => {
            debug!(mother = %mother.id(), newborn = %newborn.id(), "egg laid and hatched");
            Ok(Offspring::Hatchling(newborn))
        }
    }
}

/// Transfer a milk portion from mother to newborn.
///
/// The newborn eats the milk (through its own eating behavior) and the
/// mother's weight drops by the same amount.
fn nurse(mother: &mut Animal, newborn: &mut Animal) -> Result<(), AnimalError> {
    let milk_weight = mother
        .weight()
        .checked_mul(MILK_FRACTION)
        .ok_or_else(|| AnimalError::ArithmeticOverflow {
            context: String::from("milk weight for nursing"),
        })?;

    newborn.eat(&Food::new(milk_weight))?;

    let reduced = mother
        .weight()
        .checked_sub(milk_weight)
        .ok_or_else(|| AnimalError::ArithmeticOverflow {
            context: String::from("mother weight after nursing"),
        })?;
    mother.set_weight(reduced)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::Species;
    use rand::SeedableRng;

    use super::*;
    use crate::factory::AnimalFactory;

    fn pregnant_mother(species: Species, weight: Decimal) -> Animal {
        let mut factory = AnimalFactory::new(123);
        let mut mother = factory
            .breed(species, String::from("Mama"), 8, weight, Gender::Female)
            .unwrap();
        mother.make_pregnant().unwrap();
        mother
    }

    #[test]
    fn live_birth_nurses_the_newborn() {
        let mother_weight = Decimal::new(2000, 1); // 200.0
        let mut mother = pregnant_mother(Species::Chimpanzee, mother_weight);
        let mut rng = StdRng::seed_from_u64(5);

        let offspring = mother.reproduce(&mut rng).unwrap();
        assert!(matches!(offspring, Offspring::LiveYoung(_)));
        let baby = offspring.into_animal();

        // Newborn: 10% of 200.0 = 20.0, plus milk of 0.5% of 200.0 = 1.0.
        assert_eq!(baby.weight(), Decimal::new(210, 1));
        // Mother loses the milk.
        assert_eq!(mother.weight(), Decimal::new(1990, 1));
        assert_eq!(baby.age(), 0);
        assert_eq!(baby.species(), Species::Chimpanzee);
    }

    #[test]
    fn egg_layers_skip_nursing() {
        let mother_weight = Decimal::new(2000, 1); // 200.0
        let mut mother = pregnant_mother(Species::Ostrich, mother_weight);
        let mut rng = StdRng::seed_from_u64(5);

        let offspring = mother.reproduce(&mut rng).unwrap();
        assert!(matches!(offspring, Offspring::Hatchling(_)));
        let baby = offspring.into_animal();

        // Newborn: 30% of 200.0 = 60.0. No milk transfer.
        assert_eq!(baby.weight(), Decimal::new(600, 1));
        assert_eq!(mother.weight(), mother_weight);
    }

    #[test]
    fn shark_pups_are_tiny() {
        let mut mother = pregnant_mother(Species::Shark, Decimal::new(8106, 1)); // 810.6
        let mut rng = StdRng::seed_from_u64(5);

        let offspring = mother.reproduce(&mut rng).unwrap();
        // 2% of 810.6 = 16.212
        assert_eq!(offspring.animal().weight(), Decimal::new(16212, 3));
    }

    #[test]
    fn newborn_is_named_after_the_mother() {
        let mut mother = pregnant_mother(Species::Kangaroo, Decimal::new(720, 1));
        let mut rng = StdRng::seed_from_u64(5);

        let offspring = mother.reproduce(&mut rng).unwrap();
        assert_eq!(offspring.animal().name(), "Baby Mama");
    }

    #[test]
    fn newborn_spawns_inside_the_enclosure() {
        let mut mother = pregnant_mother(Species::Squirrel, Decimal::new(10, 0));
        let mut rng = StdRng::seed_from_u64(5);

        let offspring = mother.reproduce(&mut rng).unwrap();
        let body = offspring.animal().body();
        assert!(body.enclosure.contains(body.x, body.y));
        assert!((1..=10).contains(&body.move_distance));
    }
}
