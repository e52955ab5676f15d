//! Eating behaviors and the food they consume.
//!
//! Every behavior ends the same way -- the food's weight is added to
//! the animal's weight through the validated setter -- but species
//! differ in the ritual around it. The rituals are observable only as
//! trace events.

use menagerie_types::EatKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animal::Animal;
use crate::error::AnimalError;

/// A portion of food with a known weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Weight of the portion in pounds.
    weight: Decimal,
}

impl Food {
    /// Create a portion of the given weight.
    pub const fn new(weight: Decimal) -> Self {
        Self { weight }
    }

    /// Weight of the portion in pounds.
    pub const fn weight(&self) -> Decimal {
        self.weight
    }
}

/// Apply an eating behavior: consume the food, with species flavor.
///
/// # Errors
///
/// Returns a weight validation or overflow error; the animal is
/// unchanged in that case.
pub(crate) fn apply(kind: EatKind, animal: &mut Animal, food: &Food) -> Result<(), AnimalError> {
    match kind {
        EatKind::Consume => consume(animal, food),
        EatKind::BuryAndEatBone => {
            debug!(animal = %animal.id(), "burying the food, then digging it back up");
            consume(animal, food)?;
            debug!(animal = %animal.id(), "barking in excitement");
            Ok(())
        }
        EatKind::ShowAffection => {
            consume(animal, food)?;
            debug!(animal = %animal.id(), "showing affection after eating");
            Ok(())
        }
    }
}

/// Add the food's weight to the animal's weight.
fn consume(animal: &mut Animal, food: &Food) -> Result<(), AnimalError> {
    let new_weight = animal
        .weight()
        .checked_add(food.weight())
        .ok_or_else(|| AnimalError::ArithmeticOverflow {
            context: String::from("weight gain from eating"),
        })?;
    animal.set_weight(new_weight)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::{Gender, Species};

    use super::*;
    use crate::factory::AnimalFactory;

    fn test_animal(species: Species) -> Animal {
        let mut factory = AnimalFactory::new(99);
        factory
            .breed(species, String::from("Tester"), 4, Decimal::new(400, 1), Gender::Male)
            .unwrap()
    }

    #[test]
    fn every_behavior_adds_the_food_weight() {
        for species in [Species::Kangaroo, Species::Dingo, Species::Platypus] {
            let mut animal = test_animal(species);
            let before = animal.weight();
            animal.eat(&Food::new(Decimal::new(15, 1))).unwrap();
            assert_eq!(animal.weight(), before + Decimal::new(15, 1), "{species}");
        }
    }

    #[test]
    fn zero_weight_food_is_a_valid_meal() {
        let mut animal = test_animal(Species::Kangaroo);
        let before = animal.weight();
        animal.eat(&Food::new(Decimal::ZERO)).unwrap();
        assert_eq!(animal.weight(), before);
    }
}
