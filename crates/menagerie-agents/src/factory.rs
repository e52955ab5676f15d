//! The species factory.
//!
//! All animals enter the simulation through here: the factory looks up
//! the species configuration row, randomizes the initial placement,
//! travel direction, and step distance, and hands each animal its own
//! generator seed drawn from the factory's master generator. Given the
//! same master seed and call order, a roster is fully reproducible.

use menagerie_types::{Enclosure, Gender, HungerState, Species};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::animal::{Animal, Body, NewAnimal};
use crate::error::AnimalError;
use crate::movement::random_direction_pair;

/// Range of the per-step travel distance drawn at creation.
const MOVE_DISTANCE: core::ops::RangeInclusive<u32> = 1..=10;

/// Creates fully configured animals for the simulation.
#[derive(Debug)]
pub struct AnimalFactory {
    /// Master generator: seeds every animal and draws their placement.
    rng: StdRng,
    /// The enclosure newly bred animals are placed in.
    enclosure: Enclosure,
}

impl AnimalFactory {
    /// Create a factory with the default enclosure bounds.
    pub fn new(seed: u64) -> Self {
        Self::with_enclosure(seed, Enclosure::default())
    }

    /// Create a factory placing animals in the given enclosure.
    pub fn with_enclosure(seed: u64, enclosure: Enclosure) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            enclosure,
        }
    }

    /// Breed an animal of the given species.
    ///
    /// The species row fixes the behavior set; position, directions,
    /// and step distance are randomized here.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name, age, or weight is out
    /// of range.
    pub fn breed(
        &mut self,
        species: Species,
        name: String,
        age: u32,
        weight: Decimal,
        gender: Gender,
    ) -> Result<Animal, AnimalError> {
        let body = random_body(self.enclosure, &mut self.rng);
        Animal::new(NewAnimal {
            name,
            species,
            gender,
            age,
            weight,
            body,
            rng_seed: self.rng.random(),
        })
    }
}

/// Build a newborn during delivery, randomized from the mother's
/// generator instead of the factory's.
pub(crate) fn spawn_newborn(
    species: Species,
    name: String,
    weight: Decimal,
    gender: Gender,
    enclosure: Enclosure,
    rng: &mut StdRng,
) -> Result<Animal, AnimalError> {
    let body = random_body(enclosure, rng);
    Animal::new(NewAnimal {
        name,
        species,
        gender,
        age: 0,
        weight,
        body,
        rng_seed: rng.random(),
    })
}

/// Draw a randomized starting body: position anywhere in the enclosure,
/// random travel directions, step distance in `[1, 10]`, satisfied.
fn random_body(enclosure: Enclosure, rng: &mut StdRng) -> Body {
    let (x_direction, y_direction) = random_direction_pair(rng);
    Body {
        x: rng.random_range(0..=enclosure.width),
        y: rng.random_range(0..=enclosure.height),
        x_direction,
        y_direction,
        move_distance: rng.random_range(MOVE_DISTANCE),
        hunger: HungerState::Satisfied,
        enclosure,
    }
}
