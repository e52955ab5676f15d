//! Animal state and validated mutation.
//!
//! An [`Animal`] owns everything that changes over its lifetime:
//! vitals (age, weight, hunger), placement (position, direction),
//! the pregnancy flag, the child list, and the behavior triple picked
//! from the species table at creation. Every mutating operation either
//! succeeds completely or leaves the state untouched -- a rejected
//! mutation has no side effect.
//!
//! This type carries no timers, locks, or channels. The concurrent
//! driver harness in `menagerie-core` wraps an animal in a mutex and
//! calls the operations here one at a time.

use chrono::{DateTime, Utc};
use menagerie_types::{
    AnimalId, AnimalSnapshot, Enclosure, Gender, HorizontalDirection, HungerState, Species,
    VerticalDirection,
};
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::eating::{self, Food};
use crate::error::AnimalError;
use crate::movement::MoveBehavior;
use crate::reproduction::{self, Offspring};
use crate::species;

/// Maximum valid age in years.
pub const MAX_AGE: u32 = 100;

/// Maximum valid weight in pounds.
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// The mutable placement and hunger state movement logic operates on.
///
/// Split out from [`Animal`] so a move behavior can borrow the body
/// mutably while its own phase state is borrowed separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Horizontal position, always within `[0, enclosure.width]`.
    pub x: u32,
    /// Vertical position, always within `[0, enclosure.height]`.
    pub y: u32,
    /// Horizontal travel direction.
    pub x_direction: HorizontalDirection,
    /// Vertical travel direction.
    pub y_direction: VerticalDirection,
    /// Fixed per-step travel distance, drawn once at creation (1--10).
    pub move_distance: u32,
    /// Current hunger stage; scales the effective step distance.
    pub hunger: HungerState,
    /// The bounds this body is clamped to.
    pub enclosure: Enclosure,
}

/// Parameters for assembling an animal.
///
/// Bundled into a struct to keep the constructor signature manageable.
/// Use [`AnimalFactory`](crate::factory::AnimalFactory) rather than
/// building these by hand -- the factory fills in the species behavior
/// set and randomized placement.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    /// Display name (letters and spaces only).
    pub name: String,
    /// Species tag; selects the behavior set and cage.
    pub species: Species,
    /// Biological sex.
    pub gender: Gender,
    /// Age in years (0--100).
    pub age: u32,
    /// Weight in pounds (0--1000).
    pub weight: Decimal,
    /// Initial placement and movement state.
    pub body: Body,
    /// Seed for the animal's private random generator.
    pub rng_seed: u64,
}

/// A simulated creature with validated vitals and a behavior triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Unique identifier.
    id: AnimalId,
    /// Display name (letters and spaces only).
    name: String,
    /// Species tag.
    species: Species,
    /// Biological sex.
    gender: Gender,
    /// Age in years (0--100).
    age: u32,
    /// Weight in pounds (0--1000).
    weight: Decimal,
    /// Whether the animal is awaiting delivery.
    pregnant: bool,
    /// Children this animal has produced, oldest first. Append-only.
    children: Vec<AnimalId>,
    /// When the animal was created.
    created_at: DateTime<Utc>,
    /// Seed the animal's private random generator was built from.
    ///
    /// The seed is persisted; the generator's stream position is not.
    rng_seed: u64,
    /// Placement, direction, and hunger.
    body: Body,
    /// Movement pattern, including multi-phase state.
    movement: MoveBehavior,
}

impl Animal {
    /// Assemble an animal from validated parts.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name, age, or weight is out of
    /// range.
    pub fn new(params: NewAnimal) -> Result<Self, AnimalError> {
        validate_name(&params.name)?;
        validate_age(params.age)?;
        validate_weight(params.weight)?;

        let movement = MoveBehavior::for_kind(species::profile(params.species).move_kind);

        Ok(Self {
            id: AnimalId::new(),
            name: params.name,
            species: params.species,
            gender: params.gender,
            age: params.age,
            weight: params.weight,
            pregnant: false,
            children: Vec::new(),
            created_at: Utc::now(),
            rng_seed: params.rng_seed,
            body: params.body,
            movement,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The animal's identifier.
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// The animal's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The animal's species.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// The animal's sex.
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// The animal's age in years.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// The animal's weight in pounds.
    pub const fn weight(&self) -> Decimal {
        self.weight
    }

    /// The animal's current hunger stage.
    pub const fn hunger(&self) -> HungerState {
        self.body.hunger
    }

    /// Whether the animal is awaiting delivery.
    pub const fn is_pregnant(&self) -> bool {
        self.pregnant
    }

    /// The animal's children, oldest first.
    pub fn children(&self) -> &[AnimalId] {
        &self.children
    }

    /// The seed of the animal's private random generator.
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// The animal's placement and movement state.
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// When the animal was created.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The proportion at which to display the animal.
    ///
    /// Newborns (`age == 0`) render smaller than adults; the exact
    /// proportions come from the species table.
    pub fn display_size(&self) -> Decimal {
        let profile = species::profile(self.species);
        if self.age == 0 {
            profile.newborn_display
        } else {
            profile.adult_display
        }
    }

    /// Take a read-only snapshot of the animal's observable state.
    pub fn snapshot(&self) -> AnimalSnapshot {
        AnimalSnapshot {
            id: self.id,
            name: self.name.clone(),
            species: self.species,
            gender: self.gender,
            age: self.age,
            weight: self.weight,
            hunger: self.body.hunger,
            pregnant: self.pregnant,
            x: self.body.x,
            y: self.body.y,
            x_direction: self.body.x_direction,
            y_direction: self.body.y_direction,
            move_distance: self.body.move_distance,
            display_size: self.display_size(),
            children: self.children.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Validated setters
    // -----------------------------------------------------------------------

    /// Rename the animal.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::InvalidName`] if the name contains
    /// anything other than letters and spaces. The prior name is
    /// retained on rejection.
    pub fn set_name(&mut self, name: &str) -> Result<(), AnimalError> {
        validate_name(name)?;
        self.name = name.to_owned();
        Ok(())
    }

    /// Set the animal's age.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::AgeOutOfRange`] if `age > 100`. The prior
    /// age is retained on rejection.
    pub fn set_age(&mut self, age: u32) -> Result<(), AnimalError> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Set the animal's weight.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::WeightOutOfRange`] if the weight is
    /// outside `[0, 1000]` pounds. The prior weight is retained on
    /// rejection.
    pub fn set_weight(&mut self, weight: Decimal) -> Result<(), AnimalError> {
        validate_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Hunger
    // -----------------------------------------------------------------------

    /// Advance hunger by exactly one stage.
    ///
    /// Returns the new stage, or `None` if the animal is already
    /// unconscious (the terminal stage; only feeding resets it).
    pub const fn advance_hunger(&mut self) -> Option<HungerState> {
        let next = match self.body.hunger {
            HungerState::Satisfied => HungerState::Hungry,
            HungerState::Hungry => HungerState::Starving,
            HungerState::Starving => HungerState::Unconscious,
            HungerState::Unconscious => return None,
        };
        self.body.hunger = next;
        Some(next)
    }

    /// Eat the given food.
    ///
    /// Applies the species eating behavior (weight increases by the
    /// food's weight, plus any species flavor), then resets hunger to
    /// [`HungerState::Satisfied`]. The caller is responsible for
    /// restarting the hunger countdown.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the resulting weight would leave
    /// the valid range; hunger is not reset in that case.
    pub fn eat(&mut self, food: &Food) -> Result<(), AnimalError> {
        let behavior = species::profile(self.species).eat_kind;
        eating::apply(behavior, self, food)?;
        self.body.hunger = HungerState::Satisfied;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reproduction
    // -----------------------------------------------------------------------

    /// Mark the animal pregnant.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::AlreadyPregnant`] if the flag is already
    /// set -- each pregnancy is queued for delivery exactly once, so a
    /// second impregnation before delivery is rejected.
    pub const fn make_pregnant(&mut self) -> Result<(), AnimalError> {
        if self.pregnant {
            return Err(AnimalError::AlreadyPregnant(self.id));
        }
        self.pregnant = true;
        Ok(())
    }

    /// Deliver the pregnancy, producing an offspring.
    ///
    /// The pregnancy flag is cleared *before* the reproduction behavior
    /// runs, so a failed delivery never leaves the animal marked
    /// pregnant. On success the child is appended to the child list.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::NotPregnant`] if the animal is not
    /// pregnant, or a weight validation error from the behavior.
    pub fn reproduce(&mut self, rng: &mut StdRng) -> Result<Offspring, AnimalError> {
        if !self.pregnant {
            return Err(AnimalError::NotPregnant(self.id));
        }
        self.pregnant = false;

        let offspring = reproduction::deliver(self, rng)?;
        self.children.push(offspring.animal().id());
        Ok(offspring)
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Apply one step of the animal's movement pattern.
    pub fn step_motion(&mut self, rng: &mut StdRng) {
        let Self { body, movement, .. } = self;
        movement.step(body, rng);
    }
}

/// Validate a display name: non-empty, letters and spaces only.
fn validate_name(name: &str) -> Result<(), AnimalError> {
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
    if valid {
        Ok(())
    } else {
        Err(AnimalError::InvalidName {
            name: name.to_owned(),
        })
    }
}

/// Validate an age against the 0--100 range.
const fn validate_age(age: u32) -> Result<(), AnimalError> {
    if age > MAX_AGE {
        return Err(AnimalError::AgeOutOfRange { age });
    }
    Ok(())
}

/// Validate a weight against the 0--1000 pound range.
fn validate_weight(weight: Decimal) -> Result<(), AnimalError> {
    if weight < Decimal::ZERO || weight > MAX_WEIGHT {
        return Err(AnimalError::WeightOutOfRange { weight });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_types::Enclosure;
    use rand::SeedableRng;

    use super::*;

    fn test_body() -> Body {
        Body {
            x: 100,
            y: 100,
            x_direction: HorizontalDirection::Right,
            y_direction: VerticalDirection::Down,
            move_distance: 5,
            hunger: HungerState::Satisfied,
            enclosure: Enclosure::default(),
        }
    }

    fn test_animal(species: Species) -> Animal {
        Animal::new(NewAnimal {
            name: String::from("Bobo"),
            species,
            gender: Gender::Female,
            age: 10,
            weight: Decimal::new(1282, 1), // 128.2
            body: test_body(),
            rng_seed: 7,
        })
        .unwrap()
    }

    #[test]
    fn construction_validates_name() {
        let result = Animal::new(NewAnimal {
            name: String::from("B0b0!"),
            species: Species::Chimpanzee,
            gender: Gender::Male,
            age: 1,
            weight: Decimal::TEN,
            body: test_body(),
            rng_seed: 0,
        });
        assert!(matches!(result, Err(AnimalError::InvalidName { .. })));
    }

    #[test]
    fn age_in_range_is_accepted() {
        let mut animal = test_animal(Species::Chimpanzee);
        assert!(animal.set_age(0).is_ok());
        assert_eq!(animal.age(), 0);
        assert!(animal.set_age(100).is_ok());
        assert_eq!(animal.age(), 100);
    }

    #[test]
    fn age_out_of_range_retains_prior_value() {
        let mut animal = test_animal(Species::Chimpanzee);
        let result = animal.set_age(101);
        assert!(matches!(result, Err(AnimalError::AgeOutOfRange { age: 101 })));
        assert_eq!(animal.age(), 10);
    }

    #[test]
    fn weight_out_of_range_retains_prior_value() {
        let mut animal = test_animal(Species::Shark);
        let result = animal.set_weight(Decimal::new(10001, 1)); // 1000.1
        assert!(matches!(result, Err(AnimalError::WeightOutOfRange { .. })));
        assert_eq!(animal.weight(), Decimal::new(1282, 1));

        let result = animal.set_weight(Decimal::NEGATIVE_ONE);
        assert!(result.is_err());
        assert_eq!(animal.weight(), Decimal::new(1282, 1));
    }

    #[test]
    fn name_with_space_is_accepted() {
        let mut animal = test_animal(Species::Dingo);
        assert!(animal.set_name("Old Yeller").is_ok());
        assert_eq!(animal.name(), "Old Yeller");
    }

    #[test]
    fn name_rejection_retains_prior_value() {
        let mut animal = test_animal(Species::Dingo);
        assert!(animal.set_name("Sp0t").is_err());
        assert!(animal.set_name("").is_err());
        assert_eq!(animal.name(), "Bobo");
    }

    #[test]
    fn hunger_advances_through_all_four_stages() {
        let mut animal = test_animal(Species::Kangaroo);
        assert_eq!(animal.hunger(), HungerState::Satisfied);
        assert_eq!(animal.advance_hunger(), Some(HungerState::Hungry));
        assert_eq!(animal.advance_hunger(), Some(HungerState::Starving));
        assert_eq!(animal.advance_hunger(), Some(HungerState::Unconscious));
        // Terminal: no further advance.
        assert_eq!(animal.advance_hunger(), None);
        assert_eq!(animal.hunger(), HungerState::Unconscious);
    }

    #[test]
    fn eating_resets_hunger_and_adds_weight() {
        let mut animal = test_animal(Species::Kangaroo);
        let _ = animal.advance_hunger();
        let _ = animal.advance_hunger();
        assert_eq!(animal.hunger(), HungerState::Starving);

        let before = animal.weight();
        animal.eat(&Food::new(Decimal::new(25, 1))).unwrap(); // 2.5 lbs
        assert_eq!(animal.hunger(), HungerState::Satisfied);
        assert_eq!(animal.weight(), before + Decimal::new(25, 1));
    }

    #[test]
    fn eating_past_the_weight_cap_changes_nothing() {
        let mut animal = test_animal(Species::Shark);
        animal.set_weight(Decimal::new(9999, 1)).unwrap(); // 999.9
        let _ = animal.advance_hunger();

        let result = animal.eat(&Food::new(Decimal::TEN));
        assert!(result.is_err());
        assert_eq!(animal.weight(), Decimal::new(9999, 1));
        assert_eq!(animal.hunger(), HungerState::Hungry);
    }

    #[test]
    fn double_impregnation_is_rejected() {
        let mut animal = test_animal(Species::Chimpanzee);
        assert!(animal.make_pregnant().is_ok());
        assert!(matches!(
            animal.make_pregnant(),
            Err(AnimalError::AlreadyPregnant(_))
        ));
        assert!(animal.is_pregnant());
    }

    #[test]
    fn reproduce_requires_pregnancy() {
        let mut animal = test_animal(Species::Chimpanzee);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            animal.reproduce(&mut rng),
            Err(AnimalError::NotPregnant(_))
        ));
    }

    #[test]
    fn reproduce_clears_flag_and_records_child() {
        let mut animal = test_animal(Species::Chimpanzee);
        animal.make_pregnant().unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let offspring = animal.reproduce(&mut rng).unwrap();

        assert!(!animal.is_pregnant());
        assert_eq!(animal.children(), &[offspring.animal().id()]);
    }

    #[test]
    fn newborns_display_smaller() {
        let mut animal = test_animal(Species::Chimpanzee);
        assert_eq!(animal.display_size(), Decimal::ONE);
        animal.set_age(0).unwrap();
        assert_eq!(animal.display_size(), Decimal::new(4, 1));
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let animal = test_animal(Species::Platypus);
        let snapshot = animal.snapshot();
        assert_eq!(snapshot.id, animal.id());
        assert_eq!(snapshot.name, "Bobo");
        assert_eq!(snapshot.species, Species::Platypus);
        assert_eq!(snapshot.hunger, HungerState::Satisfied);
        assert_eq!(snapshot.display_size, Decimal::new(11, 1));
    }

    #[test]
    fn animal_roundtrips_through_serde() {
        let animal = test_animal(Species::Squirrel);
        let json = serde_json::to_string(&animal).unwrap();
        let restored: Animal = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, animal);
    }
}
