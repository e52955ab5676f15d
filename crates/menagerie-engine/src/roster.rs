//! The seed roster: the animals the zoo opens with.

use menagerie_agents::AnimalFactory;
use menagerie_core::Zoo;
use menagerie_types::{AnimalId, Gender, Species};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::EngineError;

/// One seed roster row: species, name, age, weight (unscaled mantissa
/// and decimal scale), and sex.
type RosterRow = (Species, &'static str, u32, (i64, u32), Gender);

/// The opening population, one row per animal.
const ROSTER: [RosterRow; 21] = [
    (Species::Chimpanzee, "Bobo", 10, (1282, 1), Gender::Male),
    (Species::Chimpanzee, "Bubbles", 3, (1038, 1), Gender::Female),
    (Species::Dingo, "Spot", 5, (413, 1), Gender::Male),
    (Species::Dingo, "Maggie", 6, (372, 1), Gender::Female),
    (Species::Dingo, "Toby", 0, (150, 1), Gender::Male),
    (Species::Eagle, "Ari", 12, (101, 1), Gender::Female),
    (Species::Hummingbird, "Buzz", 2, (2, 2), Gender::Male),
    (Species::Hummingbird, "Bitsy", 1, (3, 2), Gender::Female),
    (Species::Kangaroo, "Kanga", 8, (720, 1), Gender::Female),
    (Species::Kangaroo, "Roo", 0, (239, 1), Gender::Male),
    (Species::Kangaroo, "Jake", 9, (1535, 1), Gender::Male),
    (Species::Ostrich, "Stretch", 26, (2317, 1), Gender::Male),
    (Species::Ostrich, "Speedy", 30, (2130, 1), Gender::Female),
    (Species::Platypus, "Patti", 13, (44, 1), Gender::Female),
    (Species::Platypus, "Bill", 11, (49, 1), Gender::Male),
    (Species::Platypus, "Ted", 0, (11, 1), Gender::Male),
    (Species::Shark, "Bruce", 19, (8106, 1), Gender::Female),
    (Species::Shark, "Anchor", 17, (4580, 1), Gender::Male),
    (Species::Shark, "Chum", 14, (3773, 1), Gender::Male),
    (Species::Squirrel, "Chip", 4, (10, 1), Gender::Male),
    (Species::Squirrel, "Dale", 4, (9, 1), Gender::Male),
];

/// Breed and admit the seed roster.
///
/// # Errors
///
/// Returns [`EngineError::Roster`] if a roster row fails validation.
pub async fn spawn_roster(
    zoo: &Zoo,
    factory: &mut AnimalFactory,
) -> Result<Vec<AnimalId>, EngineError> {
    let mut admitted = Vec::with_capacity(ROSTER.len());

    for (species, name, age, (mantissa, scale), gender) in ROSTER {
        let animal = factory.breed(
            species,
            String::from(name),
            age,
            Decimal::new(mantissa, scale),
            gender,
        )?;
        admitted.push(zoo.add_animal(animal).await);
    }

    info!(count = admitted.len(), "seed roster admitted");
    Ok(admitted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_core::config::ZooConfig;
    use menagerie_core::maternity::Vet;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn roster_admits_every_row() {
        let zoo = Zoo::new(ZooConfig::default(), Vet::new(String::from("Flora")));
        let mut factory = AnimalFactory::new(42);

        let admitted = spawn_roster(&zoo, &mut factory).await.unwrap();
        assert_eq!(admitted.len(), 21);
        assert_eq!(zoo.animal_snapshots().await.len(), 21);
        assert_eq!(zoo.animals_of_species(Species::Shark).await.len(), 3);
        assert_eq!(zoo.animals_of_species(Species::Eagle).await.len(), 1);
    }
}
