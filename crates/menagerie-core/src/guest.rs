//! Guests visiting the zoo.
//!
//! Guests here are deliberately thin: the ticketing, wallet, and booth
//! machinery lives outside the simulation. What matters to the zoo is
//! the adoption reference -- an adopting guest joins their animal's
//! cage, and removing either side detaches the reference.

use menagerie_types::{AnimalId, GuestId, GuestSnapshot};
use serde::{Deserialize, Serialize};

/// A visitor who may adopt one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// The guest's identifier.
    id: GuestId,
    /// The guest's name.
    name: String,
    /// The animal this guest has adopted, if any.
    adopted_animal: Option<AnimalId>,
}

impl Guest {
    /// Admit a new guest with no adoption.
    pub fn new(name: String) -> Self {
        Self {
            id: GuestId::new(),
            name,
            adopted_animal: None,
        }
    }

    /// The guest's identifier.
    pub const fn id(&self) -> GuestId {
        self.id
    }

    /// The guest's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The animal this guest has adopted, if any.
    pub const fn adopted_animal(&self) -> Option<AnimalId> {
        self.adopted_animal
    }

    /// Point the adoption reference at an animal (or clear it).
    pub(crate) const fn set_adopted_animal(&mut self, animal: Option<AnimalId>) {
        self.adopted_animal = animal;
    }

    /// Take a read-only snapshot of the guest.
    pub fn snapshot(&self) -> GuestSnapshot {
        GuestSnapshot {
            id: self.id,
            name: self.name.clone(),
            adopted_animal: self.adopted_animal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_guests_have_no_adoption() {
        let guest = Guest::new(String::from("Greg"));
        assert_eq!(guest.adopted_animal(), None);
        assert_eq!(guest.name(), "Greg");
    }

    #[test]
    fn adoption_reference_can_be_set_and_cleared() {
        let mut guest = Guest::new(String::from("Greg"));
        let animal = AnimalId::new();

        guest.set_adopted_animal(Some(animal));
        assert_eq!(guest.adopted_animal(), Some(animal));

        guest.set_adopted_animal(None);
        assert_eq!(guest.adopted_animal(), None);
    }
}
