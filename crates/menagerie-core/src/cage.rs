//! Per-species occupancy registries.
//!
//! A cage tracks who is currently inside it: the species' animals and
//! any guest visiting their adopted animal. The zoo publishes a
//! membership event on every change so rendering collaborators can
//! redraw the cage.

use menagerie_types::{AnimalId, GuestId, Species};
use serde::{Deserialize, Serialize};

/// Someone who can occupy a cage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    /// An animal of the cage's species.
    Animal(AnimalId),
    /// A guest visiting their adopted animal.
    Guest(GuestId),
}

/// One species' enclosure and its ordered occupant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    /// The species this cage holds.
    species: Species,
    /// Cage width in position units.
    width: u32,
    /// Cage height in position units.
    height: u32,
    /// Current occupants, in arrival order.
    occupants: Vec<Occupant>,
}

impl Cage {
    /// Create an empty cage for a species.
    pub const fn new(species: Species, width: u32, height: u32) -> Self {
        Self {
            species,
            width,
            height,
            occupants: Vec::new(),
        }
    }

    /// The species this cage holds.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Cage width in position units.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Cage height in position units.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current occupants, in arrival order.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Number of current occupants.
    pub const fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    /// Add an occupant at the end of the arrival order.
    pub(crate) fn add(&mut self, occupant: Occupant) {
        self.occupants.push(occupant);
    }

    /// Remove an occupant. A no-op if they are not present.
    pub(crate) fn remove(&mut self, occupant: Occupant) {
        self.occupants.retain(|existing| *existing != occupant);
    }
}
