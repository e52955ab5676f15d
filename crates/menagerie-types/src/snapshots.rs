//! Point-in-time projections of simulation entities.
//!
//! Read-only collaborators (rendering, reporting) never see live state;
//! they receive these cloned snapshots instead. A snapshot is complete
//! at the moment it is taken and never changes afterward, so observers
//! may hold it across await points without blocking the simulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{Gender, HorizontalDirection, HungerState, Species, VerticalDirection};
use crate::ids::{AnimalId, GuestId};

/// A read-only projection of one animal's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSnapshot {
    /// The animal's identifier.
    pub id: AnimalId,
    /// Display name.
    pub name: String,
    /// Species tag (also identifies the cage).
    pub species: Species,
    /// Biological sex.
    pub gender: Gender,
    /// Age in years (0--100).
    pub age: u32,
    /// Weight in pounds.
    pub weight: Decimal,
    /// Current hunger stage.
    pub hunger: HungerState,
    /// Whether the animal is awaiting delivery.
    pub pregnant: bool,
    /// Horizontal position.
    pub x: u32,
    /// Vertical position.
    pub y: u32,
    /// Horizontal travel direction.
    pub x_direction: HorizontalDirection,
    /// Vertical travel direction.
    pub y_direction: VerticalDirection,
    /// Fixed per-step travel distance.
    pub move_distance: u32,
    /// Proportion at which to display the animal (newborns are smaller).
    pub display_size: Decimal,
    /// Identifiers of the animal's children, oldest first.
    pub children: Vec<AnimalId>,
}

/// A read-only projection of one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSnapshot {
    /// The guest's identifier.
    pub id: GuestId,
    /// Display name.
    pub name: String,
    /// The animal this guest has adopted, if any.
    pub adopted_animal: Option<AnimalId>,
}
