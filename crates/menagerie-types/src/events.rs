//! Events published on the zoo's broadcast bus.
//!
//! Any number of collaborators may subscribe; publication never blocks
//! the simulation, and a lagging subscriber loses the oldest events
//! rather than stalling the publisher. Every payload is an owned
//! snapshot -- no event grants access to live state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{HorizontalDirection, HungerState, Species, VerticalDirection};
use crate::ids::{AnimalId, GuestId};
use crate::snapshots::AnimalSnapshot;

/// An observable occurrence inside the zoo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZooEvent {
    /// An animal moved; rendering collaborators redraw it from this.
    ImageUpdate {
        /// The animal that moved.
        id: AnimalId,
        /// Its species (selects the sprite sheet).
        species: Species,
        /// New horizontal position.
        x: u32,
        /// New vertical position.
        y: u32,
        /// Horizontal travel direction after the step.
        x_direction: HorizontalDirection,
        /// Vertical travel direction after the step.
        y_direction: VerticalDirection,
        /// Current hunger stage.
        hunger: HungerState,
        /// Proportion at which to display the animal.
        display_size: Decimal,
    },

    /// An animal's hunger decayed all the way to unconscious; a feeding
    /// collaborator should intervene.
    Starved {
        /// The collapsed animal.
        id: AnimalId,
    },

    /// An animal became pregnant and was queued for delivery.
    Pregnant {
        /// The expecting mother.
        id: AnimalId,
    },

    /// An animal's textual status (name, age, weight, pregnancy) changed.
    StatusChanged {
        /// The animal's state after the change.
        snapshot: AnimalSnapshot,
    },

    /// An animal was admitted to the zoo.
    AnimalAdded {
        /// The admitted animal's state.
        snapshot: AnimalSnapshot,
    },

    /// An animal was removed from the zoo.
    AnimalRemoved {
        /// The removed animal.
        id: AnimalId,
    },

    /// A delivery completed in the birthing room.
    AnimalDelivered {
        /// The mother.
        mother: AnimalId,
        /// The newborn, already admitted to the zoo.
        child: AnimalId,
    },

    /// A cage's occupant list changed.
    CageUpdated {
        /// The species cage that changed.
        species: Species,
        /// Number of occupants after the change.
        occupants: usize,
    },

    /// The birthing room temperature changed.
    TemperatureChanged {
        /// Temperature before the change.
        previous: Decimal,
        /// Temperature after the change.
        current: Decimal,
    },

    /// A guest entered the zoo.
    GuestAdded {
        /// The guest's identifier.
        id: GuestId,
        /// The guest's name.
        name: String,
    },

    /// A guest left the zoo.
    GuestRemoved {
        /// The guest's identifier.
        id: GuestId,
    },
}
