//! Error types for the menagerie-core crate.

use menagerie_agents::AnimalError;
use menagerie_types::{AnimalId, GuestId};
use rust_decimal::Decimal;

/// Errors that can occur during zoo orchestration.
#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    /// An animal operation failed validation.
    #[error("animal operation failed: {source}")]
    Animal {
        /// The underlying animal error.
        #[from]
        source: AnimalError,
    },

    /// A birthing-room temperature mutation fell outside the valid range.
    #[error("temperature {temperature} out of range: must be between 35 and 95 degrees")]
    TemperatureOutOfRange {
        /// The rejected temperature.
        temperature: Decimal,
    },

    /// No animal with the given ID is registered in the zoo.
    #[error("animal not found: {0}")]
    UnknownAnimal(AnimalId),

    /// No guest with the given ID is registered in the zoo.
    #[error("guest not found: {0}")]
    UnknownGuest(GuestId),
}
