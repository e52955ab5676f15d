//! Zoo orchestration, the per-animal driver harness, and the birthing
//! pipeline for the Menagerie simulation.
//!
//! This crate owns the concurrency layer. Each admitted animal gets one
//! mutex (its serialization point) and two periodic tokio tasks (the
//! motion and hunger drivers); the zoo owns the cross-animal state --
//! registries, cages, the birthing room's FIFO queue -- and the
//! broadcast bus that rendering and feeding collaborators subscribe to.
//!
//! # Modules
//!
//! - [`cage`] -- Per-species occupancy registries ([`Cage`])
//! - [`config`] -- Zoo and driver configuration ([`ZooConfig`])
//! - [`drivers`] -- The motion and hunger driver loops
//! - [`error`] -- Error types for zoo orchestration ([`ZooError`])
//! - [`guest`] -- Guests and their adoption references ([`Guest`])
//! - [`handle`] -- The per-animal serialization point ([`AnimalHandle`])
//! - [`maternity`] -- The birthing room and its vet ([`BirthingRoom`])
//! - [`snapshot`] -- Snapshot persistence and restoration
//! - [`zoo`] -- The top-level orchestrator ([`Zoo`])

pub mod cage;
pub mod config;
mod drivers;
pub mod error;
pub mod guest;
pub mod handle;
pub mod maternity;
pub mod snapshot;
pub mod zoo;

// Re-export primary types at crate root for convenience.
pub use cage::{Cage, Occupant};
pub use config::{ConfigError, DriverConfig, ZooConfig};
pub use error::ZooError;
pub use guest::Guest;
pub use handle::AnimalHandle;
pub use maternity::{
    BirthingRoom, INITIAL_TEMPERATURE, MAX_TEMPERATURE, MIN_TEMPERATURE, Vet,
};
pub use snapshot::{SnapshotError, ZooSnapshot};
pub use zoo::Zoo;
