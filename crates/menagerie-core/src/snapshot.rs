//! Snapshot persistence of the full zoo graph.
//!
//! A [`ZooSnapshot`] captures everything durable -- every animal's full
//! state (including behavior phase machines and generator seeds), the
//! guests, the birthing queue order, and the room temperature. Live
//! machinery (driver tasks, bus subscriptions) is deliberately not
//! captured: a restored zoo is dormant until
//! [`Zoo::reactivate`] restarts the drivers and re-announces the
//! population.

use std::path::Path;

use menagerie_agents::Animal;
use menagerie_types::AnimalId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ZooConfig;
use crate::error::ZooError;
use crate::guest::Guest;
use crate::maternity::Vet;
use crate::zoo::Zoo;

/// Errors that can occur during snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read or written.
    #[error("snapshot file I/O failed: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },

    /// The snapshot contents could not be serialized or deserialized.
    #[error("snapshot serialization failed: {message}")]
    Serde {
        /// Description of the serialization failure.
        message: String,
    },

    /// The snapshot holds a value the zoo rejects (for example an
    /// out-of-range temperature).
    #[error("snapshot holds invalid state: {source}")]
    Invalid {
        /// The underlying validation error.
        #[from]
        source: ZooError,
    },
}

/// The persistent image of a zoo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooSnapshot {
    /// The zoo's display name.
    pub name: String,
    /// Birthing room temperature at capture time.
    pub temperature: Decimal,
    /// Birthing queue contents at capture time, oldest first.
    pub pending_deliveries: Vec<AnimalId>,
    /// Every animal's full state.
    pub animals: Vec<Animal>,
    /// Every guest.
    pub guests: Vec<Guest>,
}

/// Capture a point-in-time snapshot of the zoo.
///
/// Each animal is captured under its own lock; the snapshot is
/// consistent per animal, and the queue and temperature are captured
/// once each.
pub async fn capture(zoo: &Zoo) -> ZooSnapshot {
    let handles = zoo.animal_handles().await;
    let mut animals = Vec::with_capacity(handles.len());
    for handle in handles {
        animals.push(handle.export().await);
    }

    ZooSnapshot {
        name: zoo.name().to_owned(),
        temperature: zoo.birthing_room().temperature().await,
        pending_deliveries: zoo.birthing_room().pending().await,
        animals,
        guests: zoo.export_guests().await,
    }
}

/// Rebuild a dormant zoo from a snapshot.
///
/// Animals are re-registered and caged, the queue and temperature are
/// restored verbatim, and adopting guests rejoin their cages. No
/// drivers run and no events fire until [`Zoo::reactivate`].
///
/// # Errors
///
/// Returns [`SnapshotError::Invalid`] if the snapshot holds an
/// out-of-range temperature.
pub async fn restore(config: ZooConfig, vet: Vet, snapshot: ZooSnapshot) -> Result<Zoo, SnapshotError> {
    let zoo = Zoo::new(
        ZooConfig {
            name: snapshot.name,
            ..config
        },
        vet,
    );

    for animal in snapshot.animals {
        let _ = zoo.admit_dormant(animal).await;
    }
    for guest in snapshot.guests {
        zoo.admit_guest_dormant(guest).await;
    }

    zoo.birthing_room()
        .restore_queue(snapshot.pending_deliveries)
        .await;
    zoo.birthing_room()
        .restore_temperature(snapshot.temperature)
        .await?;

    Ok(zoo)
}

/// Write a snapshot to a JSON file.
///
/// # Errors
///
/// Returns [`SnapshotError`] on I/O or serialization failure.
pub fn save_to_file(snapshot: &ZooSnapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::Serde {
        message: format!("{e}"),
    })?;
    std::fs::write(path, json).map_err(|e| SnapshotError::Io {
        message: format!("{e}"),
    })
}

/// Read a snapshot back from a JSON file.
///
/// # Errors
///
/// Returns [`SnapshotError`] on I/O or deserialization failure.
pub fn load_from_file(path: &Path) -> Result<ZooSnapshot, SnapshotError> {
    let json = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        message: format!("{e}"),
    })?;
    serde_json::from_str(&json).map_err(|e| SnapshotError::Serde {
        message: format!("{e}"),
    })
}
