//! The per-animal serialization point and driver harness.
//!
//! An [`AnimalHandle`] wraps one animal in a mutex and owns its two
//! periodic driver tasks. Every mutating operation -- a motion tick, a
//! hunger tick, a feed, an impregnation, a delivery, a validated setter
//! -- goes through the one lock, so no two mutations ever interleave
//! and no reader observes a torn value.
//!
//! The handle is also where notifications attach: successful mutations
//! publish events on the zoo's broadcast bus, and the pregnancy path
//! enqueues into the birthing room inside the same critical section
//! that sets the flag, keeping the queued-iff-pregnant invariant exact.

use std::sync::Arc;
use std::time::Duration;

use menagerie_agents::{Animal, Food, Offspring};
use menagerie_types::{AnimalId, AnimalSnapshot, Species, ZooEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, broadcast, watch};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::config::DriverConfig;
use crate::drivers;
use crate::error::ZooError;
use crate::maternity::BirthingRoom;

/// The state guarded by an animal's mutex: the animal itself plus its
/// private random generator (rebuilt from the persisted seed).
#[derive(Debug)]
pub(crate) struct AnimalCell {
    /// The animal's full mutable state.
    pub(crate) animal: Animal,
    /// The animal's private generator, used by movement phase draws and
    /// deliveries.
    pub(crate) rng: StdRng,
}

impl AnimalCell {
    /// Apply one movement step using the animal's own generator.
    pub(crate) fn step_motion(&mut self) {
        let Self { animal, rng } = self;
        animal.step_motion(rng);
    }
}

/// The running drivers of an active animal.
#[derive(Debug)]
struct ActiveDrivers {
    /// Flipping this to `true` asks both loops to stop.
    shutdown_tx: watch::Sender<bool>,
    /// Join handles for the motion and hunger loops.
    tasks: Vec<JoinHandle<()>>,
}

/// One animal's serialization point, driver harness, and notification
/// hookup.
#[derive(Debug)]
pub struct AnimalHandle {
    /// The animal's identifier (stable; readable without the lock).
    id: AnimalId,
    /// The animal's species (fixed; readable without the lock).
    species: Species,
    /// The guarded state.
    cell: Arc<Mutex<AnimalCell>>,
    /// Drivers, present while the animal is active.
    control: Mutex<Option<ActiveDrivers>>,
    /// Feed generation counter; bumping it restarts the hunger countdown.
    feed_tx: watch::Sender<u64>,
    /// The zoo's event bus.
    events: broadcast::Sender<ZooEvent>,
    /// The birthing room pregnancies are queued into.
    maternity: Arc<BirthingRoom>,
    /// Driver timing shared by every (re)activation.
    timing: DriverConfig,
}

impl AnimalHandle {
    /// Wrap an animal. The handle starts dormant; call
    /// [`activate`](Self::activate) to start its drivers.
    pub(crate) fn new(
        animal: Animal,
        events: broadcast::Sender<ZooEvent>,
        maternity: Arc<BirthingRoom>,
        timing: DriverConfig,
    ) -> Self {
        let id = animal.id();
        let species = animal.species();
        let rng = StdRng::seed_from_u64(animal.rng_seed());
        let (feed_tx, _) = watch::channel(0);

        Self {
            id,
            species,
            cell: Arc::new(Mutex::new(AnimalCell { animal, rng })),
            control: Mutex::new(None),
            feed_tx,
            events,
            maternity,
            timing,
        }
    }

    /// The animal's identifier.
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// The animal's species.
    pub const fn species(&self) -> Species {
        self.species
    }

    // -----------------------------------------------------------------------
    // Drivers
    // -----------------------------------------------------------------------

    /// Start the motion and hunger drivers. A no-op if already active.
    ///
    /// The hunger period is drawn here, once, from the animal's own
    /// generator, uniformly over the configured range; the same period
    /// is reused for every countdown until the next deactivation.
    pub async fn activate(&self) {
        let mut control = self.control.lock().await;
        if control.is_some() {
            return;
        }

        let hunger_period = {
            let mut cell = self.cell.lock().await;
            let secs = cell.rng.random_range(
                self.timing.hunger_period_min_secs..=self.timing.hunger_period_max_secs,
            );
            Duration::from_secs(secs)
        };
        let motion_period = Duration::from_millis(self.timing.motion_period_ms);

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let motion = tokio::spawn(drivers::motion_loop(
            Arc::clone(&self.cell),
            self.events.clone(),
            shutdown_rx.clone(),
            motion_period,
        ));
        let hunger = tokio::spawn(drivers::hunger_loop(
            Arc::clone(&self.cell),
            self.events.clone(),
            self.feed_tx.subscribe(),
            shutdown_rx,
            hunger_period,
        ));

        *control = Some(ActiveDrivers {
            shutdown_tx,
            tasks: vec![motion, hunger],
        });
    }

    /// Stop both drivers and wait for them to finish.
    ///
    /// When this returns, any in-flight firing has completed and no
    /// further mutation of the animal can occur. A no-op if the animal
    /// is already dormant.
    pub async fn deactivate(&self) {
        let taken = self.control.lock().await.take();
        let Some(active) = taken else {
            return;
        };

        let _ = active.shutdown_tx.send(true);
        for task in active.tasks {
            if task.await.is_err() {
                warn!(animal = %self.id, "driver task ended abnormally");
            }
        }
    }

    /// Whether the animal's drivers are running.
    pub async fn is_active(&self) -> bool {
        self.control.lock().await.is_some()
    }

    // -----------------------------------------------------------------------
    // Externally triggered operations
    // -----------------------------------------------------------------------

    /// Feed the animal.
    ///
    /// Synchronous from the caller's perspective: when this returns the
    /// eating behavior has run, hunger is satisfied, and the hunger
    /// countdown has been restarted (waking the driver if it was parked
    /// on an unconscious animal).
    ///
    /// # Errors
    ///
    /// Returns a weight validation error; the animal and its countdown
    /// are unchanged in that case.
    pub async fn eat(&self, food: &Food) -> Result<(), ZooError> {
        let snapshot = {
            let mut cell = self.cell.lock().await;
            cell.animal.eat(food)?;
            cell.animal.snapshot()
        };

        // Restart the decay countdown.
        self.feed_tx.send_modify(|generation| *generation = generation.wrapping_add(1));
        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(())
    }

    /// Mark the animal pregnant and queue it for delivery.
    ///
    /// The flag flip and the enqueue happen inside one critical
    /// section, so the animal is queued if and only if pregnant,
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`menagerie_agents::AnimalError::AlreadyPregnant`] if a
    /// prior pregnancy is still awaiting delivery.
    pub async fn make_pregnant(&self) -> Result<(), ZooError> {
        let snapshot = {
            let mut cell = self.cell.lock().await;
            cell.animal.make_pregnant()?;
            self.maternity.enqueue(self.id).await;
            cell.animal.snapshot()
        };

        let _ = self.events.send(ZooEvent::Pregnant { id: self.id });
        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(())
    }

    /// Deliver the animal's pregnancy, producing an offspring.
    ///
    /// Called by the birthing room's vet; not intended for direct use.
    ///
    /// # Errors
    ///
    /// Returns a reproduction error from the behavior; the pregnancy
    /// flag is cleared regardless.
    pub(crate) async fn reproduce(&self) -> Result<Offspring, ZooError> {
        let (offspring, snapshot) = {
            let mut cell = self.cell.lock().await;
            let AnimalCell { animal, rng } = &mut *cell;
            let offspring = animal.reproduce(rng)?;
            (offspring, animal.snapshot())
        };

        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(offspring)
    }

    // -----------------------------------------------------------------------
    // Validated setters
    // -----------------------------------------------------------------------

    /// Rename the animal. Publishes a status change on success only.
    ///
    /// # Errors
    ///
    /// Returns a name validation error; nothing is published then.
    pub async fn set_name(&self, name: &str) -> Result<(), ZooError> {
        let snapshot = {
            let mut cell = self.cell.lock().await;
            cell.animal.set_name(name)?;
            cell.animal.snapshot()
        };
        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(())
    }

    /// Set the animal's age. Publishes a status change on success only.
    ///
    /// # Errors
    ///
    /// Returns an age validation error; nothing is published then.
    pub async fn set_age(&self, age: u32) -> Result<(), ZooError> {
        let snapshot = {
            let mut cell = self.cell.lock().await;
            cell.animal.set_age(age)?;
            cell.animal.snapshot()
        };
        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(())
    }

    /// Set the animal's weight. Publishes a status change on success only.
    ///
    /// # Errors
    ///
    /// Returns a weight validation error; nothing is published then.
    pub async fn set_weight(&self, weight: Decimal) -> Result<(), ZooError> {
        let snapshot = {
            let mut cell = self.cell.lock().await;
            cell.animal.set_weight(weight)?;
            cell.animal.snapshot()
        };
        let _ = self.events.send(ZooEvent::StatusChanged { snapshot });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Take a read-only snapshot of the animal's observable state.
    pub async fn snapshot(&self) -> AnimalSnapshot {
        self.cell.lock().await.animal.snapshot()
    }

    /// Whether the animal is currently pregnant.
    pub async fn is_pregnant(&self) -> bool {
        self.cell.lock().await.animal.is_pregnant()
    }

    /// Clone the animal's full state (for persistence).
    pub(crate) async fn export(&self) -> Animal {
        self.cell.lock().await.animal.clone()
    }
}
