//! The zoo: top-level orchestrator of animals, cages, guests, and the
//! birthing pipeline.
//!
//! The zoo owns the shared state that crosses animal boundaries -- the
//! animal and guest registries, the per-species cages, the birthing
//! room, and the broadcast event bus. Per-animal state stays behind
//! each animal's own handle; the registries here only hold the handles.
//!
//! Read-only collaborators (reporting, rendering) get cloned snapshots,
//! never live iterators: every query copies what it needs while holding
//! a registry lock and releases the lock before returning.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use menagerie_agents::{Animal, Food};
use menagerie_types::{
    AnimalId, AnimalSnapshot, GuestId, GuestSnapshot, Species, ZooEvent,
};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, broadcast};
use tracing::{info, warn};

use crate::cage::{Cage, Occupant};
use crate::config::ZooConfig;
use crate::error::ZooError;
use crate::guest::Guest;
use crate::handle::AnimalHandle;
use crate::maternity::{BirthingRoom, Vet};

/// Capacity of the broadcast event bus. Image updates dominate the
/// traffic; a lagging subscriber loses oldest events, never blocks the
/// simulation.
const EVENT_BUS_CAPACITY: usize = 1024;

/// The enclosure-keeper coordinating every animal and guest.
#[derive(Debug)]
pub struct Zoo {
    /// Display name of the zoo.
    name: String,
    /// Configuration the zoo was built from.
    config: ZooConfig,
    /// Every admitted animal, by ID.
    animals: Mutex<BTreeMap<AnimalId, Arc<AnimalHandle>>>,
    /// Every present guest, by ID.
    guests: Mutex<BTreeMap<GuestId, Guest>>,
    /// One cage per species.
    cages: Mutex<BTreeMap<Species, Cage>>,
    /// The shared birthing pipeline.
    maternity: Arc<BirthingRoom>,
    /// The broadcast event bus.
    events: broadcast::Sender<ZooEvent>,
}

impl Zoo {
    /// Open a zoo with a cage for every species and an empty birthing
    /// room staffed by the given vet.
    pub fn new(config: ZooConfig, vet: Vet) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUS_CAPACITY);

        let cages = Species::ALL
            .into_iter()
            .map(|species| {
                (
                    species,
                    Cage::new(species, config.enclosure.width, config.enclosure.height),
                )
            })
            .collect();

        let maternity = Arc::new(BirthingRoom::new(vet, events.clone()));

        Self {
            name: config.name.clone(),
            config,
            animals: Mutex::new(BTreeMap::new()),
            guests: Mutex::new(BTreeMap::new()),
            cages: Mutex::new(cages),
            maternity,
            events,
        }
    }

    /// The zoo's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration the zoo was built from.
    pub const fn config(&self) -> &ZooConfig {
        &self.config
    }

    /// The zoo's birthing room.
    pub fn birthing_room(&self) -> &BirthingRoom {
        &self.maternity
    }

    /// Subscribe to the zoo's event bus.
    ///
    /// Any number of collaborators may subscribe; each receives every
    /// event published after the call.
    pub fn subscribe(&self) -> broadcast::Receiver<ZooEvent> {
        self.events.subscribe()
    }

    // -----------------------------------------------------------------------
    // Animal lifecycle
    // -----------------------------------------------------------------------

    /// Admit an animal: register it, start its drivers, announce it,
    /// cage it, and queue it for delivery if it arrives pregnant.
    pub async fn add_animal(&self, animal: Animal) -> AnimalId {
        let pregnant = animal.is_pregnant();
        let snapshot = animal.snapshot();
        let id = snapshot.id;
        let species = snapshot.species;

        let handle = Arc::new(AnimalHandle::new(
            animal,
            self.events.clone(),
            Arc::clone(&self.maternity),
            self.config.drivers.clone(),
        ));
        handle.activate().await;

        self.animals.lock().await.insert(id, Arc::clone(&handle));
        let _ = self.events.send(ZooEvent::AnimalAdded { snapshot });

        self.cage_insert(species, Occupant::Animal(id)).await;

        if pregnant {
            self.maternity.enqueue(id).await;
            let _ = self.events.send(ZooEvent::Pregnant { id });
        }

        info!(animal = %id, species = %species, "animal admitted");
        id
    }

    /// Admit a batch of animals -- for example a mother and her whole
    /// lineage -- iterating over an explicit worklist so arbitrarily
    /// deep family trees never recurse.
    pub async fn add_animals(&self, animals: Vec<Animal>) -> Vec<AnimalId> {
        let mut worklist: VecDeque<Animal> = animals.into();
        let mut admitted = Vec::with_capacity(worklist.len());
        while let Some(animal) = worklist.pop_front() {
            admitted.push(self.add_animal(animal).await);
        }
        admitted
    }

    /// Admit an animal without starting drivers or publishing events.
    ///
    /// Used when restoring a persisted zoo; reactivation announces and
    /// starts everything afterward.
    pub(crate) async fn admit_dormant(&self, animal: Animal) -> AnimalId {
        let id = animal.id();
        let species = animal.species();

        let handle = Arc::new(AnimalHandle::new(
            animal,
            self.events.clone(),
            Arc::clone(&self.maternity),
            self.config.drivers.clone(),
        ));

        self.animals.lock().await.insert(id, handle);
        let mut cages = self.cages.lock().await;
        if let Some(cage) = cages.get_mut(&species) {
            cage.add(Occupant::Animal(id));
        }
        id
    }

    /// Remove an animal from the zoo.
    ///
    /// Deactivates both drivers and waits for them to finish before
    /// touching anything else, so no mutation of the animal can happen
    /// after this returns. Any guest adoption of the animal is
    /// detached.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::UnknownAnimal`] if no such animal is
    /// registered.
    pub async fn remove_animal(&self, id: AnimalId) -> Result<(), ZooError> {
        let handle = self
            .animals
            .lock()
            .await
            .remove(&id)
            .ok_or(ZooError::UnknownAnimal(id))?;

        handle.deactivate().await;

        let species = handle.species();
        self.cage_remove(species, Occupant::Animal(id)).await;
        let _ = self.events.send(ZooEvent::AnimalRemoved { id });

        // Detach any guest that adopted this animal, pulling them out
        // of the cage they were visiting.
        let detached: Vec<GuestId> = {
            let mut guests = self.guests.lock().await;
            guests
                .values_mut()
                .filter(|guest| guest.adopted_animal() == Some(id))
                .map(|guest| {
                    guest.set_adopted_animal(None);
                    guest.id()
                })
                .collect()
        };
        for guest_id in detached {
            self.cage_remove(species, Occupant::Guest(guest_id)).await;
        }

        info!(animal = %id, "animal removed");
        Ok(())
    }

    /// Look up an animal's handle.
    pub async fn animal(&self, id: AnimalId) -> Option<Arc<AnimalHandle>> {
        self.animals.lock().await.get(&id).cloned()
    }

    // -----------------------------------------------------------------------
    // Externally triggered operations
    // -----------------------------------------------------------------------

    /// Feed an animal on behalf of a feeding collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::UnknownAnimal`] or a weight validation
    /// error.
    pub async fn feed_animal(&self, id: AnimalId, food: &Food) -> Result<(), ZooError> {
        let handle = self.animal(id).await.ok_or(ZooError::UnknownAnimal(id))?;
        handle.eat(food).await
    }

    /// Make an animal pregnant, queueing it for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::UnknownAnimal`] or
    /// [`menagerie_agents::AnimalError::AlreadyPregnant`].
    pub async fn make_pregnant(&self, id: AnimalId) -> Result<(), ZooError> {
        let handle = self.animal(id).await.ok_or(ZooError::UnknownAnimal(id))?;
        handle.make_pregnant().await
    }

    /// Deliver the oldest queued pregnancy, admitting the offspring as
    /// a first-class animal.
    ///
    /// Returns the newborn's ID, or `None` if the queue was empty --
    /// an expected outcome, not an error. Pregnancies of animals that
    /// left the zoo while queued are discarded with a warning.
    ///
    /// # Errors
    ///
    /// Returns a reproduction error from the mother's behavior.
    pub async fn birth_animal(&self) -> Result<Option<AnimalId>, ZooError> {
        let Some(mother_id) = self.maternity.dequeue().await else {
            return Ok(None);
        };

        let Some(mother) = self.animal(mother_id).await else {
            warn!(mother = %mother_id, "queued mother left the zoo; pregnancy discarded");
            return Ok(None);
        };

        let offspring = self.maternity.deliver(&mother).await?;
        let child = offspring.into_animal();
        let child_id = self.add_animal(child).await;

        let _ = self.events.send(ZooEvent::AnimalDelivered {
            mother: mother_id,
            child: child_id,
        });
        Ok(Some(child_id))
    }

    // -----------------------------------------------------------------------
    // Guests
    // -----------------------------------------------------------------------

    /// Admit a guest.
    pub async fn add_guest(&self, name: String) -> GuestId {
        let guest = Guest::new(name);
        let id = guest.id();
        let event = ZooEvent::GuestAdded {
            id,
            name: guest.name().to_owned(),
        };

        self.guests.lock().await.insert(id, guest);
        let _ = self.events.send(event);
        id
    }

    /// Remove a guest, pulling them out of any cage they were visiting.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::UnknownGuest`] if no such guest is present.
    pub async fn remove_guest(&self, id: GuestId) -> Result<(), ZooError> {
        let guest = self
            .guests
            .lock()
            .await
            .remove(&id)
            .ok_or(ZooError::UnknownGuest(id))?;

        if let Some(animal_id) = guest.adopted_animal() {
            if let Some(handle) = self.animal(animal_id).await {
                self.cage_remove(handle.species(), Occupant::Guest(id)).await;
            }
        }

        let _ = self.events.send(ZooEvent::GuestRemoved { id });
        Ok(())
    }

    /// Have a guest adopt an animal, joining its cage.
    ///
    /// A previous adoption, if any, is detached first.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::UnknownGuest`] or [`ZooError::UnknownAnimal`].
    pub async fn adopt_animal(&self, guest_id: GuestId, animal_id: AnimalId) -> Result<(), ZooError> {
        let handle = self
            .animal(animal_id)
            .await
            .ok_or(ZooError::UnknownAnimal(animal_id))?;
        let species = handle.species();

        let previous = {
            let mut guests = self.guests.lock().await;
            let guest = guests
                .get_mut(&guest_id)
                .ok_or(ZooError::UnknownGuest(guest_id))?;
            let previous = guest.adopted_animal();
            guest.set_adopted_animal(Some(animal_id));
            previous
        };

        if let Some(previous_animal) = previous {
            if let Some(previous_handle) = self.animal(previous_animal).await {
                self.cage_remove(previous_handle.species(), Occupant::Guest(guest_id))
                    .await;
            }
        }

        self.cage_insert(species, Occupant::Guest(guest_id)).await;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reporting (snapshot semantics)
    // -----------------------------------------------------------------------

    /// Snapshots of every animal, in registry order.
    pub async fn animal_snapshots(&self) -> Vec<AnimalSnapshot> {
        let handles: Vec<Arc<AnimalHandle>> =
            self.animals.lock().await.values().cloned().collect();

        let mut snapshots = Vec::with_capacity(handles.len());
        for handle in handles {
            snapshots.push(handle.snapshot().await);
        }
        snapshots
    }

    /// Snapshots of every animal of one species.
    pub async fn animals_of_species(&self, species: Species) -> Vec<AnimalSnapshot> {
        let mut snapshots = self.animal_snapshots().await;
        snapshots.retain(|snapshot| snapshot.species == species);
        snapshots
    }

    /// Snapshots of every guest, in registry order.
    pub async fn guest_snapshots(&self) -> Vec<GuestSnapshot> {
        self.guests
            .lock()
            .await
            .values()
            .map(Guest::snapshot)
            .collect()
    }

    /// The combined weight of every animal in the zoo.
    pub async fn total_animal_weight(&self) -> Decimal {
        self.animal_snapshots()
            .await
            .iter()
            .fold(Decimal::ZERO, |total, snapshot| {
                total.saturating_add(snapshot.weight)
            })
    }

    /// A copy of the cage for the given species, or `None` for a
    /// species the zoo has no cage for.
    pub async fn find_cage(&self, species: Species) -> Option<Cage> {
        self.cages.lock().await.get(&species).cloned()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Every animal handle, for persistence capture.
    pub(crate) async fn animal_handles(&self) -> Vec<Arc<AnimalHandle>> {
        self.animals.lock().await.values().cloned().collect()
    }

    /// Every guest, cloned, for persistence capture.
    pub(crate) async fn export_guests(&self) -> Vec<Guest> {
        self.guests.lock().await.values().cloned().collect()
    }

    /// Insert a guest without announcing (persistence restore).
    pub(crate) async fn admit_guest_dormant(&self, guest: Guest) {
        if let Some(animal_id) = guest.adopted_animal() {
            if let Some(handle) = self.animal(animal_id).await {
                let mut cages = self.cages.lock().await;
                if let Some(cage) = cages.get_mut(&handle.species()) {
                    cage.add(Occupant::Guest(guest.id()));
                }
            }
        }
        self.guests.lock().await.insert(guest.id(), guest);
    }

    /// Restart every animal's drivers and re-announce the population.
    ///
    /// Required after restoring a persisted zoo: live drivers and
    /// subscriptions are not persisted, so a loaded zoo is dormant
    /// until this runs.
    pub async fn reactivate(&self) {
        let handles = self.animal_handles().await;
        for handle in handles {
            let snapshot = handle.snapshot().await;
            handle.activate().await;
            let _ = self.events.send(ZooEvent::AnimalAdded { snapshot });
        }

        let guests = self.guest_snapshots().await;
        for guest in guests {
            let _ = self.events.send(ZooEvent::GuestAdded {
                id: guest.id,
                name: guest.name,
            });
        }

        info!(zoo = %self.name, "zoo reactivated");
    }

    /// Deactivate every animal's drivers without removing anyone.
    ///
    /// Used for clean process shutdown; when this returns, no animal
    /// can mutate anymore. [`reactivate`](Self::reactivate) undoes it.
    pub async fn shutdown(&self) {
        let handles = self.animal_handles().await;
        for handle in handles {
            handle.deactivate().await;
        }
        info!(zoo = %self.name, "zoo quiesced");
    }

    /// Add an occupant to a species cage and publish the membership
    /// change.
    async fn cage_insert(&self, species: Species, occupant: Occupant) {
        let occupants = {
            let mut cages = self.cages.lock().await;
            let Some(cage) = cages.get_mut(&species) else {
                return;
            };
            cage.add(occupant);
            cage.occupant_count()
        };
        let _ = self.events.send(ZooEvent::CageUpdated { species, occupants });
    }

    /// Remove an occupant from a species cage and publish the
    /// membership change.
    async fn cage_remove(&self, species: Species, occupant: Occupant) {
        let occupants = {
            let mut cages = self.cages.lock().await;
            let Some(cage) = cages.get_mut(&species) else {
                return;
            };
            cage.remove(occupant);
            cage.occupant_count()
        };
        let _ = self.events.send(ZooEvent::CageUpdated { species, occupants });
    }
}
