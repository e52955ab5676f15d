//! The birthing room: the zoo's single shared delivery pipeline.
//!
//! Concurrent pregnancies from any species funnel into one FIFO queue
//! and come out as one-at-a-time deliveries performed by the room's
//! vet. Each successful delivery warms the room by exactly half a
//! degree, clamped at the maximum.
//!
//! Lock discipline: the queue is popped and released *before* the
//! mother's lock is taken, so the enqueue path (which holds a mother's
//! lock while pushing) can never deadlock against a delivery.

use std::collections::VecDeque;

use menagerie_agents::Offspring;
use menagerie_types::{AnimalId, ZooEvent};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info};

use crate::error::ZooError;
use crate::handle::AnimalHandle;

/// The minimum allowable temperature of the birthing room.
pub const MIN_TEMPERATURE: Decimal = Decimal::from_parts(350, 0, 0, false, 1); // 35.0

/// The maximum allowable temperature of the birthing room.
pub const MAX_TEMPERATURE: Decimal = Decimal::from_parts(950, 0, 0, false, 1); // 95.0

/// The initial temperature of the birthing room.
pub const INITIAL_TEMPERATURE: Decimal = Decimal::from_parts(770, 0, 0, false, 1); // 77.0

/// Heat added by one delivery.
const DELIVERY_WARMTH: Decimal = Decimal::from_parts(5, 0, 0, false, 1); // 0.5

/// The employee bound to the birthing room as its delivery capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vet {
    /// The vet's name.
    name: String,
}

impl Vet {
    /// Hire a vet.
    pub const fn new(name: String) -> Self {
        Self { name }
    }

    /// The vet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deliver a mother's pregnancy.
    async fn deliver_animal(&self, mother: &AnimalHandle) -> Result<Offspring, ZooError> {
        debug!(vet = %self.name, mother = %mother.id(), "delivering");
        mother.reproduce().await
    }
}

/// The bounded-temperature facility that serializes deliveries.
#[derive(Debug)]
pub struct BirthingRoom {
    /// The vet bound to this room.
    vet: Vet,
    /// Current temperature, always within `[35, 95]` degrees.
    temperature: Mutex<Decimal>,
    /// Pregnant animals awaiting delivery, oldest first.
    queue: Mutex<VecDeque<AnimalId>>,
    /// The zoo's event bus.
    events: broadcast::Sender<ZooEvent>,
}

impl BirthingRoom {
    /// Open a birthing room at the default temperature.
    pub fn new(vet: Vet, events: broadcast::Sender<ZooEvent>) -> Self {
        Self {
            vet,
            temperature: Mutex::new(INITIAL_TEMPERATURE),
            queue: Mutex::new(VecDeque::new()),
            events,
        }
    }

    /// The room's current temperature.
    pub async fn temperature(&self) -> Decimal {
        *self.temperature.lock().await
    }

    /// Set the room's temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::TemperatureOutOfRange`] if the value is
    /// outside `[35, 95]` degrees; the stored temperature is unchanged
    /// and no event fires.
    pub async fn set_temperature(&self, value: Decimal) -> Result<(), ZooError> {
        if value < MIN_TEMPERATURE || value > MAX_TEMPERATURE {
            return Err(ZooError::TemperatureOutOfRange { temperature: value });
        }

        let previous = {
            let mut temperature = self.temperature.lock().await;
            let previous = *temperature;
            *temperature = value;
            previous
        };

        let _ = self.events.send(ZooEvent::TemperatureChanged {
            previous,
            current: value,
        });
        Ok(())
    }

    /// Append a pregnant animal to the delivery queue.
    pub async fn enqueue(&self, id: AnimalId) {
        self.queue.lock().await.push_back(id);
    }

    /// Pop the oldest pregnancy, if any.
    pub(crate) async fn dequeue(&self) -> Option<AnimalId> {
        self.queue.lock().await.pop_front()
    }

    /// The queued pregnancies, oldest first.
    pub async fn pending(&self) -> Vec<AnimalId> {
        self.queue.lock().await.iter().copied().collect()
    }

    /// Restore the queue from a persisted snapshot.
    pub(crate) async fn restore_queue(&self, ids: Vec<AnimalId>) {
        *self.queue.lock().await = ids.into();
    }

    /// Restore the temperature from a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range persisted values like any other mutation.
    pub(crate) async fn restore_temperature(&self, value: Decimal) -> Result<(), ZooError> {
        if value < MIN_TEMPERATURE || value > MAX_TEMPERATURE {
            return Err(ZooError::TemperatureOutOfRange { temperature: value });
        }
        *self.temperature.lock().await = value;
        Ok(())
    }

    /// Have the vet deliver the given mother's pregnancy.
    ///
    /// On success the room warms by exactly 0.5 degrees, clamped at the
    /// maximum. The caller (the zoo) has already dequeued the mother.
    ///
    /// # Errors
    ///
    /// Returns a reproduction error from the mother's behavior; the
    /// temperature is unchanged in that case.
    pub(crate) async fn deliver(&self, mother: &AnimalHandle) -> Result<Offspring, ZooError> {
        let offspring = self.vet.deliver_animal(mother).await?;

        // Birthing generates heat.
        let (previous, current) = {
            let mut temperature = self.temperature.lock().await;
            let previous = *temperature;
            let warmed = previous.saturating_add(DELIVERY_WARMTH);
            *temperature = if warmed > MAX_TEMPERATURE {
                MAX_TEMPERATURE
            } else {
                warmed
            };
            (previous, *temperature)
        };
        let _ = self.events.send(ZooEvent::TemperatureChanged { previous, current });

        info!(
            mother = %mother.id(),
            newborn = %offspring.animal().id(),
            temperature = %current,
            "delivery complete"
        );
        Ok(offspring)
    }
}
