//! The keeper collaborators: external actors driving the zoo from the
//! outside.
//!
//! The simulation itself never feeds or delivers anyone -- those are
//! externally triggered operations. The engine stands up two small
//! tasks to play the external roles:
//!
//! - the **feeder** subscribes to the event bus and feeds any animal
//!   that collapses from hunger;
//! - the **delivery attendant** periodically asks the zoo to deliver
//!   the oldest queued pregnancy.
//!
//! Both are plain bus/zoo clients; they hold no special access.

use std::sync::Arc;
use std::time::Duration;

use menagerie_agents::Food;
use menagerie_core::Zoo;
use menagerie_types::ZooEvent;
use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Spawn the feeding collaborator.
///
/// Feeds a fixed snack to every animal that publishes a starvation
/// event. Feeding failures are logged and skipped -- one refused meal
/// must not stop the keeper.
pub fn spawn_feeder(zoo: Arc<Zoo>, snack_weight: Decimal) -> JoinHandle<()> {
    let mut events = zoo.subscribe();

    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ZooEvent::Starved { id }) => {
                    match zoo.feed_animal(id, &Food::new(snack_weight)).await {
                        Ok(()) => info!(animal = %id, "fed a collapsed animal"),
                        Err(e) => warn!(animal = %id, error = %e, "feeding failed"),
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "feeder lagged behind the event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

/// Spawn the delivery attendant.
///
/// Calls for a delivery on a fixed period; an empty queue is the
/// normal quiet case and logs nothing.
pub fn spawn_delivery_attendant(zoo: Arc<Zoo>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            match zoo.birth_animal().await {
                Ok(Some(child)) => info!(newborn = %child, "delivery attendant admitted a newborn"),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "delivery failed"),
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menagerie_agents::AnimalFactory;
    use menagerie_core::config::ZooConfig;
    use menagerie_core::maternity::Vet;
    use menagerie_types::{Gender, HungerState, Species};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn feeder_revives_collapsed_animals() {
        let zoo = Arc::new(Zoo::new(ZooConfig::default(), Vet::new(String::from("Flora"))));
        let mut factory = AnimalFactory::new(21);
        let animal = factory
            .breed(
                Species::Dingo,
                String::from("Spot"),
                5,
                Decimal::new(413, 1),
                Gender::Male,
            )
            .unwrap();
        let id = zoo.add_animal(animal).await;

        let feeder = spawn_feeder(Arc::clone(&zoo), Decimal::new(25, 1));

        // Let hunger decay all the way down; the feeder should catch the
        // starvation event and reset the animal.
        tokio::time::sleep(Duration::from_secs(61)).await;

        let handle = zoo.animal(id).await.unwrap();
        assert_ne!(handle.snapshot().await.hunger, HungerState::Unconscious);

        feeder.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn attendant_delivers_queued_pregnancies() {
        let zoo = Arc::new(Zoo::new(ZooConfig::default(), Vet::new(String::from("Flora"))));
        let mut factory = AnimalFactory::new(22);
        let animal = factory
            .breed(
                Species::Kangaroo,
                String::from("Kanga"),
                8,
                Decimal::new(720, 1),
                Gender::Female,
            )
            .unwrap();
        let id = zoo.add_animal(animal).await;
        zoo.make_pregnant(id).await.unwrap();

        let attendant = spawn_delivery_attendant(Arc::clone(&zoo), Duration::from_secs(5));

        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(zoo.animal_snapshots().await.len(), 2);
        assert!(zoo.birthing_room().pending().await.is_empty());

        attendant.abort();
    }
}
