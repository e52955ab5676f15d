//! The two periodic driver loops behind every live animal.
//!
//! Each admitted animal is driven by two independently scheduled tokio
//! tasks sharing one mutex:
//!
//! - the **motion loop** fires on a fixed short period and applies one
//!   movement step;
//! - the **hunger loop** fires on a per-animal randomized period and
//!   advances the hunger stage, parking once the animal collapses.
//!
//! Both loops stop promptly when the shutdown flag flips; the handle
//! awaits their join handles, so after deactivation returns no further
//! mutation of the animal can occur.
//!
//! A failed firing never tears the loop down: the failure is logged and
//! the driver continues on its next scheduled firing.

use std::sync::Arc;
use std::time::Duration;

use menagerie_types::{HungerState, ZooEvent};
use tokio::sync::{Mutex, broadcast, watch};
use tracing::{debug, warn};

use crate::handle::AnimalCell;

/// Drive one animal's movement until shutdown.
///
/// Every firing locks the cell, applies one movement step, and
/// publishes an image update for rendering collaborators.
pub(crate) async fn motion_loop(
    cell: Arc<Mutex<AnimalCell>>,
    events: broadcast::Sender<ZooEvent>,
    mut shutdown: watch::Receiver<bool>,
    period: Duration,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            () = tokio::time::sleep(period) => {
                let event = {
                    let mut cell = cell.lock().await;
                    cell.step_motion();
                    image_update(&cell)
                };
                // No subscribers is fine; rendering is optional.
                let _ = events.send(event);
            }
            result = shutdown.changed() => {
                if result.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
    debug!("motion driver stopped");
}

/// Drive one animal's hunger decay until shutdown.
///
/// The period was drawn once at activation and is reused every cycle.
/// A feed event restarts the countdown; reaching
/// [`HungerState::Unconscious`] publishes a starvation notification and
/// parks the loop until the next feed.
pub(crate) async fn hunger_loop(
    cell: Arc<Mutex<AnimalCell>>,
    events: broadcast::Sender<ZooEvent>,
    mut fed: watch::Receiver<u64>,
    mut shutdown: watch::Receiver<bool>,
    period: Duration,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            () = tokio::time::sleep(period) => {
                let (id, advanced) = {
                    let mut cell = cell.lock().await;
                    let advanced = cell.animal.advance_hunger();
                    (cell.animal.id(), advanced)
                };

                match advanced {
                    Some(HungerState::Unconscious) => {
                        let _ = events.send(ZooEvent::Starved { id });
                        if !park_until_fed(&mut fed, &mut shutdown).await {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => {
                        // Already unconscious; the firing is skipped and
                        // the driver keeps waiting for a feed.
                        warn!(animal = %id, "hunger firing on an unconscious animal skipped");
                        if !park_until_fed(&mut fed, &mut shutdown).await {
                            break;
                        }
                    }
                }
            }
            result = fed.changed() => {
                if result.is_err() {
                    break;
                }
                // Fed: the countdown restarts from the fixed period.
            }
            result = shutdown.changed() => {
                if result.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
    debug!("hunger driver stopped");
}

/// Wait until the animal is fed. Returns `false` if shutdown was
/// requested instead.
async fn park_until_fed(
    fed: &mut watch::Receiver<u64>,
    shutdown: &mut watch::Receiver<bool>,
) -> bool {
    loop {
        tokio::select! {
            result = fed.changed() => {
                return result.is_ok();
            }
            result = shutdown.changed() => {
                if result.is_err() || *shutdown.borrow() {
                    return false;
                }
            }
        }
    }
}

/// Build an image-update event from the animal's current state.
fn image_update(cell: &AnimalCell) -> ZooEvent {
    let body = cell.animal.body();
    ZooEvent::ImageUpdate {
        id: cell.animal.id(),
        species: cell.animal.species(),
        x: body.x,
        y: body.y,
        x_direction: body.x_direction,
        y_direction: body.y_direction,
        hunger: body.hunger,
        display_size: cell.animal.display_size(),
    }
}
