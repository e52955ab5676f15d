//! Simulation binary for the Menagerie zoo.
//!
//! This is the entry point that wires everything together: structured
//! logging, configuration, the zoo with its seed roster, and the keeper
//! collaborators that feed collapsed animals and deliver queued
//! pregnancies. The simulation then runs until interrupted or until the
//! configured runtime elapses.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `menagerie-config.yaml`
//! 3. Open the zoo (one cage per species, birthing room staffed)
//! 4. Breed and admit the seed roster
//! 5. Spawn the feeder and delivery attendant
//! 6. Run until ctrl-c or the runtime limit
//! 7. Quiesce every animal, optionally write a final snapshot

mod error;
mod keeper;
mod roster;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use menagerie_agents::AnimalFactory;
use menagerie_core::config::ZooConfig;
use menagerie_core::maternity::Vet;
use menagerie_core::snapshot;
use menagerie_core::zoo::Zoo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Name of the configuration file, looked up in the working directory.
const CONFIG_FILE: &str = "menagerie-config.yaml";

/// Engine-level run settings, read from the `run` key of the config
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RunConfig {
    /// Stop after this many seconds; 0 means run until interrupted
    /// (default: 0).
    #[serde(default)]
    max_runtime_secs: u64,

    /// How often the delivery attendant checks the birthing queue, in
    /// seconds (default: 30).
    #[serde(default = "default_delivery_period_secs")]
    delivery_period_secs: u64,

    /// Weight of the snack the feeder hands out, in pounds
    /// (default: 2.5).
    #[serde(default = "default_snack_weight")]
    snack_weight: Decimal,

    /// Where to write the final zoo snapshot, if anywhere.
    #[serde(default)]
    snapshot_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_runtime_secs: 0,
            delivery_period_secs: default_delivery_period_secs(),
            snack_weight: default_snack_weight(),
            snapshot_path: None,
        }
    }
}

const fn default_delivery_period_secs() -> u64 {
    30
}

fn default_snack_weight() -> Decimal {
    Decimal::new(25, 1) // 2.5
}

/// Application entry point for the simulation.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("menagerie-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    let run = load_run_config()?;
    info!(
        zoo = config.name,
        seed = config.seed,
        motion_period_ms = config.drivers.motion_period_ms,
        hunger_period_secs = format!(
            "{}-{}",
            config.drivers.hunger_period_min_secs, config.drivers.hunger_period_max_secs
        ),
        "Configuration loaded"
    );

    // 3. Open the zoo.
    let zoo = Arc::new(Zoo::new(config.clone(), Vet::new(String::from("Flora"))));

    // 4. Breed and admit the seed roster.
    let mut factory = AnimalFactory::with_enclosure(config.seed, config.enclosure);
    let admitted = roster::spawn_roster(&zoo, &mut factory).await?;
    info!(animals = admitted.len(), zoo = zoo.name(), "Zoo opened");

    // 5. Spawn the keeper collaborators.
    let feeder = keeper::spawn_feeder(Arc::clone(&zoo), run.snack_weight);
    let attendant = keeper::spawn_delivery_attendant(
        Arc::clone(&zoo),
        Duration::from_secs(run.delivery_period_secs),
    );
    info!(
        delivery_period_secs = run.delivery_period_secs,
        snack_weight = %run.snack_weight,
        "Keepers on duty"
    );

    // 6. Run until a termination condition is met.
    if run.max_runtime_secs > 0 {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("Interrupted"),
            () = tokio::time::sleep(Duration::from_secs(run.max_runtime_secs)) => {
                info!(seconds = run.max_runtime_secs, "Runtime limit reached");
            }
        }
    } else {
        let _ = tokio::signal::ctrl_c().await;
        info!("Interrupted");
    }

    // 7. Stop the keepers and quiesce every animal.
    feeder.abort();
    attendant.abort();
    zoo.shutdown().await;

    if let Some(ref path) = run.snapshot_path {
        let captured = snapshot::capture(&zoo).await;
        snapshot::save_to_file(&captured, path)?;
        info!(path = %path.display(), "Final snapshot written");
    }

    info!(
        animals = zoo.animal_snapshots().await.len(),
        total_weight = %zoo.total_animal_weight().await,
        "menagerie-engine shutdown complete"
    );

    Ok(())
}

/// Load the zoo configuration from `menagerie-config.yaml`.
///
/// Falls back to defaults when the file is absent.
fn load_config() -> Result<ZooConfig, EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        let config = ZooConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(ZooConfig::default())
    }
}

/// Load engine run settings from the `run` key of
/// `menagerie-config.yaml`. Missing file or missing key both yield
/// defaults.
fn load_run_config() -> Result<RunConfig, EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(RunConfig::default());
    }

    let contents =
        std::fs::read_to_string(config_path).map_err(|e| menagerie_core::ConfigError::Io {
            message: format!("{e}"),
        })?;

    // Parse the full YAML and extract just the "run" section.
    let raw: serde_yml::Value =
        serde_yml::from_str(&contents).map_err(|e| menagerie_core::ConfigError::Parse {
            message: format!("{e}"),
        })?;

    raw.get("run").map_or_else(
        || Ok(RunConfig::default()),
        |run_value| {
            serde_yml::from_value(run_value.clone())
                .map_err(|e| {
                    EngineError::from(menagerie_core::ConfigError::Parse {
                        message: format!("failed to parse run config: {e}"),
                    })
                })
        },
    )
}
