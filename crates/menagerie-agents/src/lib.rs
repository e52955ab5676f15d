//! Animal state, behavior strategies, and the species factory for the
//! Menagerie simulation.
//!
//! This crate is the pure logic layer -- everything that operates on
//! animal state without touching I/O, timers, or locks. It sits between
//! `menagerie-types` (which defines the shared vocabulary) and
//! `menagerie-core` (which wraps animals in the concurrent driver
//! harness).
//!
//! # Modules
//!
//! - [`animal`] -- The [`Animal`] entity and its validated operations
//! - [`eating`] -- Eating behaviors and [`Food`]
//! - [`error`] -- Error types for all animal operations ([`AnimalError`])
//! - [`factory`] -- The species factory ([`AnimalFactory`])
//! - [`movement`] -- Movement patterns, including the multi-phase state machines
//! - [`reproduction`] -- Reproduction behaviors and the [`Offspring`] result
//! - [`species`] -- The species configuration table

pub mod animal;
pub mod eating;
pub mod error;
pub mod factory;
pub mod movement;
pub mod reproduction;
pub mod species;

// Re-export primary types at crate root for convenience.
pub use animal::{Animal, Body, MAX_AGE, MAX_WEIGHT, NewAnimal};
pub use eating::Food;
pub use error::AnimalError;
pub use factory::AnimalFactory;
pub use movement::{ClimbPhase, ClimbState, HoverPhase, HoverState, MoveBehavior};
pub use reproduction::Offspring;
pub use species::{SpeciesProfile, profile};
