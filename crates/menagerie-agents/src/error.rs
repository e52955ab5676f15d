//! Error types for the menagerie-agents crate.
//!
//! All operations that can fail return typed errors rather than
//! panicking. Validation failures leave the animal's state untouched --
//! a rejected mutation has no side effect and fires no notification.

use menagerie_types::AnimalId;
use rust_decimal::Decimal;

/// Errors that can occur during animal state operations.
#[derive(Debug, thiserror::Error)]
pub enum AnimalError {
    /// A name contained characters outside letters and spaces.
    #[error("invalid name {name:?}: names can contain only letters A-Z and spaces")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// An age mutation fell outside the valid range.
    #[error("age {age} out of range: age must be between 0 and 100")]
    AgeOutOfRange {
        /// The rejected age.
        age: u32,
    },

    /// A weight mutation fell outside the valid range.
    #[error("weight {weight} out of range: weight must be between 0 and 1000 lbs")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: Decimal,
    },

    /// `make_pregnant` was called on an animal that is already pregnant.
    #[error("animal {0} is already pregnant")]
    AlreadyPregnant(AnimalId),

    /// `reproduce` was called on an animal that is not pregnant.
    #[error("animal {0} is not pregnant")]
    NotPregnant(AnimalId),

    /// An arithmetic overflow occurred during a weight computation.
    #[error("arithmetic overflow in animal computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
