//! Core domain types for dictionary filtering
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, immutable once built, and validated on construction.

mod constraint;
mod letters;
pub mod pattern;

pub use constraint::{
    Constraint, ConstraintError, MAX_WORD_LENGTH, MIN_WORD_LENGTH, check_word_length,
};
pub use letters::LetterSet;
