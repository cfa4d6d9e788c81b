//! Wordle Filter
//!
//! Narrows a dictionary down to the words consistent with what is known about
//! a Wordle solution: letters fixed at positions, letters that must appear
//! somewhere, and letters that cannot appear at all.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{Constraint, LetterSet};
//! use wordle_filter::filter::filter;
//!
//! // Contains 'a', no 'g', ends in 'e'
//! let constraint = Constraint::new(
//!     5,
//!     LetterSet::from_letters("a"),
//!     LetterSet::from_letters("g"),
//!     vec![None, None, None, None, Some(b'e')],
//! )
//! .unwrap();
//!
//! let matches = filter(["apple", "grape", "crane", "plane"], &constraint);
//! assert_eq!(matches, ["apple", "crane", "plane"]);
//! ```

// Core domain types
pub mod core;

// Constraint filtering
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
