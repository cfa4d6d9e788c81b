//! Constraint filtering over a dictionary

mod engine;

pub use engine::{Rejection, WordFilter, filter};
