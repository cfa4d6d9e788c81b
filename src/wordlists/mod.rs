//! Word lists for dictionary filtering
//!
//! Dictionaries are plain text files with one word per line.

pub mod loader;

pub use loader::{DictionaryError, WordSource, load_from_file, load_sources, unique_sorted};

/// Dictionary path used when none is given
pub const DEFAULT_DICTIONARY: &str = "wordlewords.txt";
