//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or readers, and an
//! explicit dedup-and-sort step for callers that combine several lists.

use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error type for dictionaries that cannot be read
#[derive(Debug)]
pub enum DictionaryError {
    Unavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Unable to read word list \"{}\": {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// A word list file with an optional expected word count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    pub path: PathBuf,
    pub expected_count: Option<usize>,
}

impl WordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expected_count: None,
        }
    }

    #[must_use]
    pub const fn with_expected_count(mut self, count: usize) -> Self {
        self.expected_count = Some(count);
        self
    }
}

/// Read one word per line
///
/// Surrounding whitespace (including `\r`) is trimmed and blank lines are
/// skipped. Lines are read as bytes; invalid UTF-8 is replaced with U+FFFD so
/// one badly encoded entry only loses that word. No other validation happens
/// here; the filter rejects malformed words.
///
/// # Errors
///
/// Returns any I/O error raised while reading.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = text {
            log::warn!("Line {} is not valid UTF-8", index + 1);
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError::Unavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlewords.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let unavailable = |source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let words = load_from_reader(BufReader::new(file)).map_err(unavailable)?;

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load several files and concatenate them in order
///
/// A source whose word count differs from its expected count is logged as a
/// warning and still used.
///
/// # Errors
///
/// Returns the first `DictionaryError` encountered.
pub fn load_sources(sources: &[WordSource]) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for source in sources {
        let loaded = load_from_file(&source.path)?;
        if let Some(expected) = source.expected_count
            && loaded.len() != expected
        {
            log::warn!(
                "Expected {expected} words in {} but found {}",
                source.path.display(),
                loaded.len()
            );
        }
        words.extend(loaded);
    }
    Ok(words)
}

/// Lowercase, deduplicate and sort a word list
///
/// This is a dictionary preprocessing step and is never applied implicitly.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::unique_sorted;
///
/// let words = unique_sorted(["slate", "Crane", "slate", "crane"]);
/// assert_eq!(words, ["crane", "slate"]);
/// ```
#[must_use]
pub fn unique_sorted<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: FxHashSet<String> = words
        .into_iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect();

    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_unstable();
    sorted
}
