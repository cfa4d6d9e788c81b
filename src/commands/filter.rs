//! Filter command
//!
//! Loads the dictionary, applies the constraint and returns a report for display.

use crate::core::Constraint;
use crate::filter::{Rejection, WordFilter};
use crate::wordlists::{DictionaryError, WordSource, load_sources, unique_sorted};

/// Configuration for a filter run
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub sources: Vec<WordSource>,
    pub constraint: Constraint,
    /// Lowercase, deduplicate and sort the dictionary first
    pub unique: bool,
    /// Split the scan across threads
    pub parallel: bool,
    /// Count why words were rejected
    pub collect_rejections: bool,
}

impl FilterConfig {
    #[must_use]
    pub const fn new(sources: Vec<WordSource>, constraint: Constraint) -> Self {
        Self {
            sources,
            constraint,
            unique: false,
            parallel: false,
            collect_rejections: false,
        }
    }
}

/// How many words each rule rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub length: usize,
    pub excluded: usize,
    pub missing_required: usize,
    pub known_mismatch: usize,
}

impl RejectionCounts {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Length { .. } => self.length += 1,
            Rejection::Excluded(_) => self.excluded += 1,
            Rejection::MissingRequired(_) => self.missing_required += 1,
            Rejection::KnownMismatch { .. } => self.known_mismatch += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.length + self.excluded + self.missing_required + self.known_mismatch
    }
}

/// Result of a filter run
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub constraint: Constraint,
    pub dictionary_size: usize,
    pub matches: Vec<String>,
    pub rejections: Option<RejectionCounts>,
}

/// Load every source and filter the combined dictionary
///
/// # Errors
///
/// Returns `DictionaryError` if any source cannot be read.
pub fn run_filter(config: FilterConfig) -> Result<FilterReport, DictionaryError> {
    let mut dictionary = load_sources(&config.sources)?;
    if config.unique {
        let before = dictionary.len();
        dictionary = unique_sorted(dictionary);
        log::debug!("Deduplicated {before} words down to {}", dictionary.len());
    }

    let report = filter_dictionary(&dictionary, config);
    Ok(report)
}

/// Filter an in-memory dictionary
///
/// `config.sources` and `config.unique` are not used here.
#[must_use]
pub fn filter_dictionary(dictionary: &[String], config: FilterConfig) -> FilterReport {
    if config.constraint.is_unconstrained() {
        log::debug!(
            "No letter constraints, keeping every {}-letter word",
            config.constraint.word_length()
        );
    }
    let word_filter = WordFilter::new(&config.constraint);

    let matches = if config.parallel {
        word_filter.par_filter(dictionary)
    } else {
        word_filter.filter(dictionary)
    };

    let rejections = config.collect_rejections.then(|| {
        let mut counts = RejectionCounts::default();
        for word in dictionary {
            if let Err(rejection) = word_filter.check(word) {
                counts.record(rejection);
            }
        }
        counts
    });

    FilterReport {
        dictionary_size: dictionary.len(),
        matches,
        rejections,
        constraint: config.constraint,
    }
}
