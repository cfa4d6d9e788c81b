//! Word constraint representation
//!
//! A `Constraint` captures everything known about the solution: its length,
//! letters it must contain, letters it cannot contain, and letters fixed at
//! specific positions. Construction validates the combination, so a
//! `Constraint` value is always consistent.

use super::LetterSet;
use std::fmt;

/// Shortest word length a constraint accepts
pub const MIN_WORD_LENGTH: usize = 2;

/// Longest word length a constraint accepts
pub const MAX_WORD_LENGTH: usize = 64;

/// Constraint on the solution word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    word_length: usize,
    required: LetterSet,
    excluded: LetterSet,
    known: Vec<Option<u8>>,
}

/// Error type for impossible or contradictory constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    WordLengthTooShort(usize),
    WordLengthTooLong(usize),
    KnownLengthMismatch { expected: usize, actual: usize },
    InvalidLetter(u8),
    AllLettersExcluded,
    RequiredExcludedOverlap(LetterSet),
    KnownLetterRequired { position: usize, letter: u8 },
    KnownLetterExcluded { position: usize, letter: u8 },
    TooManyRequired { required: usize, open_slots: usize },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLengthTooShort(len) => {
                write!(
                    f,
                    "Word length must be at least {MIN_WORD_LENGTH}, got {len}"
                )
            }
            Self::WordLengthTooLong(len) => {
                write!(
                    f,
                    "Word length must be at most {MAX_WORD_LENGTH}, got {len}"
                )
            }
            Self::KnownLengthMismatch { expected, actual } => write!(
                f,
                "Known positions cover {actual} slots but the word has {expected}"
            ),
            Self::InvalidLetter(b) => {
                write!(f, "'{}' is not a lowercase letter", b.escape_ascii())
            }
            Self::AllLettersExcluded => {
                write!(f, "All 26 letters of the alphabet have been excluded")
            }
            Self::RequiredExcludedOverlap(letters) => write!(
                f,
                "Letters '{letters}' are both required and excluded"
            ),
            Self::KnownLetterRequired { position, letter } => write!(
                f,
                "Letter '{}' is known at position {} and must not also be listed as required",
                char::from(*letter),
                position + 1
            ),
            Self::KnownLetterExcluded { position, letter } => write!(
                f,
                "Letter '{}' is known at position {} but is also excluded",
                char::from(*letter),
                position + 1
            ),
            Self::TooManyRequired {
                required,
                open_slots,
            } => write!(
                f,
                "{required} letters are required but only {open_slots} positions are unknown"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

impl Constraint {
    /// Create a validated constraint
    ///
    /// `known` holds one slot per letter position; `None` marks an unknown slot.
    ///
    /// # Errors
    /// Returns `ConstraintError` if:
    /// - `word_length` is below 2 or differs from `known.len()`
    /// - a known slot is not a lowercase ASCII letter
    /// - every letter is excluded
    /// - a letter is both required and excluded
    /// - a known letter is also required or excluded
    /// - there are more required letters than unknown slots
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Constraint, LetterSet};
    ///
    /// let constraint = Constraint::new(
    ///     5,
    ///     LetterSet::from_letters("a"),
    ///     LetterSet::from_letters("g"),
    ///     vec![None, None, None, None, Some(b'e')],
    /// )
    /// .unwrap();
    /// assert_eq!(constraint.known_count(), 1);
    ///
    /// // 'e' is already known, so requiring it is contradictory
    /// assert!(Constraint::new(
    ///     5,
    ///     LetterSet::from_letters("e"),
    ///     LetterSet::new(),
    ///     vec![None, None, None, None, Some(b'e')],
    /// )
    /// .is_err());
    /// ```
    pub fn new(
        word_length: usize,
        required: LetterSet,
        excluded: LetterSet,
        known: Vec<Option<u8>>,
    ) -> Result<Self, ConstraintError> {
        let constraint = Self {
            word_length,
            required,
            excluded,
            known,
        };
        constraint.validate()?;
        Ok(constraint)
    }

    /// A constraint that only fixes the word length
    ///
    /// # Errors
    /// Returns `ConstraintError::WordLengthTooShort` or
    /// `ConstraintError::WordLengthTooLong` if `word_length` is out of range.
    pub fn unconstrained(word_length: usize) -> Result<Self, ConstraintError> {
        check_word_length(word_length)?;
        Self::new(
            word_length,
            LetterSet::new(),
            LetterSet::new(),
            vec![None; word_length],
        )
    }

    fn validate(&self) -> Result<(), ConstraintError> {
        check_word_length(self.word_length)?;
        if self.known.len() != self.word_length {
            return Err(ConstraintError::KnownLengthMismatch {
                expected: self.word_length,
                actual: self.known.len(),
            });
        }
        if self.excluded.is_full() {
            return Err(ConstraintError::AllLettersExcluded);
        }

        let overlap = self.required.intersection(self.excluded);
        if !overlap.is_empty() {
            return Err(ConstraintError::RequiredExcludedOverlap(overlap));
        }

        for (position, letter) in self.known_letters() {
            if !LetterSet::is_letter(letter) {
                return Err(ConstraintError::InvalidLetter(letter));
            }
            if self.required.contains(letter) {
                return Err(ConstraintError::KnownLetterRequired { position, letter });
            }
            if self.excluded.contains(letter) {
                return Err(ConstraintError::KnownLetterExcluded { position, letter });
            }
        }

        // Required letters can only land in the unknown slots
        let open_slots = self.word_length - self.known_count();
        if self.required.len() > open_slots {
            return Err(ConstraintError::TooManyRequired {
                required: self.required.len(),
                open_slots,
            });
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Known slots, one per position
    #[inline]
    #[must_use]
    pub fn known(&self) -> &[Option<u8>] {
        &self.known
    }

    /// Iterate over `(position, letter)` for every known slot
    pub fn known_letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.known
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|letter| (position, letter)))
    }

    /// Number of positions with a known letter
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when only the word length is constrained
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty() && self.known_count() == 0
    }
}

/// Check a word length against `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`
///
/// Callers building per-position storage run this before allocating.
///
/// # Errors
/// Returns `ConstraintError::WordLengthTooShort` or `ConstraintError::WordLengthTooLong`.
pub const fn check_word_length(word_length: usize) -> Result<(), ConstraintError> {
    if word_length < MIN_WORD_LENGTH {
        return Err(ConstraintError::WordLengthTooShort(word_length));
    }
    if word_length > MAX_WORD_LENGTH {
        return Err(ConstraintError::WordLengthTooLong(word_length));
    }
    Ok(())
}
