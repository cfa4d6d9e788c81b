//! Letter set representation
//!
//! A `LetterSet` stores a subset of the 26 lowercase ASCII letters as a bitmask,
//! bit 0 for `a` through bit 25 for `z`.

use std::fmt;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from the letters of a string, ignoring anything that is
    /// not an ASCII letter. Uppercase letters are folded to lowercase.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("Crane");
    /// assert_eq!(set.len(), 5);
    /// assert!(set.contains(b'c'));
    /// assert!(!set.contains(b'z'));
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase())
            .collect()
    }

    /// Returns true if `letter` is a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn is_letter(letter: u8) -> bool {
        letter.is_ascii_lowercase()
    }

    /// Insert a letter. Returns false if `letter` is not lowercase ASCII.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        if !Self::is_letter(letter) {
            return false;
        }
        self.0 |= Self::bit(letter);
        true
    }

    /// Check whether the set contains a letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        Self::is_letter(letter) && self.0 & Self::bit(letter) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when all 26 letters are present
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::ALL.0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
