//! Dictionary filter
//!
//! Applies a `Constraint` to every word of a dictionary. Each word is checked
//! independently, so the scan can be split across threads without any
//! synchronization beyond collecting the results in order.

use crate::core::{Constraint, LetterSet};
use rayon::prelude::*;
use std::fmt;

/// Reason a word was rejected
///
/// Reported for the first violated rule, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Word does not have the constraint's length
    Length { actual: usize },
    /// Word contains an excluded letter
    Excluded(u8),
    /// Word is missing a required letter
    MissingRequired(u8),
    /// Letter at a known position differs
    KnownMismatch {
        position: usize,
        expected: u8,
        actual: char,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { actual } => write!(f, "has {actual} letters"),
            Self::Excluded(letter) => {
                write!(f, "contains excluded letter '{}'", char::from(*letter))
            }
            Self::MissingRequired(letter) => {
                write!(f, "is missing required letter '{}'", char::from(*letter))
            }
            Self::KnownMismatch {
                position,
                expected,
                actual,
            } => write!(
                f,
                "has '{actual}' at position {} instead of '{}'",
                position + 1,
                char::from(*expected)
            ),
        }
    }
}

/// Filters dictionary words against a constraint
///
/// Comparisons are case-insensitive; accepted words are returned in lowercase.
#[derive(Debug, Clone, Copy)]
pub struct WordFilter<'a> {
    constraint: &'a Constraint,
}

impl<'a> WordFilter<'a> {
    #[must_use]
    pub const fn new(constraint: &'a Constraint) -> Self {
        Self { constraint }
    }

    /// Check a single word
    ///
    /// # Errors
    /// Returns the first rule the word violates.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Constraint, LetterSet};
    /// use wordle_filter::filter::{Rejection, WordFilter};
    ///
    /// let constraint = Constraint::new(
    ///     5,
    ///     LetterSet::from_letters("a"),
    ///     LetterSet::from_letters("g"),
    ///     vec![None, None, None, None, Some(b'e')],
    /// )
    /// .unwrap();
    /// let filter = WordFilter::new(&constraint);
    ///
    /// assert!(filter.check("CRANE").is_ok());
    /// assert_eq!(filter.check("grape"), Err(Rejection::Excluded(b'g')));
    /// ```
    pub fn check(&self, word: &str) -> Result<(), Rejection> {
        self.accept(word).map(drop)
    }

    /// Returns true if the word satisfies the constraint
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.accept(word).is_ok()
    }

    /// Filter a dictionary, preserving its order
    ///
    /// Blank lines and words of the wrong length are simply rejected.
    pub fn filter<I, S>(&self, dictionary: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matches: Vec<String> = dictionary
            .into_iter()
            .filter_map(|word| self.accept_logged(word.as_ref()))
            .collect();

        log::debug!("{} words matched", matches.len());
        matches
    }

    /// Filter a dictionary using all available threads
    ///
    /// Produces exactly the same result as [`WordFilter::filter`], in the same order.
    pub fn par_filter<S>(&self, dictionary: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let matches: Vec<String> = dictionary
            .par_iter()
            .filter_map(|word| self.accept_logged(word.as_ref()))
            .collect();

        log::debug!(
            "{} words matched (parallel scan over {} words)",
            matches.len(),
            dictionary.len()
        );
        matches
    }

    fn accept_logged(&self, word: &str) -> Option<String> {
        match self.accept(word) {
            Ok(lowered) => Some(lowered),
            Err(rejection) => {
                log::trace!("rejected {word:?}: {rejection}");
                None
            }
        }
    }

    /// Normalize a word and run every rule, returning the lowercase form on success
    fn accept(&self, word: &str) -> Result<String, Rejection> {
        let lowered = word.to_lowercase();
        let letters: Vec<char> = lowered.chars().collect();

        if letters.len() != self.constraint.word_length() {
            return Err(Rejection::Length {
                actual: letters.len(),
            });
        }

        let excluded = self.constraint.excluded();
        if let Some(letter) = letters
            .iter()
            .filter_map(|&c| u8::try_from(c).ok())
            .find(|&b| excluded.contains(b))
        {
            return Err(Rejection::Excluded(letter));
        }

        let present: LetterSet = letters
            .iter()
            .filter_map(|&c| u8::try_from(c).ok())
            .collect();
        if let Some(letter) = self
            .constraint
            .required()
            .iter()
            .find(|&letter| !present.contains(letter))
        {
            return Err(Rejection::MissingRequired(letter));
        }

        for (position, expected) in self.constraint.known_letters() {
            let actual = letters[position];
            if actual != char::from(expected) {
                return Err(Rejection::KnownMismatch {
                    position,
                    expected,
                    actual,
                });
            }
        }

        Ok(lowered)
    }
}

/// Filter `dictionary` down to the words satisfying `constraint`
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
///
/// let words = wordle_filter::filter::filter(["apple", "grape", "crane", "plane"], &constraint);
/// assert_eq!(words, ["apple", "crane", "plane"]);
/// ```
pub fn filter<I, S>(dictionary: I, constraint: &Constraint) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordFilter::new(constraint).filter(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY: &[&str] = &[
        "apple", "grape", "crane", "plane", "slate", "irate", "aback", "mouse", "mound", "amuse",
        "speed", "", "toolong", "abc", "Crate", "ADIEU",
    ];

    fn build(len: usize, required: &str, excluded: &str, known: &[(usize, u8)]) -> Constraint {
        let mut slots = vec![None; len];
        for &(position, letter) in known {
            slots[position] = Some(letter);
        }
        Constraint::new(
            len,
            LetterSet::from_letters(required),
            LetterSet::from_letters(excluded),
            slots,
        )
        .unwrap()
    }

    fn satisfies(word: &str, constraint: &Constraint) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.len() == constraint.word_length()
            && constraint.excluded().iter().all(|l| !word.contains(char::from(l)))
            && constraint.required().iter().all(|l| word.contains(char::from(l)))
            && constraint
                .known_letters()
                .all(|(position, l)| letters[position] == char::from(l))
    }

    #[test]
    fn scenario_required_excluded_known() {
        let constraint = build(5, "a", "g", &[(4, b'e')]);
        let result = filter(["apple", "grape", "crane", "plane"], &constraint);
        assert_eq!(result, vec!["apple", "crane", "plane"]);
    }

    #[test]
    fn unconstrained_returns_words_of_length() {
        let constraint = Constraint::unconstrained(5).unwrap();
        let result = filter(DICTIONARY, &constraint);

        let expected: Vec<String> = DICTIONARY
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() == 5)
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn comparisons_are_case_insensitive() {
        let constraint = build(5, "d", "", &[(0, b'a')]);
        let result = filter(DICTIONARY, &constraint);
        assert_eq!(result, vec!["adieu"]);
    }

    #[test]
    fn output_is_lowercase() {
        let constraint = build(5, "", "", &[(0, b'c'), (3, b't')]);
        assert_eq!(filter(DICTIONARY, &constraint), vec!["crate"]);
    }

    #[test]
    fn accepted_words_satisfy_every_rule() {
        let constraints = [
            build(5, "a", "g", &[(4, b'e')]),
            build(5, "mu", "", &[]),
            build(5, "", "aeiou", &[]),
            build(5, "s", "", &[(1, b'p')]),
            build(3, "", "", &[]),
        ];
        for constraint in &constraints {
            for word in filter(DICTIONARY, constraint) {
                assert!(satisfies(&word, constraint), "{word} should not match");
            }
        }
    }

    #[test]
    fn rejected_words_violate_a_rule() {
        let constraint = build(5, "a", "g", &[(4, b'e')]);
        let filter = WordFilter::new(&constraint);
        for word in DICTIONARY {
            let lowered = word.to_lowercase();
            match filter.check(word) {
                Ok(()) => assert!(satisfies(&lowered, &constraint)),
                Err(_) => assert!(!satisfies(&lowered, &constraint)),
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let constraint = build(5, "a", "", &[]);
        let once = filter(DICTIONARY, &constraint);
        let twice = filter(&once, &constraint);
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicates_are_preserved() {
        let constraint = Constraint::unconstrained(5).unwrap();
        let result = filter(["crane", "crane", "CRANE"], &constraint);
        assert_eq!(result, vec!["crane", "crane", "crane"]);
    }

    #[test]
    fn rejection_reasons() {
        let constraint = build(5, "a", "g", &[(4, b'e')]);
        let filter = WordFilter::new(&constraint);

        assert_eq!(filter.check(""), Err(Rejection::Length { actual: 0 }));
        assert_eq!(
            filter.check("toolong"),
            Err(Rejection::Length { actual: 7 })
        );
        assert_eq!(filter.check("grape"), Err(Rejection::Excluded(b'g')));
        assert_eq!(filter.check("mouse"), Err(Rejection::MissingRequired(b'a')));
        assert_eq!(
            filter.check("aback"),
            Err(Rejection::KnownMismatch {
                position: 4,
                expected: b'e',
                actual: 'k'
            })
        );
        assert!(filter.check("PLANE").is_ok());
    }

    #[test]
    fn repeated_letters_satisfy_single_requirement() {
        let constraint = build(5, "e", "", &[]);
        assert!(WordFilter::new(&constraint).matches("speed"));
    }

    #[test]
    fn non_letters_count_towards_length() {
        let constraint = Constraint::unconstrained(5).unwrap();
        let filter = WordFilter::new(&constraint);
        assert!(filter.matches("ab-cd"));
        assert!(!filter.matches("abcd"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let constraint = Constraint::unconstrained(5).unwrap();
        assert!(WordFilter::new(&constraint).matches("café!"));
    }

    #[test]
    fn parallel_matches_sequential() {
        let words: Vec<String> = DICTIONARY
            .iter()
            .cycle()
            .take(DICTIONARY.len() * 50)
            .map(|w| (*w).to_string())
            .collect();
        let constraint = build(5, "a", "", &[]);
        let filter = WordFilter::new(&constraint);

        assert_eq!(filter.par_filter(&words), filter.filter(&words));
    }

    #[test]
    fn rejection_display() {
        let rejection = Rejection::KnownMismatch {
            position: 0,
            expected: b'm',
            actual: 'c',
        };
        assert_eq!(
            rejection.to_string(),
            "has 'c' at position 1 instead of 'm'"
        );
        assert_eq!(
            Rejection::MissingRequired(b'a').to_string(),
            "is missing required letter 'a'"
        );
    }
}
