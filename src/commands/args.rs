//! Argument token parsing
//!
//! Turns the raw flag values (`m,s,e` for letter lists, `1m,2o,3u` for known
//! positions) into a validated `Constraint`. Malformed tokens are either
//! skipped with a warning or rejected, depending on the `ParsePolicy`.

use crate::core::{Constraint, ConstraintError, LetterSet, check_word_length};
use std::fmt;

/// What to do with a token that doesn't have the expected shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Skip the token and log a warning
    #[default]
    Lenient,
    /// Abort with an error
    Strict,
}

/// Error type for malformed or contradictory arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    MalformedLetter(String),
    MalformedKnown(String),
    PositionOutOfRange { token: String, word_length: usize },
    ConflictingKnown { position: usize, first: u8, second: u8 },
    NoConstraints,
    Constraint(ConstraintError),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLetter(token) => {
                write!(f, "Expected a single letter, got \"{token}\"")
            }
            Self::MalformedKnown(token) => write!(
                f,
                "Expected a position followed by a letter (e.g. 1m), got \"{token}\""
            ),
            Self::PositionOutOfRange { token, word_length } => write!(
                f,
                "Position in \"{token}\" must be between 1 and {word_length}"
            ),
            Self::ConflictingKnown {
                position,
                first,
                second,
            } => write!(
                f,
                "Position {} is given both '{}' and '{}'",
                position + 1,
                char::from(*first),
                char::from(*second)
            ),
            Self::NoConstraints => write!(
                f,
                "No constraints were provided; use --require, --exclude or --known"
            ),
            Self::Constraint(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Constraint(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConstraintError> for ArgumentError {
    fn from(err: ConstraintError) -> Self {
        Self::Constraint(err)
    }
}

/// Raw constraint arguments, parsed once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintArgs {
    pub word_length: usize,
    pub required: Option<String>,
    pub excluded: Option<String>,
    pub known: Option<String>,
    pub policy: ParsePolicy,
}

impl ConstraintArgs {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            required: None,
            excluded: None,
            known: None,
            policy: ParsePolicy::Lenient,
        }
    }

    /// Parse every argument and build the constraint
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError` if no constraint argument was given, if a
    /// token is malformed under `ParsePolicy::Strict`, if two letters claim
    /// the same position, or if the resulting constraint is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::commands::ConstraintArgs;
    ///
    /// let mut args = ConstraintArgs::new(5);
    /// args.required = Some("a".to_string());
    /// args.excluded = Some("g,x".to_string());
    /// args.known = Some("5e".to_string());
    ///
    /// let constraint = args.to_constraint().unwrap();
    /// assert_eq!(constraint.excluded().len(), 2);
    /// assert_eq!(constraint.known()[4], Some(b'e'));
    /// ```
    pub fn to_constraint(&self) -> Result<Constraint, ArgumentError> {
        let given = |arg: &Option<String>| arg.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !given(&self.required) && !given(&self.excluded) && !given(&self.known) {
            return Err(ArgumentError::NoConstraints);
        }

        // `parse_known` allocates one slot per position
        check_word_length(self.word_length)?;

        let required = parse_letters(self.required.as_deref().unwrap_or_default(), self.policy)?;
        let excluded = parse_letters(self.excluded.as_deref().unwrap_or_default(), self.policy)?;
        let known = parse_known(
            self.known.as_deref().unwrap_or_default(),
            self.word_length,
            self.policy,
        )?;

        Ok(Constraint::new(self.word_length, required, excluded, known)?)
    }
}

/// Parse a comma-separated list of single letters, e.g. `m,s,e`
///
/// Letters are case-insensitive and surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `ArgumentError::MalformedLetter` under `ParsePolicy::Strict` for
/// any token that is not exactly one ASCII letter.
pub fn parse_letters(param: &str, policy: ParsePolicy) -> Result<LetterSet, ArgumentError> {
    let mut letters = LetterSet::new();
    if param.trim().is_empty() {
        return Ok(letters);
    }

    for token in param.split(',').map(str::trim) {
        match token.as_bytes() {
            [b] if b.is_ascii_alphabetic() => {
                letters.insert(b.to_ascii_lowercase());
            }
            _ => reject(policy, ArgumentError::MalformedLetter(token.to_string()))?,
        }
    }
    Ok(letters)
}

/// Parse a comma-separated list of known positions, e.g. `1m,2o,3u`
///
/// Positions are 1-based. Repeating a position with the same letter is
/// harmless; giving it a different letter is a contradiction.
///
/// # Errors
///
/// Returns `ArgumentError::ConflictingKnown` when one position gets two
/// letters. Under `ParsePolicy::Strict`, also returns
/// `ArgumentError::MalformedKnown` or `ArgumentError::PositionOutOfRange`.
pub fn parse_known(
    param: &str,
    word_length: usize,
    policy: ParsePolicy,
) -> Result<Vec<Option<u8>>, ArgumentError> {
    let mut known = vec![None; word_length];
    if param.trim().is_empty() {
        return Ok(known);
    }

    for token in param.split(',').map(str::trim) {
        let Some((position, letter)) = split_known_token(token) else {
            reject(policy, ArgumentError::MalformedKnown(token.to_string()))?;
            continue;
        };
        if position == 0 || position > word_length {
            reject(
                policy,
                ArgumentError::PositionOutOfRange {
                    token: token.to_string(),
                    word_length,
                },
            )?;
            continue;
        }

        let index = position - 1;
        match known[index] {
            Some(first) if first != letter => {
                return Err(ArgumentError::ConflictingKnown {
                    position: index,
                    first,
                    second: letter,
                });
            }
            _ => known[index] = Some(letter),
        }
    }
    Ok(known)
}

/// Split `12x` into `(12, b'x')`
fn split_known_token(token: &str) -> Option<(usize, u8)> {
    let (&letter, digits) = token.as_bytes().split_last()?;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) || !letter.is_ascii_alphabetic()
    {
        return None;
    }
    let position = token[..digits.len()].parse().ok()?;
    Some((position, letter.to_ascii_lowercase()))
}

fn reject(policy: ParsePolicy, err: ArgumentError) -> Result<(), ArgumentError> {
    match policy {
        ParsePolicy::Strict => Err(err),
        ParsePolicy::Lenient => {
            log::warn!("Skipping argument: {err}");
            Ok(())
        }
    }
}
