//! Regex-style rendering of a constraint
//!
//! The filter itself matches with letter sets, but a regular expression is the
//! most familiar way to show what a constraint means. Verbose output prints:
//! - the letter group used for unknown positions, e.g. `[^c-eg]`
//! - the whole-word pattern, e.g. `^m[^c-eg]{3}e$`
//!
//! Required letters have no position and are not part of the pattern.

use super::{Constraint, LetterSet};

/// Render the character class that matches an unknown position
///
/// Runs of three or more consecutive excluded letters collapse into a range.
///
/// # Examples
/// ```
/// use wordle_filter::core::{LetterSet, pattern::letter_group};
///
/// assert_eq!(letter_group(LetterSet::new()), "[a-z]");
/// assert_eq!(letter_group(LetterSet::from_letters("gcde")), "[^c-eg]");
/// assert_eq!(letter_group(LetterSet::from_letters("ab")), "[^ab]");
/// ```
#[must_use]
pub fn letter_group(excluded: LetterSet) -> String {
    if excluded.is_empty() {
        return "[a-z]".to_string();
    }

    let mut group = String::from("[^");
    let letters: Vec<u8> = excluded.iter().collect();
    let mut start = 0;
    while start < letters.len() {
        let mut end = start;
        while end + 1 < letters.len() && letters[end + 1] == letters[end] + 1 {
            end += 1;
        }
        match end - start {
            0 => group.push(char::from(letters[start])),
            1 => {
                group.push(char::from(letters[start]));
                group.push(char::from(letters[end]));
            }
            _ => {
                group.push(char::from(letters[start]));
                group.push('-');
                group.push(char::from(letters[end]));
            }
        }
        start = end + 1;
    }
    group.push(']');
    group
}

/// Render the anchored whole-word pattern for a constraint
///
/// Consecutive unknown positions are written once with a `{n}` repetition.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Constraint, LetterSet, pattern::render};
///
/// let constraint = Constraint::new(
///     5,
///     LetterSet::from_letters("a"),
///     LetterSet::from_letters("g"),
///     vec![None, None, None, None, Some(b'e')],
/// )
/// .unwrap();
/// assert_eq!(render(&constraint), "^[^g]{4}e$");
/// ```
#[must_use]
pub fn render(constraint: &Constraint) -> String {
    let group = letter_group(constraint.excluded());
    let mut pattern = String::from("^");
    let mut unknown_run = 0usize;

    let flush = |pattern: &mut String, run: &mut usize| {
        match *run {
            0 => {}
            1 => pattern.push_str(&group),
            n => {
                pattern.push_str(&group);
                pattern.push('{');
                pattern.push_str(&n.to_string());
                pattern.push('}');
            }
        }
        *run = 0;
    };

    for slot in constraint.known() {
        match slot {
            Some(letter) => {
                flush(&mut pattern, &mut unknown_run);
                pattern.push(char::from(*letter));
            }
            None => unknown_run += 1,
        }
    }
    flush(&mut pattern, &mut unknown_run);

    pattern.push('$');
    pattern
}
