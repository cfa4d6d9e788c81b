//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Format known slots as `M O _ _ E`
#[must_use]
pub fn format_known(known: &[Option<u8>]) -> String {
    known
        .iter()
        .map(|slot| slot.map_or('_', |letter| char::from(letter.to_ascii_uppercase())))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a letter set as `A, E, S`
#[must_use]
pub fn format_letters(letters: LetterSet) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }
    letters
        .iter()
        .map(|letter| char::from(letter.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Heading printed above the match list
#[must_use]
pub fn solutions_heading(count: usize) -> String {
    match count {
        0 => "No solutions found.".to_string(),
        1 => "1 possible solution:".to_string(),
        n => format!("{n} possible solutions:"),
    }
}
