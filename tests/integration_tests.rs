//! Integration tests for the dictionary filter.
//!
//! These drive the library the way the CLI does: raw argument strings are
//! parsed into a constraint, fixture word lists are loaded from disk, and the
//! filtered results are checked and written back out.

use std::path::PathBuf;

use wordle_filter::commands::{
    ArgumentError, ConstraintArgs, FilterConfig, ParsePolicy, run_filter, save_results,
};
use wordle_filter::core::{Constraint, ConstraintError};
use wordle_filter::filter::{WordFilter, filter};
use wordle_filter::wordlists::{DictionaryError, WordSource, load_from_file};

const WORDS: &str = "tests/fixtures/words.txt";
const EXTRA: &str = "tests/fixtures/extra.txt";

fn constraint(required: &str, excluded: &str, known: &str) -> Constraint {
    let mut args = ConstraintArgs::new(5);
    args.required = Some(required.to_string());
    args.excluded = Some(excluded.to_string());
    args.known = Some(known.to_string());
    args.policy = ParsePolicy::Strict;
    args.to_constraint().expect("valid constraint")
}

fn run(sources: Vec<WordSource>, constraint: Constraint, unique: bool) -> Vec<String> {
    let mut config = FilterConfig::new(sources, constraint);
    config.unique = unique;
    run_filter(config).expect("fixtures are readable").matches
}

#[test]
fn filters_fixture_dictionary() {
    let matches = run(
        vec![WordSource::new(WORDS)],
        constraint("a", "t", "1s,5e"),
        false,
    );
    assert_eq!(matches, vec!["share", "shale"]);
}

#[test]
fn fixture_scenario_from_docs() {
    let dictionary = ["apple", "grape", "crane", "plane"];
    let matches = filter(dictionary, &constraint("a", "g", "5e"));
    assert_eq!(matches, vec!["apple", "crane", "plane"]);
}

#[test]
fn combined_dictionaries_keep_order_and_duplicates() {
    let sources = vec![WordSource::new(WORDS), WordSource::new(EXTRA)];
    let matches = run(sources, constraint("", "", "1s"), false);
    assert_eq!(
        matches,
        vec!["slate", "speed", "stare", "share", "shale", "slate"]
    );
}

#[test]
fn unique_dictionary_is_sorted_and_deduplicated() {
    let sources = vec![WordSource::new(WORDS), WordSource::new(EXTRA)];
    let matches = run(sources, constraint("", "", "1s"), true);
    assert_eq!(matches, vec!["shale", "share", "slate", "speed", "stare"]);
}

#[test]
fn mixed_case_entries_match_case_insensitively() {
    let matches = run(
        vec![WordSource::new(WORDS)],
        constraint("", "", "1m,2o,3u,4s"),
        false,
    );
    assert_eq!(matches, vec!["mouse", "mouse"]);
}

#[test]
fn expected_count_mismatch_still_loads() {
    let source = WordSource::new(WORDS).with_expected_count(1);
    let matches = run(vec![source], constraint("", "", "1z"), false);
    assert!(matches.is_empty());
}

#[test]
fn missing_dictionary_is_reported() {
    let config = FilterConfig::new(
        vec![WordSource::new("tests/fixtures/missing.txt")],
        constraint("a", "", ""),
    );
    match run_filter(config) {
        Err(DictionaryError::Unavailable { path, .. }) => {
            assert_eq!(path, PathBuf::from("tests/fixtures/missing.txt"));
        }
        Ok(_) => panic!("expected the dictionary to be unavailable"),
    }
}

#[test]
fn filter_properties_hold_on_fixture() {
    let dictionary = load_from_file(WORDS).unwrap();
    let constraints = [
        constraint("a", "g", "5e"),
        constraint("e", "", ""),
        constraint("", "aeiou", ""),
        constraint("h", "w", "1s"),
    ];

    for constraint in &constraints {
        let word_filter = WordFilter::new(constraint);
        let once = word_filter.filter(&dictionary);

        assert_eq!(word_filter.filter(&once), once, "filter is idempotent");
        assert_eq!(word_filter.par_filter(&dictionary), once, "parallel scan agrees");

        for word in &dictionary {
            let accepted = once.contains(&word.to_lowercase());
            assert_eq!(word_filter.matches(word), accepted, "{word}");
        }
    }
}

#[test]
fn unconstrained_keeps_every_word_of_length() {
    let dictionary = load_from_file(WORDS).unwrap();
    let matches = filter(&dictionary, &Constraint::unconstrained(5).unwrap());
    let expected: Vec<String> = dictionary
        .iter()
        .filter(|w| w.chars().count() == 5)
        .map(|w| w.to_lowercase())
        .collect();
    assert_eq!(matches, expected);
}

#[test]
fn contradictory_arguments_are_rejected() {
    let mut args = ConstraintArgs::new(5);
    args.required = Some("e".to_string());
    args.known = Some("5e".to_string());
    assert_eq!(
        args.to_constraint(),
        Err(ArgumentError::Constraint(
            ConstraintError::KnownLetterRequired {
                position: 4,
                letter: b'e'
            }
        ))
    );

    let mut args = ConstraintArgs::new(5);
    let alphabet: Vec<String> = ('a'..='z').map(String::from).collect();
    args.excluded = Some(alphabet.join(","));
    assert_eq!(
        args.to_constraint(),
        Err(ArgumentError::Constraint(ConstraintError::AllLettersExcluded))
    );
}

#[test]
fn saved_results_round_trip_as_dictionary() {
    let matches = run(
        vec![WordSource::new(WORDS)],
        constraint("", "", "2h"),
        false,
    );
    assert_eq!(matches, vec!["share", "shale", "whale"]);

    let path = std::env::temp_dir().join(format!(
        "wordle_filter_results_{}.txt",
        std::process::id()
    ));
    save_results(&path, &matches).unwrap();
    let reloaded = load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, matches);
}
