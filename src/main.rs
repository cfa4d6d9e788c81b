//! Wordle Filter - CLI
//!
//! Lists the dictionary words that fit known, required and excluded letters.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordle_filter::{
    commands::{
        ConstraintArgs, DEFAULT_RESULTS_FILE, FilterConfig, ParsePolicy, run_filter, save_results,
    },
    core::Constraint,
    log::init_logger,
    output::{print_constraint, print_matches, print_saved, print_statistics},
    wordlists::{DEFAULT_DICTIONARY, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Filter a word list by known, required and excluded letters",
    version,
    author
)]
struct Cli {
    /// Path to a word list, one word per line (repeat to combine several lists)
    #[arg(short, long = "dict", value_name = "PATH", default_value = DEFAULT_DICTIONARY)]
    dict: Vec<PathBuf>,

    /// Expected number of words in each --dict, in the same order (mismatches are warned about)
    #[arg(long, value_name = "N")]
    expect: Vec<usize>,

    /// The length of the word to be found
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Letters known to not be in the word, separated by commas: -e m,s,e
    #[arg(short, long, value_name = "LETTERS")]
    exclude: Option<String>,

    /// Letters known to be in the word at unknown positions: -r m,s,e
    #[arg(short, long, visible_alias = "include", value_name = "LETTERS")]
    require: Option<String>,

    /// Known positions (1-based) and letters: -k 1m,2o,3u
    #[arg(short, long, value_name = "SLOTS")]
    known: Option<String>,

    /// Show how the arguments were interpreted
    #[arg(short, long)]
    verbose: bool,

    /// Save the potential solutions to a file instead of listing them
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_RESULTS_FILE
    )]
    save: Option<PathBuf>,

    /// Reject malformed letter or position tokens instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Lowercase, deduplicate and sort the word list before filtering
    #[arg(short, long)]
    unique: bool,

    /// Scan the word list on all available threads
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn constraint_args(&self) -> ConstraintArgs {
        ConstraintArgs {
            word_length: self.length,
            required: self.require.clone(),
            excluded: self.exclude.clone(),
            known: self.known.clone(),
            policy: if self.strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::Lenient
            },
        }
    }

    fn filter_config(&self, constraint: Constraint) -> FilterConfig {
        let sources = self
            .dict
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let source = WordSource::new(path);
                match self.expect.get(i) {
                    Some(&count) => source.with_expected_count(count),
                    None => source,
                }
            })
            .collect();

        let mut config = FilterConfig::new(sources, constraint);
        config.unique = self.unique;
        config.parallel = self.parallel;
        config.collect_rejections = self.verbose;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let constraint = cli
        .constraint_args()
        .to_constraint()
        .context("Invalid arguments")?;

    if cli.verbose {
        print_constraint(&constraint);
    }

    let report = run_filter(cli.filter_config(constraint)).context("Unable to load the dictionary")?;

    if cli.verbose {
        print_statistics(&report);
    }

    match &cli.save {
        Some(path) => {
            save_results(path, &report.matches)
                .with_context(|| format!("Unable to write \"{}\"", path.display()))?;
            print_saved(path, report.matches.len());
        }
        None => print_matches(&report),
    }

    Ok(())
}
