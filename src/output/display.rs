//! Display functions for command results

use super::formatters::{format_known, format_letters, solutions_heading};
use crate::commands::FilterReport;
use crate::core::{Constraint, pattern};
use colored::Colorize;
use std::path::Path;

/// Print how the arguments were interpreted
pub fn print_constraint(constraint: &Constraint) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "CONSTRAINT".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Word length:  {}", constraint.word_length());
    println!(
        "   Required:     {}",
        format_letters(constraint.required()).green()
    );
    println!(
        "   Excluded:     {}",
        format_letters(constraint.excluded()).red()
    );
    println!(
        "   Known:        {}",
        format_known(constraint.known()).bright_yellow().bold()
    );

    println!("\nRegex letter group for unknown positions:");
    println!("   {}", pattern::letter_group(constraint.excluded()));
    println!("Regex pattern to apply to each word:");
    println!("   {}\n", pattern::render(constraint));
}

/// Print dictionary statistics for a finished run
pub fn print_statistics(report: &FilterReport) {
    println!("📖 Dictionary: {} words", report.dictionary_size);

    if let Some(counts) = report.rejections {
        println!("   Wrong length:      {}", counts.length);
        println!("   Excluded letter:   {}", counts.excluded);
        println!("   Missing required:  {}", counts.missing_required);
        println!("   Wrong known slot:  {}", counts.known_mismatch);
    }
    println!();
}

/// Print the count and the list of matches
pub fn print_matches(report: &FilterReport) {
    let heading = solutions_heading(report.matches.len());
    if report.matches.is_empty() {
        println!("{}", heading.red().bold());
        return;
    }

    println!("{}", heading.green().bold());
    for word in &report.matches {
        println!("{word}");
    }
}

/// Print a confirmation after saving matches to a file
pub fn print_saved(path: &Path, count: usize) {
    let target = path.display().to_string();
    if count == 0 {
        println!(
            "{} Wrote an empty list to {}",
            solutions_heading(0).red().bold(),
            target.bright_yellow()
        );
    } else {
        println!(
            "{} written to {}",
            solutions_heading(count).trim_end_matches(':').green().bold(),
            target.bright_yellow()
        );
    }
}
