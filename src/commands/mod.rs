//! Command implementations

pub mod args;
pub mod filter;
pub mod save;

pub use args::{ArgumentError, ConstraintArgs, ParsePolicy};
pub use filter::{FilterConfig, FilterReport, RejectionCounts, filter_dictionary, run_filter};
pub use save::{DEFAULT_RESULTS_FILE, save_results};
