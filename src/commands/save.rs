//! Results file output

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File name used by `--save` when no path is given
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Write matches one per line, replacing any existing file
///
/// The output has the same shape as a dictionary, so it can be fed back in
/// with `--dict` to narrow the list further.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_results<P: AsRef<Path>>(path: P, words: &[String]) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, words)?;
    writer.flush()?;

    log::debug!("Wrote {} words to {}", words.len(), path.as_ref().display());
    Ok(())
}

/// Write matches one per line to any writer
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_results<W: Write>(writer: &mut W, words: &[String]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{word}")?;
    }
    Ok(())
}
