//! Interactive confirmation before relocating duplicates.
//!
//! The prompt is written to an output stream and a single line is read from
//! an input source. Only the exact line `Y\n` confirms; anything else,
//! including end of input, declines.
//!
//! Both streams are injected so tests can pass fixed input.
//!
//! ```
//! use chronodupe::actions::confirm::confirm_removal;
//!
//! let mut prompt = Vec::new();
//! assert!(confirm_removal(&b"Y\n"[..], &mut prompt, 2, "REMOVED").unwrap());
//! assert!(!confirm_removal(&b"y\n"[..], &mut prompt, 2, "REMOVED").unwrap());
//! ```

use std::io::{self, BufRead, Write};

/// The only accepted confirmation line.
pub const CONFIRMATION_LINE: &str = "Y\n";

/// Build the confirmation prompt for `count` files.
#[must_use]
pub fn removal_prompt(count: usize, quarantine_name: &str) -> String {
    format!("\n\nAre you sure you want to move {count} duplicates to the directory \"{quarantine_name}\" [Y/N] ")
}

/// Check a raw input line, terminator included.
#[must_use]
pub fn is_confirmed(line: &str) -> bool {
    line == CONFIRMATION_LINE
}

/// Prompt on `output` and read one line of `input`.
///
/// Returns `true` only if the line is exactly `Y\n`.
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be written or input cannot be
/// read.
pub fn confirm_removal<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    count: usize,
    quarantine_name: &str,
) -> io::Result<bool> {
    output.write_all(removal_prompt(count, quarantine_name).as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let confirmed = is_confirmed(&line);
    log::debug!("Removal confirmation input {:?}: confirmed={}", line, confirmed);
    Ok(confirmed)
}
