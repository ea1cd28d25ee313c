//! chronodupe - Checksum-based duplicate file finder
//!
//! Scans a directory tree, groups files by a CRC-32 content checksum, orders
//! every duplicate set by the timestamp encoded at the start of the file
//! names, and prints a deterministic report. Optionally, after interactive
//! confirmation, all but the earliest file of each set are moved into a
//! `REMOVED` directory under the scanned root.
//!
//! The pipeline is strictly forward: walk, index, order, report, relocate.
//! All state is owned by [`run`]; nothing is kept between invocations.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::actions::{confirm_removal, relocate_duplicates, RelocateResult};
use crate::cli::{Cli, RunConfig};
use crate::duplicates::{DuplicateFinder, ScanSummary};
use crate::error::ExitCode;
use crate::output::ReportOutput;

/// What a completed run did.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Detection summary
    pub summary: ScanSummary,
    /// Files that removal would relocate
    pub removable: usize,
    /// Present if removal was confirmed and carried out
    pub relocated: Option<RelocateResult>,
}

impl RunOutcome {
    /// Whether the relocation step ran.
    #[must_use]
    pub fn relocation_performed(&self) -> bool {
        self.relocated.is_some()
    }
}

/// Run the full pipeline with explicit input and output streams.
///
/// The report and the confirmation prompt are written to `output`; the
/// confirmation line is read from `input` only when `config.remove` is set.
///
/// # Errors
///
/// Returns an error for every fatal condition: unreadable root, directory
/// or file, quarantine directory creation failure, or rename failure.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: R, mut output: W) -> Result<RunOutcome> {
    let finder = DuplicateFinder::new();
    let (groups, summary) = finder
        .find_duplicates(&config.root)
        .with_context(|| format!("Failed to scan {}", config.root.display()))?;

    let removable = ReportOutput::new(&groups)
        .write_to(&mut output)
        .context("Failed to write report")?;

    let mut outcome = RunOutcome {
        summary,
        removable,
        relocated: None,
    };

    if !config.remove {
        return Ok(outcome);
    }

    let confirmed = confirm_removal(input, &mut output, removable, &config.quarantine_name)
        .context("Failed to read confirmation")?;
    if !confirmed {
        log::info!("Removal not confirmed, no files moved");
        return Ok(outcome);
    }

    let result = relocate_duplicates(&config.root, &groups, &config.quarantine_name)
        .context("Failed to move duplicates")?;
    log::info!("{}", result.summary());
    outcome.relocated = Some(result);

    Ok(outcome)
}

/// Run the application for parsed CLI arguments, using stdin and stdout.
///
/// # Errors
///
/// Returns an error for any fatal condition, see [`run`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = cli.to_config();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock())?;

    Ok(ExitCode::Success)
}
