//! Command-line interface definitions for chronodupe.
//!
//! The interface is deliberately small: one required root directory and an
//! optional action word. Only the exact word `remove` enables the
//! interactive relocation step; any other action word is ignored.
//!
//! # Example
//!
//! ```bash
//! # Report duplicates
//! chronodupe ~/Pictures
//!
//! # Report, then offer to move duplicates into ~/Pictures/REMOVED
//! chronodupe ~/Pictures remove
//!
//! # Debug logging on stderr
//! chronodupe -v ~/Pictures
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::actions::QUARANTINE_DIR_NAME;

/// Action word that enables relocation.
pub const REMOVE_ACTION: &str = "remove";

/// Checksum-based duplicate finder with chronological ordering.
///
/// Groups files under ROOT by content checksum, orders each duplicate set by
/// the `YYYY-MM-DD_hh.mm.ss` timestamp at the start of the file names, and
/// prints `checksum;rank;path` lines.
#[derive(Debug, Parser)]
#[command(name = "chronodupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Disable colored log output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Root directory to scan
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Pass `remove` to move duplicates into ROOT/REMOVED after confirmation
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    pub action: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Whether the relocation step was requested.
    #[must_use]
    pub fn remove_requested(&self) -> bool {
        self.action.as_deref() == Some(REMOVE_ACTION)
    }

    /// Build the run configuration.
    #[must_use]
    pub fn to_config(&self) -> RunConfig {
        if let Some(action) = self.action.as_deref().filter(|a| *a != REMOVE_ACTION) {
            log::debug!("Ignoring unknown action {:?}", action);
        }
        if !self.ignored.is_empty() {
            log::debug!("Ignoring extra arguments {:?}", self.ignored);
        }
        RunConfig::new(self.root.clone()).with_remove(self.remove_requested())
    }
}

/// Resolved configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Offer relocation after the report
    pub remove: bool,
    /// Name of the quarantine directory under `root`
    pub quarantine_name: String,
}

impl RunConfig {
    /// Report-only configuration for `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            remove: false,
            quarantine_name: QUARANTINE_DIR_NAME.to_string(),
        }
    }

    /// Enable or disable the relocation step.
    #[must_use]
    pub fn with_remove(mut self, remove: bool) -> Self {
        self.remove = remove;
        self
    }

    /// Override the quarantine directory name.
    #[must_use]
    pub fn with_quarantine_name(mut self, name: impl Into<String>) -> Self {
        self.quarantine_name = name.into();
        self
    }

    /// Full path of the quarantine directory.
    #[must_use]
    pub fn quarantine_dir(&self) -> PathBuf {
        self.root.join(&self.quarantine_name)
    }
}
