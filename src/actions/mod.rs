//! File actions module.
//!
//! This module provides the optional cleanup step:
//! - Interactive confirmation against an injectable input source
//! - Relocation of duplicates into a quarantine directory
//!
//! # Relocation
//!
//! Files are never deleted. Every duplicate except the chronologically
//! first of its set is renamed into `REMOVED/` under the scanned root,
//! keeping only its base name.
//!
//! ```no_run
//! use chronodupe::actions::{confirm_removal, relocate_duplicates, QUARANTINE_DIR_NAME};
//! use chronodupe::duplicates::DuplicateFinder;
//! use std::io;
//! use std::path::Path;
//!
//! let root = Path::new("/photos");
//! let (groups, summary) = DuplicateFinder::new().find_duplicates(root).unwrap();
//!
//! let stdin = io::stdin();
//! if confirm_removal(stdin.lock(), io::stdout(), summary.removable, QUARANTINE_DIR_NAME).unwrap() {
//!     relocate_duplicates(root, &groups, QUARANTINE_DIR_NAME).unwrap();
//! }
//! ```

pub mod confirm;
pub mod relocate;

// Re-export commonly used types
pub use confirm::{confirm_removal, is_confirmed, removal_prompt, CONFIRMATION_LINE};
pub use relocate::{
    ensure_quarantine_dir, quarantine_target, relocate_duplicates, RelocateError,
    RelocateResult, Relocation, QUARANTINE_DIR_NAME,
};
