//! Relocation of duplicates into the quarantine directory.
//!
//! # Overview
//!
//! For every ordered duplicate set, every member except the first (the
//! chronologically earliest) is renamed into `<root>/REMOVED/<basename>`.
//! Directory structure is flattened. Nothing is deleted.
//!
//! Name collisions inside the quarantine directory are not detected: the
//! host `rename` decides, which on Unix silently replaces the earlier file.
//! The first failing rename aborts the whole operation; files already moved
//! stay where they were moved.
//!
//! # Example
//!
//! ```no_run
//! use chronodupe::actions::relocate::relocate_duplicates;
//! use chronodupe::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let root = Path::new("/photos");
//! let (groups, _) = DuplicateFinder::new().find_duplicates(root).unwrap();
//! let result = relocate_duplicates(root, &groups, "REMOVED").unwrap();
//! println!("moved {} files", result.moved_count());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::ChecksumGroup;

/// Default name of the quarantine directory under the scanned root.
pub const QUARANTINE_DIR_NAME: &str = "REMOVED";

/// Error type for relocation operations.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// The quarantine directory could not be created.
    #[error("cannot create quarantine directory {path}: {source}")]
    CreateQuarantine {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path has no file name component to keep.
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),

    /// Renaming a duplicate into quarantine failed.
    #[error("cannot move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateQuarantine { path, .. } | Self::NoFileName(path) => path,
            Self::Rename { from, .. } => from,
        }
    }
}

/// A single completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// Original location.
    pub from: PathBuf,
    /// Location inside the quarantine directory.
    pub to: PathBuf,
}

/// Results of relocating all duplicate sets.
#[derive(Debug, Clone, Default)]
pub struct RelocateResult {
    /// Quarantine directory used.
    pub quarantine_dir: PathBuf,
    /// Completed moves, in order.
    pub moved: Vec<Relocation>,
}

impl RelocateResult {
    /// Number of files moved.
    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    /// Get a summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Moved {} duplicate(s) to {}",
            self.moved.len(),
            self.quarantine_dir.display()
        )
    }
}

/// Create `<root>/<name>` if it does not exist yet.
///
/// An existing entry of that name is accepted as is.
///
/// # Errors
///
/// Returns [`RelocateError::CreateQuarantine`] for any failure other than
/// the entry already existing.
pub fn ensure_quarantine_dir(root: &Path, name: &str) -> Result<PathBuf, RelocateError> {
    let dir = root.join(name);
    match fs::create_dir(&dir) {
        Ok(()) => {
            log::debug!("Created quarantine directory {}", dir.display());
            Ok(dir)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(dir),
        Err(source) => Err(RelocateError::CreateQuarantine { path: dir, source }),
    }
}

/// Destination of `path` inside `quarantine_dir`.
///
/// # Errors
///
/// Returns [`RelocateError::NoFileName`] if `path` has no file name.
pub fn quarantine_target(quarantine_dir: &Path, path: &Path) -> Result<PathBuf, RelocateError> {
    path.file_name()
        .map(|name| quarantine_dir.join(name))
        .ok_or_else(|| RelocateError::NoFileName(path.to_path_buf()))
}

/// Move every member but the first of each group into the quarantine
/// directory under `root`, creating it if needed.
///
/// # Errors
///
/// Returns [`RelocateError`] on directory creation failure or on the first
/// failed rename.
pub fn relocate_duplicates(
    root: &Path,
    groups: &[ChecksumGroup],
    quarantine_name: &str,
) -> Result<RelocateResult, RelocateError> {
    let quarantine_dir = ensure_quarantine_dir(root, quarantine_name)?;
    let mut result = RelocateResult {
        quarantine_dir,
        moved: Vec::new(),
    };

    for group in groups.iter().filter(|g| g.has_duplicates()) {
        for from in group.paths.iter().skip(1) {
            let to = quarantine_target(&result.quarantine_dir, from)?;
            if to.exists() {
                log::warn!("Overwriting {} in quarantine", to.display());
            }
            fs::rename(from, &to).map_err(|source| RelocateError::Rename {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
            log::trace!("Moved {} -> {}", from.display(), to.display());
            result.moved.push(Relocation {
                from: from.clone(),
                to,
            });
        }
    }

    log::debug!("{}", result.summary());
    Ok(result)
}
