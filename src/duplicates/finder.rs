//! Duplicate finder pipeline.
//!
//! # Overview
//!
//! This module orchestrates the detection pipeline:
//! 1. **Walk**: enumerate every regular file under the root
//! 2. **Index**: checksum each file and group paths by checksum
//! 3. **Order**: sort every duplicate set chronologically, skipping sets
//!    whose file names carry no valid timestamp
//!
//! Walking and indexing are fail-fast: any unreadable directory or file
//! aborts with a [`FinderError`] and no partial result. Ordering failures
//! only drop the affected set.
//!
//! # Example
//!
//! ```no_run
//! use chronodupe::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new();
//! let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! println!("{} duplicate sets, {} removable files", groups.len(), summary.removable);
//! ```

use std::path::Path;

use thiserror::Error;

use super::ordering::{order_by, timestamp_from_path, OrderError};
use super::{ChecksumGroup, ChecksumIndex};
use crate::scanner::{Checksum, HashError, ScanError, Walker};

/// Errors that abort duplicate detection.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The directory walk failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file could not be read for checksumming.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// A duplicate set dropped because it could not be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    /// Checksum of the dropped set
    pub checksum: Checksum,
    /// Number of files in the dropped set
    pub size: usize,
    /// Why ordering failed
    pub error: OrderError,
}

/// Summary of a detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of regular files indexed
    pub total_files: usize,
    /// Number of distinct checksums
    pub checksum_groups: usize,
    /// Duplicate sets that were ordered and kept
    pub ordered_sets: usize,
    /// Duplicate sets dropped for ordering errors
    pub skipped: Vec<SkippedGroup>,
    /// Files that would be relocated (all but the first of each kept set)
    pub removable: usize,
}

impl ScanSummary {
    /// Total duplicate sets found, kept or not.
    #[must_use]
    pub fn duplicate_sets(&self) -> usize {
        self.ordered_sets + self.skipped.len()
    }
}

/// Order every duplicate set of `index` with a caller-supplied key.
///
/// Sets are visited in ascending checksum order. A set whose key cannot be
/// derived for any member is logged and returned in the skipped list.
pub fn order_duplicate_sets_by<K, F>(
    index: &ChecksumIndex,
    mut key: F,
) -> (Vec<ChecksumGroup>, Vec<SkippedGroup>)
where
    K: Ord,
    F: FnMut(&Path) -> Result<K, OrderError>,
{
    let mut ordered = Vec::new();
    let mut skipped = Vec::new();

    for group in index.duplicate_sets() {
        match order_by(group, &mut key) {
            Ok(sorted) => ordered.push(sorted),
            Err(error) => {
                log::warn!(
                    "Skipping duplicate set {} ({} files): {}",
                    group.checksum_hex(),
                    group.len(),
                    error
                );
                skipped.push(SkippedGroup {
                    checksum: group.checksum,
                    size: group.len(),
                    error,
                });
            }
        }
    }

    (ordered, skipped)
}

/// Order every duplicate set of `index` by filename timestamp.
pub fn order_duplicate_sets(index: &ChecksumIndex) -> (Vec<ChecksumGroup>, Vec<SkippedGroup>) {
    order_duplicate_sets_by(index, timestamp_from_path)
}

/// Walk, index and order duplicates under a root directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateFinder;

impl DuplicateFinder {
    /// Create a finder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the checksum index for every regular file under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] on the first walk or read failure.
    pub fn build_index(&self, root: &Path) -> Result<ChecksumIndex, FinderError> {
        log::debug!("Scanning {}", root.display());
        let files = Walker::new(root).collect_files()?;
        let index = ChecksumIndex::build(&files)?;
        Ok(index)
    }

    /// Find and chronologically order all duplicate sets under `root`.
    ///
    /// Returned groups are in ascending checksum order.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] on the first walk or read failure.
    pub fn find_duplicates(
        &self,
        root: &Path,
    ) -> Result<(Vec<ChecksumGroup>, ScanSummary), FinderError> {
        let index = self.build_index(root)?;
        let (groups, skipped) = order_duplicate_sets(&index);

        let summary = ScanSummary {
            total_files: index.file_count(),
            checksum_groups: index.len(),
            ordered_sets: groups.len(),
            skipped,
            removable: groups.iter().map(ChecksumGroup::removable_count).sum(),
        };
        log::debug!(
            "{} files, {} duplicate sets ({} skipped), {} removable",
            summary.total_files,
            summary.duplicate_sets(),
            summary.skipped.len(),
            summary.removable
        );

        Ok((groups, summary))
    }
}
