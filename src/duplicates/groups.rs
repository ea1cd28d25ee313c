//! Checksum grouping of discovered files.
//!
//! # Overview
//!
//! Every file visited by the walker lands in exactly one [`ChecksumGroup`],
//! keyed by its content checksum. Paths keep their discovery order within a
//! group. A group with two or more members is a duplicate set.
//!
//! The [`ChecksumIndex`] is a plain value: it is built once per run, owned by
//! the caller and read-only afterwards. Groups iterate in ascending checksum
//! order so reports are reproducible.
//!
//! # Example
//!
//! ```
//! use chronodupe::duplicates::ChecksumIndex;
//! use std::path::PathBuf;
//!
//! let mut index = ChecksumIndex::new();
//! index.insert(0xdc55_8ec5, PathBuf::from("/a.txt"));
//! index.insert(0xdc55_8ec5, PathBuf::from("/b.txt"));
//! index.insert(0x248c_a0a3, PathBuf::from("/c.txt"));
//!
//! assert_eq!(index.file_count(), 3);
//! assert_eq!(index.duplicate_sets().count(), 1);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::scanner::{checksum_file, Checksum, HashError};

/// Files sharing one checksum value, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumGroup {
    /// Checksum shared by all files in this group
    pub checksum: Checksum,
    /// Files with this checksum
    pub paths: Vec<PathBuf>,
}

impl ChecksumGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new(checksum: Checksum) -> Self {
        Self {
            checksum,
            paths: Vec::new(),
        }
    }

    /// Create a group with initial paths.
    #[must_use]
    pub fn with_paths(checksum: Checksum, paths: Vec<PathBuf>) -> Self {
        Self { checksum, paths }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check if this group is a duplicate set (2+ files).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.paths.len() > 1
    }

    /// Number of files that would be relocated (all but the first).
    #[must_use]
    pub fn removable_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Checksum as 8 lowercase hex digits.
    #[must_use]
    pub fn checksum_hex(&self) -> String {
        format!("{:08x}", self.checksum)
    }
}

/// Mapping from checksum to group, covering every indexed file.
#[derive(Debug, Clone, Default)]
pub struct ChecksumIndex {
    groups: BTreeMap<Checksum, ChecksumGroup>,
    file_count: usize,
}

impl ChecksumIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checksum every path in order and index it.
    ///
    /// Stops at the first unreadable file; no partial index is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if any file cannot be read.
    pub fn build<I, P>(paths: I) -> Result<Self, HashError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::build_with(paths, checksum_file)
    }

    /// Index every path using a caller-supplied checksum function.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `checksum`.
    pub fn build_with<I, P, F, E>(paths: I, mut checksum: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&Path) -> Result<Checksum, E>,
    {
        let mut index = Self::new();
        for path in paths {
            let path = path.as_ref();
            let value = checksum(path)?;
            index.insert(value, path.to_path_buf());
        }
        log::debug!(
            "Indexed {} files into {} checksum groups",
            index.file_count(),
            index.len()
        );
        Ok(index)
    }

    /// Append `path` to the group for `checksum`.
    pub fn insert(&mut self, checksum: Checksum, path: PathBuf) {
        self.groups
            .entry(checksum)
            .or_insert_with(|| ChecksumGroup::new(checksum))
            .paths
            .push(path);
        self.file_count += 1;
    }

    /// Group for a checksum, if any file produced it.
    #[must_use]
    pub fn get(&self, checksum: Checksum) -> Option<&ChecksumGroup> {
        self.groups.get(&checksum)
    }

    /// Number of distinct checksums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no file has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of indexed files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// All groups in ascending checksum order.
    pub fn groups(&self) -> impl Iterator<Item = &ChecksumGroup> {
        self.groups.values()
    }

    /// Groups with two or more members, in ascending checksum order.
    pub fn duplicate_sets(&self) -> impl Iterator<Item = &ChecksumGroup> {
        self.groups().filter(|g| g.has_duplicates())
    }

    /// Consume the index, keeping only duplicate sets.
    #[must_use]
    pub fn into_duplicate_sets(self) -> Vec<ChecksumGroup> {
        self.groups
            .into_values()
            .filter(ChecksumGroup::has_duplicates)
            .collect()
    }
}
