//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Checksum grouping of discovered files
//! - Chronological ordering of duplicate sets by filename timestamp
//! - The walk, index and order pipeline

pub mod finder;
pub mod groups;
pub mod ordering;

pub use finder::{
    order_duplicate_sets, order_duplicate_sets_by, DuplicateFinder, FinderError, ScanSummary,
    SkippedGroup,
};
pub use groups::{ChecksumGroup, ChecksumIndex};
pub use ordering::{
    order_by, order_chronologically, timestamp_from_path, OrderError, TIMESTAMP_FORMAT,
    TIMESTAMP_PREFIX_LEN,
};
