//! Scanner module for directory traversal and file checksumming.
//!
//! This module provides functionality for:
//! - Deterministic recursive directory walking using walkdir
//! - Whole-file CRC-32 checksums over a fixed custom polynomial
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and regular-file discovery
//! - [`hasher`]: CRC-32 table and file checksumming
//!
//! # Example
//!
//! ```no_run
//! use chronodupe::scanner::{checksum_file, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."));
//! for path in walker.collect_files().unwrap() {
//!     let checksum = checksum_file(&path).unwrap();
//!     println!("{checksum:08x} {}", path.display());
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{checksum_bytes, checksum_file, Checksum, CHECKSUM_POLYNOMIAL};
pub use walker::Walker;

/// Errors that can occur during directory scanning.
///
/// Any of these aborts the whole run: a partial index is never produced.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while walking.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised for `path`.
    pub(crate) fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io {
                path,
                source: error,
            },
        }
    }
}

/// Errors that can occur while reading a file for checksumming.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
