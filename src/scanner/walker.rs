//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for enumerating every regular
//! file below a root directory. Traversal is single-threaded and entries of
//! each directory are visited in file-name order, so two walks of an
//! unchanged tree yield identical sequences.
//!
//! Symbolic links (to files or directories), special files and directories
//! themselves are never yielded.
//!
//! # Example
//!
//! ```no_run
//! use chronodupe::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Pictures"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::ScanError;

/// Directory walker for deterministic file discovery.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Root directory of this walker.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory tree, yielding paths of regular files.
    ///
    /// The iterator is lazy. Errors are yielded in place; callers that need
    /// the complete set should use [`Walker::collect_files`], which stops at
    /// the first error.
    ///
    /// A root that is not a directory yields a single
    /// [`ScanError::NotADirectory`].
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();

                    if entry.depth() == 0 {
                        if file_type.is_dir() {
                            return None;
                        }
                        return Some(Err(ScanError::NotADirectory(self.root.clone())));
                    }

                    if file_type.is_file() {
                        Some(Ok(entry.into_path()))
                    } else {
                        if file_type.is_symlink() {
                            log::trace!("Skipping symlink: {}", entry.path().display());
                        }
                        None
                    }
                }
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            })
    }

    /// Walk the whole tree and return every regular file, failing on the
    /// first error.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the root is missing, is not a directory, or
    /// any directory below it cannot be read.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let files = self.walk().collect::<Result<Vec<_>, _>>()?;
        log::debug!("Walked {}: {} files", self.root.display(), files.len());
        Ok(files)
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        log::debug!("Walker error for {}: {}", path.display(), error);
        ScanError::from_io(path, io::Error::from(error))
    }
}
