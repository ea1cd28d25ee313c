//! Semicolon-separated duplicate report.
//!
//! One line is written per member of every ordered duplicate set:
//!
//! ```text
//! <checksum:8 lowercase hex>;<rank, 1-based>;<path>
//! ```
//!
//! Lines of one set are contiguous and ranked in chronological order. Sets
//! appear in the order given, which [`crate::duplicates`] makes ascending by
//! checksum.
//!
//! # Example
//!
//! ```
//! use chronodupe::duplicates::ChecksumGroup;
//! use chronodupe::output::report::ReportOutput;
//! use std::path::PathBuf;
//!
//! let groups = vec![ChecksumGroup::with_paths(
//!     0xdc55_8ec5,
//!     vec![PathBuf::from("/r/a"), PathBuf::from("/r/b")],
//! )];
//!
//! let mut out = Vec::new();
//! let removable = ReportOutput::new(&groups).write_to(&mut out).unwrap();
//!
//! assert_eq!(removable, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "dc558ec5;1;/r/a\ndc558ec5;2;/r/b\n");
//! ```

use std::io;
use std::path::Path;

use crate::duplicates::ChecksumGroup;

/// Report formatter over ordered duplicate sets.
pub struct ReportOutput<'a> {
    groups: &'a [ChecksumGroup],
}

impl<'a> ReportOutput<'a> {
    /// Create a new report formatter.
    #[must_use]
    pub fn new(groups: &'a [ChecksumGroup]) -> Self {
        Self { groups }
    }

    /// Number of files that removal would relocate.
    #[must_use]
    pub fn removable_count(&self) -> usize {
        self.groups.iter().map(ChecksumGroup::removable_count).sum()
    }

    /// Write the report and return the removable count.
    ///
    /// Groups with fewer than two members are not reported.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<usize> {
        for group in self.groups.iter().filter(|g| g.has_duplicates()) {
            let checksum = group.checksum_hex();
            for (idx, path) in group.paths.iter().enumerate() {
                write!(writer, "{};{};", checksum, idx + 1)?;
                write_path(&mut writer, path)?;
                writer.write_all(b"\n")?;
            }
        }
        writer.flush()?;
        Ok(self.removable_count())
    }

    /// Render the report as a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Write `path` as stored on disk, without lossy UTF-8 conversion.
#[cfg(unix)]
fn write_path<W: io::Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: io::Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    write!(writer, "{}", path.display())
}
