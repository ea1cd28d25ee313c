//! Chronological ordering of duplicate sets.
//!
//! # Overview
//!
//! Files are expected to carry their creation time as a fixed-width prefix
//! of the base name, `YYYY-MM-DD_hh.mm.ss` (19 bytes), for example
//! `2024-01-01_10.00.00_holiday.jpg`. A duplicate set is sorted ascending by
//! that time; files with equal times keep their discovery order.
//!
//! If any member of a set has no valid prefix the whole set fails to order.
//! Callers skip such sets entirely, both from the report and from removal.
//!
//! Ordering is independent from indexing: [`order_by`] accepts any key
//! function, [`order_chronologically`] plugs in [`timestamp_from_path`].

use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use super::ChecksumGroup;

/// chrono format of the filename timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H.%M.%S";

/// Length in bytes of the filename timestamp prefix.
pub const TIMESTAMP_PREFIX_LEN: usize = 19;

/// Shape of the prefix: `d` is an ASCII digit, anything else is literal.
const TIMESTAMP_SHAPE: &[u8; TIMESTAMP_PREFIX_LEN] = b"dddd-dd-dd_dd.dd.dd";

/// Errors deriving an ordering key from a file name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The file name is shorter than the timestamp prefix.
    #[error("path too short to hold a timestamp: {filename}")]
    PathTooShort {
        /// Base file name
        filename: String,
    },

    /// The prefix is not laid out as `dddd-dd-dd_dd.dd.dd`.
    #[error("timestamp prefix does not match YYYY-MM-DD_hh.mm.ss: {filename}")]
    InvalidFilename {
        /// Base file name
        filename: String,
    },

    /// The prefix has the right layout but is not a valid date and time.
    #[error("cannot parse timestamp from {filename}: {source}")]
    TimestampParse {
        /// Base file name
        filename: String,
        /// Parser diagnostic
        #[source]
        source: chrono::ParseError,
    },

    /// The seconds field is `60`.
    #[error("second out of range in timestamp: {filename}")]
    SecondOutOfRange {
        /// Base file name
        filename: String,
    },
}

impl OrderError {
    /// File name the error refers to.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::PathTooShort { filename }
            | Self::InvalidFilename { filename }
            | Self::TimestampParse { filename, .. }
            | Self::SecondOutOfRange { filename } => filename,
        }
    }
}

/// Extract the creation time encoded in the base name of `path`.
///
/// Lengths are counted in raw bytes, so names that are not valid UTF-8 are
/// measured as stored on disk.
///
/// # Errors
///
/// - [`OrderError::PathTooShort`] if the base name has fewer than 19 bytes
/// - [`OrderError::InvalidFilename`] if the first 19 bytes are not laid out
///   as `dddd-dd-dd_dd.dd.dd`
/// - [`OrderError::TimestampParse`] if they are, but do not form a valid
///   date and time
/// - [`OrderError::SecondOutOfRange`] for a seconds field of `60`
///
/// # Example
///
/// ```
/// use chronodupe::duplicates::timestamp_from_path;
/// use std::path::Path;
///
/// let t = timestamp_from_path(Path::new("/photos/2024-01-02_10.30.00_b.jpg")).unwrap();
/// assert_eq!(t.to_string(), "2024-01-02 10:30:00");
///
/// assert!(timestamp_from_path(Path::new("/photos/IMG_0001.jpg")).is_err());
/// ```
pub fn timestamp_from_path(path: &Path) -> Result<NaiveDateTime, OrderError> {
    let name = path.file_name().unwrap_or_default();
    let bytes = name.as_encoded_bytes();
    let filename = || name.to_string_lossy().into_owned();

    if bytes.len() < TIMESTAMP_PREFIX_LEN {
        return Err(OrderError::PathTooShort {
            filename: filename(),
        });
    }

    let prefix = &bytes[..TIMESTAMP_PREFIX_LEN];
    let shape_ok = prefix
        .iter()
        .zip(TIMESTAMP_SHAPE)
        .all(|(&byte, &expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            literal => byte == literal,
        });
    let invalid = || OrderError::InvalidFilename {
        filename: filename(),
    };
    if !shape_ok {
        return Err(invalid());
    }
    // Only ASCII passes the shape check
    let prefix = std::str::from_utf8(prefix).map_err(|_| invalid())?;

    let time = NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).map_err(|source| {
        OrderError::TimestampParse {
            filename: filename(),
            source,
        }
    })?;

    // chrono reads `60` as a leap second and stores it past 1e9 nanoseconds
    if time.nanosecond() >= 1_000_000_000 {
        return Err(OrderError::SecondOutOfRange {
            filename: filename(),
        });
    }

    Ok(time)
}

/// Sort a group ascending by the key `key` derives from each path.
///
/// Keys are computed for every member before sorting and the first failure
/// aborts. The sort is stable, so equal keys keep discovery order.
///
/// # Errors
///
/// Returns the first error produced by `key`.
pub fn order_by<K, F>(group: &ChecksumGroup, mut key: F) -> Result<ChecksumGroup, OrderError>
where
    K: Ord,
    F: FnMut(&Path) -> Result<K, OrderError>,
{
    let mut keyed = group
        .paths
        .iter()
        .map(|path| key(path).map(|k| (k, path.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(ChecksumGroup::with_paths(
        group.checksum,
        keyed.into_iter().map(|(_, path)| path).collect(),
    ))
}

/// Sort a group by the timestamps encoded in its file names.
///
/// # Errors
///
/// Returns the first [`OrderError`] raised by any member.
pub fn order_chronologically(group: &ChecksumGroup) -> Result<ChecksumGroup, OrderError> {
    order_by(group, timestamp_from_path)
}
