//! CRC-32 file checksums over a fixed custom polynomial.
//!
//! # Overview
//!
//! Files are grouped by a 32-bit checksum of their full content. The
//! polynomial is deliberately not the IEEE one: checksums are only
//! comparable with other tools that build their table from the same
//! constant, [`CHECKSUM_POLYNOMIAL`].
//!
//! The algorithm is the reflected (LSB-first) table-driven CRC-32 with an
//! all-ones initial value and final XOR. Collisions between different
//! contents are possible and simply merge those files into one group.
//!
//! # Example
//!
//! ```
//! use chronodupe::scanner::checksum_bytes;
//!
//! assert_eq!(checksum_bytes(b""), 0);
//! assert_eq!(format!("{:08x}", checksum_bytes(b"123456789")), "a9cc8179");
//! ```

use std::fs;
use std::path::Path;

use super::HashError;

/// 32-bit content checksum.
pub type Checksum = u32;

/// Reflected CRC-32 polynomial used to build the lookup table.
pub const CHECKSUM_POLYNOMIAL: u32 = 0xD582_8281;

/// Lookup table for [`CHECKSUM_POLYNOMIAL`], built at compile time.
static TABLE: [u32; 256] = make_table(CHECKSUM_POLYNOMIAL);

const fn make_table(poly: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ poly
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the checksum of an in-memory byte slice.
#[must_use]
pub fn checksum_bytes(data: &[u8]) -> Checksum {
    let crc = data.iter().fold(!0u32, |crc, &byte| {
        TABLE[usize::from(crc as u8 ^ byte)] ^ (crc >> 8)
    });
    !crc
}

/// Read the whole file at `path` and compute its checksum.
///
/// The content is dropped as soon as the checksum is known.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be read.
pub fn checksum_file(path: &Path) -> Result<Checksum, HashError> {
    use std::io::ErrorKind;

    let data = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let checksum = checksum_bytes(&data);
    log::trace!("{checksum:08x} {} ({} bytes)", path.display(), data.len());
    Ok(checksum)
}
