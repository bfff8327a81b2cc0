//! File I/O for NAIL files
//!
//! Loading memory-maps the file and decodes straight from the mapped bytes;
//! the mapping is released before the call returns. Saving writes through a
//! buffered writer and syncs the file.
//!
//! Two calling styles are provided:
//!
//! - [`load`] / [`save`] return a `Result` and should be preferred.
//! - [`read_status`] / [`write_ignoring_errors`] keep the legacy shape where a
//!   read reports `-1` on failure and a write never reports anything.

use crate::decode::{decode, DecodeOptions, Decoded};
use crate::encode::{encode, encode_into, EncodeReport};
use crate::error::{NailError, Result};
use crate::point::Point2D;
use memmap2::Mmap;

/// Decode NAIL bytes received from somewhere other than a file
pub use crate::decode::decode_points as from_bytes;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Status returned by [`read_status`] when the read failed
pub const READ_FAILED: i64 = -1;

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(NailError::EmptyPath);
    }
    Ok(())
}

/// Load and decode a NAIL file
///
/// # Example
///
/// ```no_run
/// use nailfile::decode::DecodeOptions;
/// use nailfile::serialization::load;
///
/// let decoded = load("pins.nail", &DecodeOptions::default())?;
/// println!("read {} nails", decoded.points.len());
/// # Ok::<(), nailfile::NailError>(())
/// ```
///
/// # Errors
///
/// - [`NailError::EmptyPath`] for an empty path
/// - [`NailError::Io`] if the file cannot be opened or mapped
/// - any error from [`decode`]
pub fn load<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Decoded> {
    let path = path.as_ref();
    check_path(path)?;

    let file = File::open(path)?;
    let len = file.metadata()?.len();
    tracing::debug!(path = %path.display(), len, "loading NAIL file");

    // Zero-length files cannot be mapped on every platform
    if len == 0 {
        return decode(&[], options);
    }

    // SAFETY: the mapping is read-only and dropped before returning; nothing
    // borrowed from it outlives this call.
    let mmap = unsafe { Mmap::map(&file)? };
    decode(&mmap[..], options)
}

/// Encode `points` and write them to `path`, replacing any existing file
///
/// # Example
///
/// ```no_run
/// use nailfile::serialization::save;
/// use nailfile::Point2D;
///
/// let report = save("pins.nail", &[Point2D::new(0.05, 0.1)])?;
/// assert_eq!(report.bytes_written, 8);
/// # Ok::<(), nailfile::NailError>(())
/// ```
pub fn save<P: AsRef<Path>>(path: P, points: &[Point2D]) -> Result<EncodeReport> {
    let path = path.as_ref();
    check_path(path)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let report = encode_into(&mut writer, points)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    tracing::debug!(
        path = %path.display(),
        points = report.points_written,
        bytes = report.bytes_written,
        "wrote NAIL file"
    );
    Ok(report)
}

/// Encode points to NAIL bytes
pub fn to_bytes(points: &[Point2D]) -> Vec<u8> {
    encode(points).0
}

/// Read a file and return `(status, points)`
///
/// On success the status is the legacy `48 * entry_blocks + 4` value. Any
/// failure, including an empty path, yields [`READ_FAILED`] and no points.
pub fn read_status<P: AsRef<Path>>(path: P) -> (i64, Vec<Point2D>) {
    let path = path.as_ref();
    match load(path, &DecodeOptions::default()) {
        Ok(decoded) => (decoded.status as i64, decoded.points),
        Err(e) => {
            tracing::warn!(path = %path.display(), "read failed: {}", e);
            (READ_FAILED, Vec::new())
        }
    }
}

/// Write a file, discarding any failure
///
/// An empty path writes nothing. Use [`save`] to find out whether the write
/// worked.
pub fn write_ignoring_errors<P: AsRef<Path>>(path: P, points: &[Point2D]) {
    let path = path.as_ref();
    if let Err(e) = save(path, points) {
        tracing::warn!(path = %path.display(), "write failed: {}", e);
    }
}

/// Encode `points` into any writer, such as a pipe or socket
pub fn write_to<W: Write>(writer: W, points: &[Point2D]) -> Result<EncodeReport> {
    let mut writer = BufWriter::new(writer);
    let report = encode_into(&mut writer, points)?;
    writer.flush()?;
    Ok(report)
}
