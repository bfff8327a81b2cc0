//! NAIL encoding
//!
//! Writes the identifier followed by one fixed-point (X, Y) pair per point,
//! in input order, with no grouping, padding or footer.
//!
//! Coordinates whose scaled value does not fit in 16 bits are narrowed like a
//! fixed-width integer cast rather than rejected. [`EncodeReport`] counts them
//! so callers can notice.
//!
//! # Example
//!
//! ```rust
//! use nailfile::encode::encode;
//! use nailfile::Point2D;
//!
//! let (bytes, report) = encode(&[Point2D::new(0.05, 0.1)]);
//! assert_eq!(bytes, [0x4E, 0x41, 0x49, 0x4C, 0x64, 0x00, 0xC8, 0x00]);
//! assert_eq!(report.points_written, 1);
//! assert!(!report.has_overflow());
//! ```

use crate::format::{encoded_len, to_fixed, NailHeader, RawPair};
use crate::point::Point2D;
use std::io::{self, Write};
use zerocopy::IntoBytes;

/// Summary of an encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct EncodeReport {
    /// Number of points written
    pub points_written: usize,
    /// Total bytes written, identifier included
    pub bytes_written: usize,
    /// Coordinates whose fixed-point value wrapped around
    pub overflowed_coordinates: usize,
}

impl EncodeReport {
    /// Whether any coordinate was out of the 16-bit range
    pub fn has_overflow(&self) -> bool {
        self.overflowed_coordinates > 0
    }
}

/// Convert one point to its stored pair, counting wrapped coordinates
fn point_to_pair(point: &Point2D, overflowed: &mut usize) -> RawPair {
    let (x, x_over) = to_fixed(point.x);
    let (y, y_over) = to_fixed(point.y);
    *overflowed += x_over as usize + y_over as usize;
    RawPair::new(x, y)
}

fn finish_report(points: usize, overflowed: usize) -> EncodeReport {
    let report = EncodeReport {
        points_written: points,
        bytes_written: encoded_len(points),
        overflowed_coordinates: overflowed,
    };
    if report.has_overflow() {
        tracing::warn!(
            overflowed = report.overflowed_coordinates,
            "coordinates outside the 16-bit fixed-point range were wrapped"
        );
    }
    report
}

/// Write a NAIL stream for `points` to `writer`
pub fn encode_into<W: Write>(writer: &mut W, points: &[Point2D]) -> io::Result<EncodeReport> {
    writer.write_all(NailHeader::new().as_bytes())?;

    let mut overflowed = 0usize;
    for point in points {
        let pair = point_to_pair(point, &mut overflowed);
        writer.write_all(pair.as_bytes())?;
    }

    Ok(finish_report(points.len(), overflowed))
}

/// Encode `points` into a new buffer
pub fn encode(points: &[Point2D]) -> (Vec<u8>, EncodeReport) {
    let mut buffer = Vec::with_capacity(encoded_len(points.len()));
    let report = encode_into(&mut buffer, points).expect("writing to a Vec cannot fail");
    debug_assert_eq!(report.bytes_written, buffer.len());
    (buffer, report)
}
