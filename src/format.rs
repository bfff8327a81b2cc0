//! Binary format structures for NAIL files
//!
//! A NAIL file is a 4-byte identifier followed by a flat run of little-endian
//! signed 16-bit integers. Each consecutive pair of integers is one (X, Y)
//! coordinate in fixed point.
//!
//! ```text
//! ┌────────┬──────┬──────┬──────┬──────┬─────┬──────┬──────┐
//! │ "NAIL" │  X1  │  Y1  │  X2  │  Y2  │ ... │  Xn  │  Yn  │
//! │ 4 bytes│ i16  │ i16  │ i16  │ i16  │     │ i16  │ i16  │
//! └────────┴──────┴──────┴──────┴──────┴─────┴──────┴──────┘
//! ```
//!
//! There are no record markers in the bytes. Readers consume the stream in
//! groups of four pairs ([`RawRecord`]) and finish with single pairs
//! ([`RawPair`]); the grouping is a reading convenience only.
//!
//! # Fixed point
//!
//! Reading multiplies by [`DECODE_SCALE`], writing divides by
//! [`ENCODE_DIVISOR`]. The two constants differ in the last digits and both
//! are part of the on-disk contract, so a write followed by a read is lossy.

use zerocopy::byteorder::little_endian::{I16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// File identifier read as a little-endian u32 (bytes `4E 41 49 4C`)
pub const MAGIC: u32 = 0x4C49414E;

/// File identifier as it appears on disk
pub const MAGIC_BYTES: [u8; 4] = *b"NAIL";

/// Size of the identifier in bytes
pub const MAGIC_SIZE: usize = 4;

/// Size of one (X, Y) coordinate pair in bytes
pub const PAIR_SIZE: usize = 4;

/// Number of pairs read together as one [`RawRecord`]
pub const PAIRS_PER_RECORD: usize = 4;

/// Fixed-point to real multiplier used when reading
pub const DECODE_SCALE: f64 = 0.00050000002;

/// Real to fixed-point divisor used when writing
pub const ENCODE_DIVISOR: f64 = 0.00050000000;

/// On-disk file header (4 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct NailHeader {
    /// Identifier, must equal [`MAGIC`]
    pub magic: U32,
}

impl NailHeader {
    /// Header carrying the NAIL identifier
    pub fn new() -> Self {
        Self {
            magic: U32::new(MAGIC),
        }
    }

    /// Whether the identifier matches
    pub fn is_valid(&self) -> bool {
        self.magic.get() == MAGIC
    }
}

impl Default for NailHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// One fixed-point coordinate pair as stored on disk (4 bytes)
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
pub struct RawPair {
    /// X in fixed point
    pub x: I16,
    /// Y in fixed point
    pub y: I16,
}

impl RawPair {
    /// Build a pair from native integers
    pub fn new(x: i16, y: i16) -> Self {
        Self {
            x: I16::new(x),
            y: I16::new(y),
        }
    }
}

/// Four consecutive pairs as read in one step (16 bytes)
///
/// Kept only so a decode can expose exactly what was read; the decoded points
/// never depend on it.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
pub struct RawRecord {
    /// X1, Y1 .. X4, Y4 in file order
    pub pairs: [RawPair; PAIRS_PER_RECORD],
}

/// Convert a stored fixed-point value to a real coordinate
#[inline]
pub fn from_fixed(raw: i16) -> f32 {
    (raw as f64 * DECODE_SCALE) as f32
}

/// Convert a real coordinate to its stored fixed-point value
///
/// The quotient is truncated toward zero and then narrowed to 16 bits, keeping
/// the low bits the way a fixed-width integer cast does. The second value is
/// `true` when the truncated quotient did not fit in an `i16`.
#[inline]
pub fn to_fixed(value: f32) -> (i16, bool) {
    let wide = (value as f64 / ENCODE_DIVISOR).trunc() as i64;
    let overflowed = wide < i16::MIN as i64 || wide > i16::MAX as i64;
    (wide as i16, overflowed)
}

/// How a buffer of a given size is split into groups and single pairs
///
/// Counts come from the byte length alone. A length that is not a whole
/// number of pairs leaves [`Layout::trailing_bytes`] unread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Layout {
    /// Total input size in bytes
    pub file_size: usize,
    /// `file_size / 4`, the header counted as one block
    pub entry_blocks: usize,
    /// Coordinate pairs after the header
    pub total_entries: usize,
    /// Complete groups of four pairs
    pub full_groups: usize,
    /// Pairs read one at a time after the groups
    pub remainder: usize,
    /// Bytes after the last complete pair
    pub trailing_bytes: usize,
}

impl Layout {
    /// Compute the layout for an input of `file_size` bytes
    pub fn from_len(file_size: usize) -> Self {
        let entry_blocks = file_size / PAIR_SIZE;
        let total_entries = entry_blocks.saturating_sub(1);
        let full_groups = if total_entries >= PAIRS_PER_RECORD {
            (total_entries - PAIRS_PER_RECORD) / PAIRS_PER_RECORD + 1
        } else {
            0
        };
        let remainder = total_entries - full_groups * PAIRS_PER_RECORD;
        let trailing_bytes = file_size.saturating_sub(MAGIC_SIZE) % PAIR_SIZE;

        Self {
            file_size,
            entry_blocks,
            total_entries,
            full_groups,
            remainder,
            trailing_bytes,
        }
    }

    /// Legacy status value reported by a successful read
    ///
    /// This is `48 * entry_blocks + 4`, not the number of bytes consumed.
    pub fn status(&self) -> u64 {
        48 * self.entry_blocks as u64 + 4
    }

    /// Bytes the decoder actually reads, header included
    pub fn consumed_bytes(&self) -> usize {
        MAGIC_SIZE + self.total_entries * PAIR_SIZE
    }
}

/// Size in bytes of an encoded file holding `points` pairs
pub fn encoded_len(points: usize) -> usize {
    MAGIC_SIZE + points * PAIR_SIZE
}
