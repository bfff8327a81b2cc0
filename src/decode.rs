//! NAIL decoding
//!
//! Turns the bytes of a NAIL file into an ordered list of [`Point2D`].
//!
//! The reader checks the identifier, derives the number of coordinate pairs
//! from the byte length, consumes complete groups of four pairs and then the
//! remaining pairs one at a time. Byte counts that are not a whole number of
//! pairs are accepted by default; the leftover bytes are reported but not
//! read.
//!
//! # Example
//!
//! ```rust
//! use nailfile::decode::{decode, DecodeOptions};
//!
//! let bytes = [0x4E, 0x41, 0x49, 0x4C, 0x64, 0x00, 0xC8, 0x00];
//! let decoded = decode(&bytes, &DecodeOptions::default())?;
//!
//! assert_eq!(decoded.points.len(), 1);
//! assert!((decoded.points[0].x - 0.05).abs() < 1e-6);
//! assert!((decoded.points[0].y - 0.1).abs() < 1e-6);
//! # Ok::<(), nailfile::NailError>(())
//! ```

use crate::error::{NailError, Result};
use crate::format::{
    from_fixed, Layout, NailHeader, RawPair, RawRecord, MAGIC_SIZE, PAIR_SIZE,
};
use crate::point::Point2D;
use zerocopy::FromBytes;

/// How to treat inputs whose length is not a whole number of pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Ignore trailing bytes and report them in [`Decoded::trailing_bytes`] (default)
    #[default]
    Permissive,
    /// Reject trailing bytes with [`NailError::Truncated`]
    Strict,
}

/// Decoder configuration
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Trailing byte handling
    pub mode: DecodeMode,
    /// Keep the raw integers that were read in [`Decoded::raw`]
    pub keep_raw: bool,
}

impl DecodeOptions {
    /// Default options: permissive, no raw staging
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs with trailing bytes
    pub fn strict(mut self) -> Self {
        self.mode = DecodeMode::Strict;
        self
    }

    /// Set the trailing byte handling
    pub fn mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep the raw records that were read
    pub fn keep_raw(mut self, keep: bool) -> Self {
        self.keep_raw = keep;
        self
    }
}

/// Raw integers exactly as they were read, for inspection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawData {
    /// Complete groups of four pairs
    pub records: Vec<RawRecord>,
    /// Pairs read one at a time after the groups
    pub singles: Vec<RawPair>,
}

/// Result of a successful decode
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Legacy status value, `48 * entry_blocks + 4`
    pub status: u64,
    /// Decoded nail positions in file order
    pub points: Vec<Point2D>,
    /// How the input was split up
    pub layout: Layout,
    /// Raw integers, only present when requested in [`DecodeOptions`]
    pub raw: Option<RawData>,
}

impl Decoded {
    /// Bytes after the last complete pair that were not read
    pub fn trailing_bytes(&self) -> usize {
        self.layout.trailing_bytes
    }

    /// Whether the input had bytes that did not form a complete pair
    pub fn is_truncated(&self) -> bool {
        self.layout.trailing_bytes != 0
    }
}

/// Check the identifier at the start of `data`
pub fn check_magic(data: &[u8]) -> Result<()> {
    let (header, _) =
        NailHeader::read_from_prefix(data).map_err(|_| NailError::InvalidFormat { found: None })?;
    if !header.is_valid() {
        return Err(NailError::InvalidFormat {
            found: Some(header.magic.get()),
        });
    }
    Ok(())
}

/// Decode a complete NAIL file held in memory
///
/// # Errors
///
/// - [`NailError::InvalidFormat`] if the identifier is missing or wrong
/// - [`NailError::Truncated`] in strict mode when trailing bytes exist
pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<Decoded> {
    check_magic(data)?;

    let layout = Layout::from_len(data.len());
    tracing::debug!(
        size = layout.file_size,
        entry_blocks = layout.entry_blocks,
        total_entries = layout.total_entries,
        "decoding NAIL data"
    );

    if layout.trailing_bytes != 0 {
        if options.mode == DecodeMode::Strict {
            return Err(NailError::Truncated {
                trailing: layout.trailing_bytes,
            });
        }
        tracing::warn!(
            trailing = layout.trailing_bytes,
            "NAIL data has a partial coordinate pair at the end, ignoring it"
        );
    }

    let mut points = Vec::with_capacity(layout.total_entries);
    let mut raw = options.keep_raw.then(RawData::default);
    let mut rest = &data[MAGIC_SIZE..];

    for _ in 0..layout.full_groups {
        // Layout counts never exceed the input length
        let (record, tail) = RawRecord::read_from_prefix(rest).map_err(|_| short_read(rest))?;
        points.extend(record.pairs.iter().map(pair_to_point));
        if let Some(raw) = raw.as_mut() {
            raw.records.push(record);
        }
        rest = tail;
    }

    for _ in 0..layout.remainder {
        let (pair, tail) = RawPair::read_from_prefix(rest).map_err(|_| short_read(rest))?;
        points.push(pair_to_point(&pair));
        if let Some(raw) = raw.as_mut() {
            raw.singles.push(pair);
        }
        rest = tail;
    }

    debug_assert_eq!(points.len(), layout.total_entries);
    tracing::debug!(
        consumed = layout.consumed_bytes(),
        points = points.len(),
        "finished reading NAIL data"
    );

    Ok(Decoded {
        status: layout.status(),
        points,
        layout,
        raw,
    })
}

/// Decode only the points, with default options
pub fn decode_points(data: &[u8]) -> Result<Vec<Point2D>> {
    decode(data, &DecodeOptions::default()).map(|decoded| decoded.points)
}

fn pair_to_point(pair: &RawPair) -> Point2D {
    Point2D::new(from_fixed(pair.x.get()), from_fixed(pair.y.get()))
}

fn short_read(rest: &[u8]) -> NailError {
    NailError::Truncated {
        trailing: rest.len() % PAIR_SIZE,
    }
}
