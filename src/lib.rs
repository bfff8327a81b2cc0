//! Nailfile - Reader and writer for NAIL pin position files
//!
//! A NAIL file stores an ordered list of 2D pin/anchor positions ("nails") as
//! 16-bit fixed-point coordinates behind a 4-byte `NAIL` identifier. This
//! crate decodes such files into [`Point2D`] values and encodes points back
//! into the same byte layout.
//!
//! # Quick Start
//!
//! ```rust
//! use nailfile::{decode, encode, DecodeOptions, Point2D};
//!
//! let points = vec![Point2D::new(0.05, 0.1), Point2D::new(-2.0, 3.25)];
//! let (bytes, report) = encode(&points);
//! assert_eq!(report.points_written, 2);
//!
//! let decoded = decode(&bytes, &DecodeOptions::default())?;
//! assert_eq!(decoded.points.len(), 2);
//!
//! // Fixed point is lossy, compare with a tolerance
//! assert!(decoded.points[1].approx_eq(&points[1], 1e-3));
//! # Ok::<(), nailfile::NailError>(())
//! ```
//!
//! # Files
//!
//! ```rust,no_run
//! use nailfile::{load, save, DecodeOptions, Point2D};
//!
//! save("pins.nail", &[Point2D::new(0.05, 0.1)])?;
//! let decoded = load("pins.nail", &DecodeOptions::default())?;
//! println!("read() returned {}", decoded.status);
//! # Ok::<(), nailfile::NailError>(())
//! ```
//!
//! # Format
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  "NAIL" identifier (4 bytes)         │
//! ├──────────────────────────────────────┤
//! │  X1 Y1 X2 Y2 ... Xn Yn               │
//! │  little-endian i16, fixed point      │
//! └──────────────────────────────────────┘
//! ```
//!
//! See [`format`] for the scale constants and layout rules.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// NAIL decoding
pub mod decode;
/// NAIL encoding
pub mod encode;
/// Error types for NAIL operations
pub mod error;
pub mod format;
/// Nail position type
pub mod point;
pub mod serialization;
pub mod validation;

// Re-exports for Rust consumers

pub use crate::decode::{decode, DecodeMode, DecodeOptions, Decoded};
pub use crate::encode::{encode, EncodeReport};
pub use crate::error::{NailError, Result};
pub use crate::format::Layout;
pub use crate::point::Point2D;
pub use crate::serialization::{load, read_status, save, write_ignoring_errors};

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
