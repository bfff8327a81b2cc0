//! NAIL file validation
//!
//! Checks a file without decoding it into points and reports everything that
//! a reader would trip over or silently skip.
//!
//! # Example
//!
//! ```rust,no_run
//! use nailfile::validation::{validate_file, ValidationLevel};
//!
//! let report = validate_file("pins.nail", ValidationLevel::Standard)?;
//! if !report.is_valid() {
//!     eprintln!("Validation failed with {} errors", report.errors.len());
//!     for error in &report.errors {
//!         eprintln!("  ERROR: {}", error);
//!     }
//! }
//! # Ok::<(), nailfile::NailError>(())
//! ```

use crate::error::Result;
use crate::format::{Layout, NailHeader, MAGIC, PAIR_SIZE};
use serde::Serialize;
use std::path::Path;
use zerocopy::FromBytes;

/// Validation strictness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationLevel {
    /// Accept anything a permissive read accepts; leftover bytes are a warning (default)
    #[default]
    Standard,
    /// Leftover bytes after the last pair are an error
    Strict,
}

/// Validation report with detailed findings
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Problems that make the file unreadable at this level
    pub errors: Vec<String>,
    /// Issues a permissive reader tolerates
    pub warnings: Vec<String>,
    /// Informational messages about the file
    pub info: Vec<String>,
    /// Identifier found at offset 0, if the file is long enough
    pub magic: Option<u32>,
    /// How a reader splits the file
    pub layout: Layout,
}

impl ValidationReport {
    /// True when no errors were found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate NAIL bytes held in memory
pub fn validate_bytes(data: &[u8], level: ValidationLevel) -> ValidationReport {
    let mut report = ValidationReport {
        layout: Layout::from_len(data.len()),
        ..Default::default()
    };

    match NailHeader::read_from_prefix(data) {
        Ok((header, _)) => {
            report.magic = Some(header.magic.get());
            if !header.is_valid() {
                report.errors.push(format!(
                    "Invalid magic: expected 0x{:08X}, got 0x{:08X}",
                    MAGIC,
                    header.magic.get()
                ));
            }
        }
        Err(_) => {
            report.errors.push(format!(
                "File too small: {} bytes (need at least 4)",
                data.len()
            ));
            return report;
        }
    }

    let layout = report.layout;
    if layout.trailing_bytes != 0 {
        let msg = format!(
            "{} trailing byte(s) after the last complete coordinate pair (stream length not a multiple of {})",
            layout.trailing_bytes, PAIR_SIZE
        );
        match level {
            ValidationLevel::Standard => report.warnings.push(msg),
            ValidationLevel::Strict => report.errors.push(msg),
        }
    }

    report.info.push(format!("{} coordinate pair(s)", layout.total_entries));
    report.info.push(format!(
        "{} group(s) of 4 pairs, {} single pair(s)",
        layout.full_groups, layout.remainder
    ));
    report
        .info
        .push(format!("Read status would be {}", layout.status()));

    report
}

/// Validate a NAIL file on disk
///
/// # Errors
///
/// Only I/O failures are returned as errors; format problems end up in the
/// report.
pub fn validate_file<P: AsRef<Path>>(path: P, level: ValidationLevel) -> Result<ValidationReport> {
    let data = std::fs::read(path.as_ref())?;
    Ok(validate_bytes(&data, level))
}
