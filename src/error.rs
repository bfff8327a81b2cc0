/// Error types for the nailfile library
use std::fmt;
use std::io;

use crate::format::MAGIC;

/// Result type alias for NAIL codec operations
pub type Result<T> = std::result::Result<T, NailError>;

/// Main error type for NAIL codec operations
#[derive(Debug)]
pub enum NailError {
    /// The file could not be opened, read, mapped or written
    Io(io::Error),

    /// An empty path was passed where a file was expected
    EmptyPath,

    /// The identifier at offset 0 is not the NAIL magic
    InvalidFormat {
        /// Identifier that was found, or `None` if the input is shorter than 4 bytes
        found: Option<u32>,
    },

    /// Coordinate stream length is not a whole number of pairs (strict mode only)
    Truncated {
        /// Bytes left over after the last complete pair
        trailing: usize,
    },
}

impl NailError {
    /// True for failures where the data itself was rejected, as opposed to I/O
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            NailError::InvalidFormat { .. } | NailError::Truncated { .. }
        )
    }
}

impl fmt::Display for NailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NailError::Io(e) => write!(f, "I/O error: {}", e),
            NailError::EmptyPath => write!(f, "Empty file path"),
            NailError::InvalidFormat { found: Some(found) } => write!(
                f,
                "Invalid NAIL file: expected magic 0x{:08X}, got 0x{:08X}",
                MAGIC, found
            ),
            NailError::InvalidFormat { found: None } => {
                write!(f, "Invalid NAIL file: too short to hold the magic")
            }
            NailError::Truncated { trailing } => write!(
                f,
                "Truncated NAIL file: {} trailing byte(s) after the last coordinate pair",
                trailing
            ),
        }
    }
}

impl std::error::Error for NailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NailError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NailError {
    fn from(err: io::Error) -> Self {
        NailError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_invalid_magic() {
        let err = NailError::InvalidFormat {
            found: Some(0x12345678),
        };
        let msg = err.to_string();
        assert!(msg.contains("0x4C49414E"));
        assert!(msg.contains("0x12345678"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_io_source() {
        let err: NailError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(!err.is_format_error());
        assert!(NailError::EmptyPath.source().is_none());
    }
}
