//! Error types for bytewire core operations.

use thiserror::Error;

/// Core error type for bytewire operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Buffer is too short for the requested operation.
    #[error("buffer too short: required {required} bytes, available {available} bytes")]
    BufferTooShort {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Source and destination of a byte-order conversion differ in width.
    #[error("width mismatch: source is {source_len} bytes, destination is {dest_len} bytes")]
    WidthMismatch {
        /// Source width in bytes.
        source_len: usize,
        /// Destination width in bytes.
        dest_len: usize,
    },

    /// Raw message identifier outside the schema's dense range.
    #[error("unknown message id: {raw:#06x}")]
    UnknownMessageId {
        /// Raw identifier value.
        raw: u16,
    },
}

impl Error {
    /// Creates a [`Error::BufferTooShort`] for the given sizes.
    #[must_use]
    pub const fn buffer_too_short(required: usize, available: usize) -> Self {
        Self::BufferTooShort {
            required,
            available,
        }
    }
}

/// Result type alias for bytewire core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_buffer_too_short() {
        let err = Error::buffer_too_short(11, 4);
        let msg = err.to_string();
        assert!(msg.contains("buffer too short"));
        assert!(msg.contains("11"));
        assert!(msg.contains("4"));
    }

    #[test]
    fn test_error_display_width_mismatch() {
        let err = Error::WidthMismatch {
            source_len: 3,
            dest_len: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("width mismatch"));
        assert!(msg.contains("3 bytes"));
        assert!(msg.contains("2 bytes"));
    }

    #[test]
    fn test_error_display_unknown_id() {
        let err = Error::UnknownMessageId { raw: 0xFFFF };
        assert_eq!(err.to_string(), "unknown message id: 0xffff");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::buffer_too_short(5, 1), Error::buffer_too_short(5, 1));
        assert_ne!(Error::buffer_too_short(5, 1), Error::buffer_too_short(5, 2));
    }
}
