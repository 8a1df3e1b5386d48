//! Error types for wire marshalling.
//!
//! Fixed-width numeric writes truncate and never fail; the only runtime
//! errors are data errors discovered while encoding strings.

use thiserror::Error;

/// All wire marshalling errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// A string's encoded form does not fit the 2-byte length prefix.
    #[error("string of {len} encoded bytes exceeds the 16-bit length prefix")]
    StringTooLong {
        /// Encoded byte length of the offending string
        len: usize,
    },

    /// A character cannot be represented in the session's text encoding.
    #[error("character {ch:?} is not representable in the selected text encoding")]
    Unencodable {
        /// The offending character
        ch: char,
    },
}

/// Result type for wire marshalling operations.
pub type Result<T> = std::result::Result<T, WireError>;
