//! Error types for lzpack operations.
//!
//! This module provides the error type shared by the bit stream layer and
//! the codecs, covering I/O failures, end-of-stream conditions, and
//! numeric bit-transfer misuse.

use std::io;
use thiserror::Error;

/// The main error type for lzpack operations.
#[derive(Debug, Error)]
pub enum LzpackError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// End of the underlying stream.
    ///
    /// For the LZSS decoder this is the normal loop-exit condition, not a
    /// failure: the compressed stream carries no length prefix and simply
    /// ends when the input does.
    #[error("end of stream")]
    Eof,

    /// Numeric bit transfer invoked on a host whose byte order could not
    /// be determined.
    #[error("numeric bit transfer is not supported on this host byte order")]
    UnsupportedEndian,

    /// Numeric bit transfer requested more bits than the destination
    /// integer can hold.
    #[error("bit count {count} exceeds destination capacity of {capacity} bits")]
    BitCountRange {
        /// Number of bits requested.
        count: usize,
        /// Capacity of the destination in bits.
        capacity: usize,
    },

    /// Symbol has no codeword in the active code table.
    #[error("symbol {symbol:#04x} has no codeword")]
    MissingCodeword {
        /// The symbol that was looked up.
        symbol: u8,
    },

    /// Bit sequence does not lead to a leaf of the Huffman tree.
    #[error("invalid Huffman code in stream")]
    InvalidHuffmanCode,
}

/// Result type alias for lzpack operations.
pub type Result<T> = std::result::Result<T, LzpackError>;

impl LzpackError {
    /// Create a bit-count range error.
    pub fn bit_count_range(count: usize, capacity: usize) -> Self {
        Self::BitCountRange { count, capacity }
    }

    /// Whether this error marks an ordinary end of stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}
