//! # lzpack Core
//!
//! Core components for the lzpack compression toolkit.
//!
//! This crate provides the fundamental building blocks shared by the
//! codecs:
//!
//! - [`bitstream`]: MSB-first bit-level I/O with endian-aware numeric
//!   transfer
//! - [`window`]: sliding dictionary and lookahead buffers for LZSS
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! lzpack is a layered stack:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ CLI                                            │
//! │     lzpack binary (-c / -d / -i / -o)          │
//! ├────────────────────────────────────────────────┤
//! │ Codecs                                         │
//! │     LZSS (lzpack-lzss), Huffman (lzpack-huffman)│
//! ├────────────────────────────────────────────────┤
//! │ BitStream (this crate)                         │
//! │     BitReader/BitWriter, Window                │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzpack_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bit(false).unwrap();
//!     writer.write_bits_num(&42u32.to_ne_bytes(), 12).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert!(!reader.read_bit().unwrap());
//! let mut buf = [0u8; 4];
//! reader.read_bits_num(&mut buf, 12).unwrap();
//! assert_eq!(u32::from_ne_bytes(buf), 42);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod window;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, Endian};
pub use error::{LzpackError, Result};
pub use window::Window;
