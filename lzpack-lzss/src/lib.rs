//! # lzpack LZSS
//!
//! LZSS (Lempel-Ziv-Storer-Szymanski) sliding-window compression.
//!
//! The codec replaces repeated byte sequences with (offset, length)
//! back-references against a 4 KiB dictionary that is pre-filled with
//! spaces, so references are valid from the first record. Each record
//! starts with a one-bit flag: `1` introduces a literal byte, `0` a
//! back-reference of 12 offset bits and 4 biased length bits.
//!
//! Match finding is pluggable through the [`MatchFinder`] trait;
//! [`BruteForce`] is the reference implementation and [`HashChain`]
//! an index-maintaining one for larger inputs.
//!
//! ## Example
//!
//! ```rust
//! use lzpack_lzss::{compress, decompress};
//!
//! let data = b"how much wood would a woodchuck chuck";
//! let packed = compress(data).unwrap();
//! assert_eq!(decompress(&packed).unwrap(), data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;
pub mod finder;
pub mod params;

// Re-exports
pub use decode::{decode, decompress};
pub use encode::{compress, encode, encode_with};
pub use finder::{BruteForce, HashChain, Match, MatchFinder};
