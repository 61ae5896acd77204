//! # lzpack Huffman
//!
//! Minimum-redundancy prefix-code construction.
//!
//! The builder derives a Huffman code from byte frequencies: count the
//! input, grow a binary tree by repeatedly merging the two lightest
//! nodes, then walk the tree to emit one codeword per symbol. Coded
//! symbols travel through the bit stream layer of `lzpack-core`.
//!
//! Tree and frequency-table serialization are left to the embedding
//! archive format; this crate defines only code construction and the
//! symbol-level transfer.
//!
//! ## Example
//!
//! ```rust
//! use lzpack_huffman::{build_tree, count_frequencies, CodeBook};
//!
//! let freqs = count_frequencies(b"ABRACADABRA");
//! let root = build_tree(&freqs).unwrap();
//! let book = CodeBook::from_tree(&root);
//!
//! // the most frequent symbol gets the shortest codeword
//! assert!(book.code(b'A').unwrap().len() <= book.code(b'C').unwrap().len());
//! assert_eq!(book.weighted_length(&freqs), 23);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codebook;
pub mod tree;

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

// Re-exports
pub use codebook::CodeBook;
pub use tree::{build_tree, count_frequencies, count_frequencies_from, HuffmanNode};
