//! Codeword emission and bitstream-coupled symbol coding.
//!
//! A depth-first walk of the Huffman tree assigns each leaf its
//! codeword: `0` for every left descent, `1` for every right. The
//! resulting prefix code is not canonical; its shape reflects the merge
//! order. Codewords are stored as `BitVec`s because a sufficiently
//! skewed distribution produces codes longer than a machine word.

use crate::tree::HuffmanNode;
use crate::SYMBOL_COUNT;
use bit_vec::BitVec;
use lzpack_core::bitstream::{BitReader, BitWriter};
use lzpack_core::error::{LzpackError, Result};
use std::io::{Read, Write};

/// Prefix-code table mapping byte symbols to codewords.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: Vec<Option<BitVec>>,
}

impl CodeBook {
    /// An empty table (the code for empty input).
    pub fn empty() -> Self {
        Self {
            codes: vec![None; SYMBOL_COUNT],
        }
    }

    /// Emit the codeword table from a Huffman tree.
    ///
    /// A lone leaf root still receives the one-bit codeword `0`, so the
    /// code for single-symbol input is non-empty.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut book = Self::empty();
        let mut path = BitVec::new();
        book.walk(root, &mut path);
        book
    }

    fn walk(&mut self, node: &HuffmanNode, path: &mut BitVec) {
        if node.is_leaf() {
            if let Some(symbol) = node.symbol {
                let code = if path.is_empty() {
                    BitVec::from_elem(1, false)
                } else {
                    path.clone()
                };
                self.codes[symbol as usize] = Some(code);
            }
            return;
        }

        if let Some(left) = &node.left {
            path.push(false);
            self.walk(left, path);
            path.pop();
        }

        if let Some(right) = &node.right {
            path.push(true);
            self.walk(right, path);
            path.pop();
        }
    }

    /// The codeword for a symbol, if it occurred in the input.
    pub fn code(&self, symbol: u8) -> Option<&BitVec> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether the table holds no codewords at all.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Total coded length in bits under the given frequency table.
    pub fn weighted_length(&self, freqs: &[u64; SYMBOL_COUNT]) -> u64 {
        freqs
            .iter()
            .zip(&self.codes)
            .map(|(&freq, code)| freq * code.as_ref().map_or(0, |c| c.len() as u64))
            .sum()
    }

    /// Write one symbol's codeword through the bit stream.
    pub fn encode_symbol<W: Write>(&self, writer: &mut BitWriter<W>, symbol: u8) -> Result<()> {
        let code = self.codes[symbol as usize]
            .as_ref()
            .ok_or(LzpackError::MissingCodeword { symbol })?;

        for bit in code.iter() {
            writer.write_bit(bit)?;
        }

        Ok(())
    }

    /// Write a whole slice of symbols through the bit stream.
    pub fn encode<W: Write>(&self, writer: &mut BitWriter<W>, data: &[u8]) -> Result<()> {
        for &symbol in data {
            self.encode_symbol(writer, symbol)?;
        }
        Ok(())
    }
}

impl HuffmanNode {
    /// Decode one symbol by walking the tree off the bit stream.
    ///
    /// A lone leaf root consumes one bit per symbol, mirroring the
    /// one-bit codeword assigned at emission.
    pub fn decode_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u8> {
        if self.is_leaf() {
            reader.read_bit()?;
            return self.symbol.ok_or(LzpackError::InvalidHuffmanCode);
        }

        let mut node = self;
        while !node.is_leaf() {
            let bit = reader.read_bit()?;
            let child = if bit { &node.right } else { &node.left };
            node = child.as_deref().ok_or(LzpackError::InvalidHuffmanCode)?;
        }

        node.symbol.ok_or(LzpackError::InvalidHuffmanCode)
    }
}
