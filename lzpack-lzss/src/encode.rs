//! LZSS compression (encoding).
//!
//! The encoder reads the input through a lookahead buffer, asks the
//! match finder for the longest dictionary match, and emits either a
//! literal record (flag bit 1 + the byte) or a back-reference (flag bit
//! 0 + offset + biased length). Coded bytes then retire from the
//! lookahead into the dictionary through the finder's `replace_char`
//! hook, so an index-maintaining finder never falls out of sync.

use crate::finder::{BruteForce, MatchFinder};
use crate::params::{LENGTH_BITS, MAX_CODED, MAX_UNCODED, OFFSET_BITS, WINDOW_FILL, WINDOW_SIZE};
use lzpack_core::bitstream::BitWriter;
use lzpack_core::error::Result;
use lzpack_core::window::Window;
use std::io::{self, Read, Write};

/// Read one byte from the input, `None` at end of stream.
pub(crate) fn next_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Encode `input` to `output` with the brute-force reference finder.
///
/// Empty input produces empty output. The output is flushed with the
/// final partial byte zero-padded.
pub fn encode<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    encode_with(input, output, &mut BruteForce)
}

/// Encode `input` to `output` with a caller-supplied match finder.
pub fn encode_with<R: Read, W: Write, M: MatchFinder>(
    mut input: R,
    output: W,
    finder: &mut M,
) -> Result<()> {
    let mut writer = BitWriter::new(output);
    let mut window = Window::new(WINDOW_SIZE, MAX_CODED, WINDOW_FILL);

    let mut window_head = 0usize;
    let mut uncoded_head = 0usize;

    // prime the lookahead; `len` counts the real bytes it holds
    let mut len = 0usize;
    while len < MAX_CODED {
        match next_byte(&mut input)? {
            Some(byte) => {
                window.set_lookahead_byte(len, byte);
                len += 1;
            }
            None => break,
        }
    }

    if len == 0 {
        return writer.flush();
    }

    finder.initialize(&window)?;

    let mut match_data = finder.find_match(&window, window_head, uncoded_head);

    while len > 0 {
        if match_data.length > len {
            // stale lookahead bytes past the real input extended the match
            match_data.length = len;
        }

        if match_data.length <= MAX_UNCODED {
            // too short to pay for a back-reference
            writer.write_bit(true)?;
            writer.write_byte(window.lookahead_byte(uncoded_head))?;
            match_data.length = 1;
        } else {
            let offset = match_data.offset as u32;
            let biased = (match_data.length - (MAX_UNCODED + 1)) as u32;

            writer.write_bit(false)?;
            writer.write_bits_num(&offset.to_ne_bytes(), OFFSET_BITS)?;
            writer.write_bits_num(&biased.to_ne_bytes(), LENGTH_BITS)?;
        }

        // retire the coded bytes into the dictionary, refilling the
        // lookahead from the input
        let mut replaced = 0;
        while replaced < match_data.length {
            let Some(byte) = next_byte(&mut input)? else {
                break;
            };

            let retiring = window.lookahead_byte(uncoded_head);
            finder.replace_char(&mut window, window_head, retiring);
            window.set_lookahead_byte(uncoded_head, byte);

            window_head = (window_head + 1) % WINDOW_SIZE;
            uncoded_head = (uncoded_head + 1) % MAX_CODED;
            replaced += 1;
        }

        // input exhausted: keep draining what the lookahead still holds
        while replaced < match_data.length {
            let retiring = window.lookahead_byte(uncoded_head);
            finder.replace_char(&mut window, window_head, retiring);

            window_head = (window_head + 1) % WINDOW_SIZE;
            uncoded_head = (uncoded_head + 1) % MAX_CODED;
            len -= 1;
            replaced += 1;
        }

        match_data = finder.find_match(&window, window_head, uncoded_head);
    }

    writer.flush()
}

/// Compress a byte slice into a new vector.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    encode(data, &mut output)?;
    Ok(output)
}
