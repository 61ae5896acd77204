//! LZSS decompression (decoding).
//!
//! The decoder mirrors the encoder's dictionary exactly: literals enter
//! it as they are emitted, and back-references replay `length` bytes
//! from `offset`. Matched bytes are staged through the lookahead buffer
//! before they re-enter the dictionary, because the source and
//! destination ranges may overlap when the offset is close to the write
//! cursor.
//!
//! The stream carries no length prefix; the decoder runs until the
//! input ends, which makes the zero-padding of the final byte harmless
//! (a padding flag bit of 0 starts a back-reference whose field reads
//! hit end of stream).

use crate::params::{LENGTH_BITS, MAX_CODED, MAX_UNCODED, OFFSET_BITS, WINDOW_FILL, WINDOW_SIZE};
use lzpack_core::bitstream::BitReader;
use lzpack_core::error::{LzpackError, Result};
use lzpack_core::window::Window;
use std::io::{Read, Write};

/// Fold the ordinary end-of-stream condition into `None`.
fn eof_to_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(LzpackError::Eof) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Decode `input` to `output`, stopping cleanly at end of stream.
pub fn decode<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut reader = BitReader::new(input);
    let mut window = Window::new(WINDOW_SIZE, MAX_CODED, WINDOW_FILL);
    let mut next_char = 0usize;

    loop {
        let Some(flag) = eof_to_none(reader.read_bit())? else {
            break;
        };

        if flag {
            let Some(byte) = eof_to_none(reader.read_byte())? else {
                break;
            };

            output.write_all(&[byte])?;
            window.set_window_byte(next_char, byte);
            next_char = (next_char + 1) % WINDOW_SIZE;
        } else {
            let mut offset_buf = [0u8; 4];
            if eof_to_none(reader.read_bits_num(&mut offset_buf, OFFSET_BITS))?.is_none() {
                break;
            }

            let mut length_buf = [0u8; 4];
            if eof_to_none(reader.read_bits_num(&mut length_buf, LENGTH_BITS))?.is_none() {
                break;
            }

            let offset = u32::from_ne_bytes(offset_buf) as usize;
            let length = u32::from_ne_bytes(length_buf) as usize + MAX_UNCODED + 1;

            // stage through the lookahead first: writing straight into
            // the dictionary could overwrite the source of the match
            for i in 0..length {
                let byte = window.window_byte(offset + i);
                output.write_all(&[byte])?;
                window.set_lookahead_byte(i, byte);
            }

            for i in 0..length {
                let byte = window.lookahead_byte(i);
                window.set_window_byte(next_char + i, byte);
            }

            next_char = (next_char + length) % WINDOW_SIZE;
        }
    }

    output.flush()?;
    Ok(())
}

/// Decompress a byte slice into a new vector.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decode(data, &mut output)?;
    Ok(output)
}
