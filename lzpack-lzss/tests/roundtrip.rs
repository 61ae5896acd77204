//! Round-trip tests for the LZSS codec.
//!
//! Every byte sequence must decode back to itself after encoding, with
//! either match finder.

use lzpack_lzss::params::MAX_CODED;
use lzpack_lzss::{compress, decode, decompress, encode_with, HashChain};

/// Reproducible pseudo-random bytes (linear congruential generator).
fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let chunk = (size - data.len()).min(text.len());
        data.extend_from_slice(&text[..chunk]);
    }
    data
}

fn roundtrip(input: &[u8]) {
    let compressed = compress(input).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), input);
}

fn roundtrip_hash_chain(input: &[u8]) {
    let mut compressed = Vec::new();
    encode_with(input, &mut compressed, &mut HashChain::new()).unwrap();

    let mut recovered = Vec::new();
    decode(compressed.as_slice(), &mut recovered).unwrap();
    assert_eq!(recovered, input);
}

// ============================================================================
// Brute-force finder
// ============================================================================

#[test]
fn test_empty() {
    roundtrip(b"");
}

#[test]
fn test_single_byte() {
    roundtrip(&[0x41]);
    roundtrip(&[0x00]);
    roundtrip(&[0xFF]);
}

#[test]
fn test_short_strings() {
    roundtrip(b"a");
    roundtrip(b"ab");
    roundtrip(b"abc");
    roundtrip(b"hello, world");
}

#[test]
fn test_run_longer_than_max_coded() {
    roundtrip(&vec![0u8; 100]);
    roundtrip(&vec![0xAAu8; 1000]);
}

#[test]
fn test_alternating_bytes() {
    let input: Vec<u8> = (0..2000).map(|i| if i % 2 == 0 { 0x00 } else { 0xFF }).collect();
    roundtrip(&input);
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
    roundtrip(&input);
}

#[test]
fn test_spaces_match_prefilled_window() {
    // the dictionary starts full of spaces
    roundtrip(&vec![b' '; 500]);
}

#[test]
fn test_tail_shorter_than_lookahead() {
    for extra in 1..MAX_CODED {
        let mut input = text_like(200);
        input.extend(random_bytes(extra));
        roundtrip(&input);
    }
}

#[test]
fn test_repetitive_text() {
    roundtrip(&text_like(4096));
}

#[test]
fn test_random_binary() {
    roundtrip(&random_bytes(8 * 1024));
}

#[test]
fn test_window_wraparound() {
    // more than WINDOW_SIZE bytes so the dictionary cycles
    roundtrip(&text_like(10 * 1024));
}

// ============================================================================
// Hash-chain finder
// ============================================================================

#[test]
fn test_hash_chain_basic() {
    roundtrip_hash_chain(b"");
    roundtrip_hash_chain(&[0x41]);
    roundtrip_hash_chain(b"abcabcabc");
}

#[test]
fn test_hash_chain_random_binary() {
    roundtrip_hash_chain(&random_bytes(64 * 1024));
}

#[test]
fn test_hash_chain_repetitive() {
    roundtrip_hash_chain(&vec![0x55u8; 32 * 1024]);
    roundtrip_hash_chain(&text_like(32 * 1024));
}

#[test]
fn test_hash_chain_reusable_across_encodes() {
    let mut finder = HashChain::new();
    for input in [&text_like(1024)[..], &random_bytes(1024)[..]] {
        let mut compressed = Vec::new();
        encode_with(input, &mut compressed, &mut finder).unwrap();

        let mut recovered = Vec::new();
        decode(compressed.as_slice(), &mut recovered).unwrap();
        assert_eq!(recovered, input);
    }
}

// ============================================================================
// Compression behavior
// ============================================================================

#[test]
fn test_compressible_input_shrinks() {
    let input = text_like(4096);
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len());
}

#[test]
fn test_incompressible_input_bounded_expansion() {
    // worst case is 9 bits per literal byte
    let input = random_bytes(4096);
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() <= input.len() * 9 / 8 + 1);
}

#[test]
fn test_finders_agree_on_output_size() {
    // tie-breaks may differ but greedy match lengths are maximal for
    // both finders, so the record sequence costs the same
    let input = text_like(2048);

    let brute = compress(&input).unwrap();
    let mut chained = Vec::new();
    encode_with(input.as_slice(), &mut chained, &mut HashChain::new()).unwrap();

    assert_eq!(brute.len(), chained.len());
}
