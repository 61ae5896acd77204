//! Match-finding strategies for the LZSS encoder.
//!
//! The encoder is generic over [`MatchFinder`], so the search strategy
//! is pluggable: a stateless brute-force scan serves as the reference,
//! and [`HashChain`] keeps a byte-keyed index of the dictionary that it
//! maintains through the [`replace_char`](MatchFinder::replace_char)
//! hook. Hardware-accelerated pattern matchers slot in behind the same
//! trait.
//!
//! A match is the longest substring of the dictionary (read cyclically
//! from any start index) that is a prefix of the lookahead (also read
//! cyclically); implementations may break ties between equally long
//! matches however they like, so two finders can emit different but
//! equally valid streams.

use lzpack_core::error::Result;
use lzpack_core::window::Window;

/// A dictionary match: where it starts and how long it runs.
///
/// `length == 0` means no usable match was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Match {
    /// Dictionary index where the matched sequence begins.
    pub offset: usize,
    /// Number of matching bytes, at most the lookahead size.
    pub length: usize,
}

/// The search contract consumed by the LZSS encoder.
pub trait MatchFinder {
    /// Prepare any auxiliary index for the given window state.
    ///
    /// Called once per encode, after the window is constructed and
    /// before the first [`find_match`](Self::find_match).
    fn initialize(&mut self, _window: &Window) -> Result<()> {
        Ok(())
    }

    /// Find the longest dictionary match for the lookahead starting at
    /// `uncoded_head`.
    fn find_match(&self, window: &Window, window_head: usize, uncoded_head: usize) -> Match;

    /// Store `replacement` at dictionary `index`, keeping any auxiliary
    /// index in sync with the mutation.
    fn replace_char(&mut self, window: &mut Window, index: usize, replacement: u8);
}

/// Stateless reference finder: scans every dictionary start offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl MatchFinder for BruteForce {
    fn find_match(&self, window: &Window, window_head: usize, uncoded_head: usize) -> Match {
        let window_size = window.window_size();
        let max_len = window.lookahead_size();
        let first = window.lookahead_byte(uncoded_head);

        let mut best = Match::default();
        let mut i = window_head;

        loop {
            if window.window_byte(i) == first {
                let mut j = 1;
                while j < max_len
                    && window.window_byte(i + j) == window.lookahead_byte(uncoded_head + j)
                {
                    j += 1;
                }

                if j > best.length {
                    best = Match { offset: i, length: j };
                    if j == max_len {
                        break;
                    }
                }
            }

            i = (i + 1) % window_size;
            if i == window_head {
                break;
            }
        }

        best
    }

    fn replace_char(&mut self, window: &mut Window, index: usize, replacement: u8) {
        window.set_window_byte(index, replacement);
    }
}

/// Indexed finder: 256 byte-keyed buckets of dictionary positions.
///
/// Only positions whose first byte matches the lookahead head are
/// probed, which makes large inputs practical. The buckets are kept in
/// sync with the dictionary through `replace_char`.
#[derive(Debug, Clone, Default)]
pub struct HashChain {
    buckets: Vec<Vec<usize>>,
}

impl HashChain {
    /// Create a finder; the index is built by `initialize`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchFinder for HashChain {
    fn initialize(&mut self, window: &Window) -> Result<()> {
        self.buckets = vec![Vec::new(); 256];
        for i in 0..window.window_size() {
            self.buckets[window.window_byte(i) as usize].push(i);
        }
        Ok(())
    }

    fn find_match(&self, window: &Window, _window_head: usize, uncoded_head: usize) -> Match {
        let max_len = window.lookahead_size();
        let first = window.lookahead_byte(uncoded_head);

        let mut best = Match::default();

        for &i in &self.buckets[first as usize] {
            let mut j = 1;
            while j < max_len
                && window.window_byte(i + j) == window.lookahead_byte(uncoded_head + j)
            {
                j += 1;
            }

            if j > best.length {
                best = Match { offset: i, length: j };
                if j == max_len {
                    break;
                }
            }
        }

        best
    }

    fn replace_char(&mut self, window: &mut Window, index: usize, replacement: u8) {
        let index = index % window.window_size();
        let old = window.window_byte(index);

        if old != replacement {
            let bucket = &mut self.buckets[old as usize];
            if let Some(pos) = bucket.iter().position(|&p| p == index) {
                bucket.swap_remove(pos);
            }
            self.buckets[replacement as usize].push(index);
        }

        window.set_window_byte(index, replacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MAX_CODED, WINDOW_FILL, WINDOW_SIZE};

    fn window_with(dict: &[u8], lookahead: &[u8]) -> Window {
        let mut window = Window::new(WINDOW_SIZE, MAX_CODED, WINDOW_FILL);
        for (i, &byte) in dict.iter().enumerate() {
            window.set_window_byte(i, byte);
        }
        for (i, &byte) in lookahead.iter().enumerate() {
            window.set_lookahead_byte(i, byte);
        }
        window
    }

    #[test]
    fn test_brute_force_no_match() {
        let window = window_with(b"", b"zzz");
        let m = BruteForce.find_match(&window, 0, 0);
        assert_eq!(m.length, 0);
    }

    #[test]
    fn test_brute_force_finds_longest() {
        // "abc" at 0, "abcdef" at 10: the longer one must win
        let mut window = window_with(b"abc", b"abcdefxxxxxxxxxxxx");
        for (i, &byte) in b"abcdef".iter().enumerate() {
            window.set_window_byte(10 + i, byte);
        }

        let m = BruteForce.find_match(&window, 0, 0);
        assert_eq!(m.offset, 10);
        assert_eq!(m.length, 6);
    }

    #[test]
    fn test_brute_force_caps_at_lookahead_size() {
        let dict: Vec<u8> = vec![b'a'; 64];
        let lookahead = vec![b'a'; MAX_CODED];
        let window = window_with(&dict, &lookahead);

        let m = BruteForce.find_match(&window, 0, 0);
        assert_eq!(m.length, MAX_CODED);
    }

    #[test]
    fn test_hash_chain_agrees_on_length() {
        let mut window = window_with(b"the cat sat on the mat", b"the mat was flat..");
        let mut hash = HashChain::new();
        hash.initialize(&window).unwrap();

        let brute = BruteForce.find_match(&window, 0, 0);
        let chained = hash.find_match(&window, 0, 0);
        assert_eq!(brute.length, chained.length);

        // mutate through the hook and compare again
        hash.replace_char(&mut window, 4, b'X');
        let brute = BruteForce.find_match(&window, 0, 0);
        let chained = hash.find_match(&window, 0, 0);
        assert_eq!(brute.length, chained.length);
    }

    #[test]
    fn test_hash_chain_tracks_replacements() {
        let mut window = window_with(b"", b"qqq...............");
        let mut hash = HashChain::new();
        hash.initialize(&window).unwrap();

        assert_eq!(hash.find_match(&window, 0, 0).length, 0);

        hash.replace_char(&mut window, 7, b'q');
        let m = hash.find_match(&window, 0, 0);
        assert_eq!(m.offset, 7);
        assert!(m.length >= 1);

        // replacing it away again removes the only candidate
        hash.replace_char(&mut window, 7, b'z');
        assert_eq!(hash.find_match(&window, 0, 0).length, 0);
    }
}
