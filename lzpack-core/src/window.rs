//! Sliding window and lookahead buffers for LZSS coding.
//!
//! The encoder and its match finder share two buffers: a cyclic
//! dictionary of the most recent bytes of the uncompressed stream, and a
//! lookahead holding the bytes about to be coded. `Window` owns both;
//! the codec lends it by reference to the match finder so an
//! index-maintaining finder observes every dictionary mutation.
//!
//! The dictionary is pre-filled with a known byte at construction, so
//! back-references are valid before any real data has entered it. Both
//! buffers are indexed cyclically; callers may pass unreduced indices.

/// Owned dictionary + lookahead state for one codec operation.
#[derive(Debug, Clone)]
pub struct Window {
    /// Cyclic dictionary of recent output bytes.
    window: Vec<u8>,
    /// Bytes waiting to be coded.
    lookahead: Vec<u8>,
}

impl Window {
    /// Create a window with the given buffer sizes, the dictionary
    /// pre-filled with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if either size is zero.
    pub fn new(window_size: usize, lookahead_size: usize, fill: u8) -> Self {
        assert!(window_size > 0, "window size must be greater than 0");
        assert!(lookahead_size > 0, "lookahead size must be greater than 0");

        Self {
            window: vec![fill; window_size],
            lookahead: vec![fill; lookahead_size],
        }
    }

    /// Size of the dictionary buffer.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Size of the lookahead buffer.
    pub fn lookahead_size(&self) -> usize {
        self.lookahead.len()
    }

    /// Read a dictionary byte; the index is reduced modulo the window size.
    #[inline]
    pub fn window_byte(&self, index: usize) -> u8 {
        self.window[index % self.window.len()]
    }

    /// Store a dictionary byte; the index is reduced modulo the window size.
    #[inline]
    pub fn set_window_byte(&mut self, index: usize, byte: u8) {
        let len = self.window.len();
        self.window[index % len] = byte;
    }

    /// Read a lookahead byte; the index is reduced modulo the lookahead size.
    #[inline]
    pub fn lookahead_byte(&self, index: usize) -> u8 {
        self.lookahead[index % self.lookahead.len()]
    }

    /// Store a lookahead byte; the index is reduced modulo the lookahead size.
    #[inline]
    pub fn set_lookahead_byte(&mut self, index: usize, byte: u8) {
        let len = self.lookahead.len();
        self.lookahead[index % len] = byte;
    }
}
