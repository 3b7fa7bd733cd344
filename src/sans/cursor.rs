//! View over the unconsumed bytes of the current chunk.

/// The unconsumed remainder of a chunk.
///
/// Codecs advance the cursor as they fold bytes into their state; bytes are
/// never handed back. When a codec returns [`Status::Unfinished`] the cursor
/// is empty, and the next call must receive a cursor over the bytes that
/// follow immediately after this chunk.
///
/// [`Status::Unfinished`]: super::Status::Unfinished
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
    /// Create a cursor over a chunk.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of bytes not yet consumed.
    pub const fn remaining(&self) -> usize {
        self.bytes.len()
    }

    /// Whether every byte has been consumed.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The bytes not yet consumed.
    pub const fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    /// Consume `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Cursor::remaining`].
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.bytes.len(), "advanced past the end of the chunk");
        self.bytes = &self.bytes[n..];
    }

    /// Consume a single byte, if one is available.
    pub fn next_byte(&mut self) -> Option<u8> {
        let first = *self.bytes.first()?;
        self.advance(1);
        Some(first)
    }

    /// Consume up to `n` bytes, returning those consumed.
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let bytes = self.bytes;
        let taken = &bytes[..n.min(bytes.len())];
        self.advance(taken.len());
        taken
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
