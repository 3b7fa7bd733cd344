//! Convenience drivers for common byte sources.
//!
//! The functions in this module own the loop feeding a [`Decoder`] and return
//! the decoded root. Decompression, if the source is compressed, is left to
//! the caller: wrap the source in a decompressing reader, or feed decompressed
//! chunks as they are produced.
//!
//! [`Decoder`]: crate::sans::Decoder

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use slice::decode_chunks;
