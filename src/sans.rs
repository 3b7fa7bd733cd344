//! Resumable decoders driven by caller-supplied chunks.
//!
//! This module is intended for applications that acquire bytes themselves,
//! such as from a socket or a streaming decompressor. See [`crate::avec`] for
//! drivers covering common byte sources.
//!
//! # Architecture
//!
//! Every kind of value has a codec: a small state machine implementing
//! [`Codec`]. A call to [`Codec::parse`] consumes as many bytes from the
//! [`Cursor`] as it can use and reports one of three outcomes:
//!
//! - `Ok(Status::Success)`: the value is complete. Retrieve it with
//!   [`Codec::finish`]. Further calls consume nothing and succeed again.
//!
//! - `Ok(Status::Unfinished)`: every byte of the chunk was consumed without
//!   completing the value. Call again with a cursor over the bytes that
//!   directly follow.
//!
//! - `Err(_)`: the document is malformed. This is terminal; the codec must be
//!   reset with [`Codec::reset`] before reuse.
//!
//! Lists and compounds own the codec of the element currently in flight, so a
//! document may be split at any byte, at any depth, and decoding resumes where
//! it stopped. No call ever blocks or performs I/O.
//!
//! The document-level [`Decoder`] reads the tag and name of the root, and
//! delegates its payload to a [`PayloadCodec`] selected by tag.
//!
//! Independent decoders share no state and may run on separate threads.

pub mod array;
pub mod compound;
pub mod cursor;
pub mod decoder;
pub mod error;
pub mod list;
pub mod payload;
pub mod scalar;
pub mod string;
pub mod tag;

pub use cursor::Cursor;
pub use decoder::Decoder;
pub use error::{Error, Status};
pub use payload::{Context, PayloadCodec};
pub use tag::Tag;

/// Upper bound, in bytes, on storage reserved ahead of arriving elements.
///
/// Declared lengths are untrusted. Beyond this bound, collections grow only as
/// their elements are actually decoded.
pub const PREALLOCATION_LIMIT: usize = 64 * 1024;

/// Common interface of every codec.
pub trait Codec {
    /// The decoded value.
    type Output;

    /// Consume bytes from the cursor, advancing the decode.
    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error>;

    /// Take the decoded value, leaving the codec ready for reuse.
    ///
    /// Returns `None` unless the last call to [`Codec::parse`] succeeded.
    fn finish(&mut self) -> Option<Self::Output>;

    /// Discard all progress and any decoded value.
    fn reset(&mut self);
}

/// Number of `T` to reserve for a collection declaring `count` elements.
pub(crate) fn initial_capacity<T>(count: usize) -> usize {
    count.min(PREALLOCATION_LIMIT / size_of::<T>().max(1))
}
