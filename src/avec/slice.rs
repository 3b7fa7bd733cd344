//! Slice-based decoder implementation.

use thiserror::Error;

use crate::{
    config::Config,
    sans::{self, Codec, Cursor, Decoder, Status},
    value::Named,
};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// The document is malformed.
    #[error("Malformed document: {0}")]
    Decode(#[from] sans::Error),
}

/// Decode a document from the start of a slice.
///
/// Returns the root, and the bytes following the document.
///
/// This method is also re-exported as `nbtflow::avec::decode_slice`.
pub fn decode(r: &[u8], config: impl Into<Config>) -> Result<(Named, &[u8]), Error> {
    let mut decoder = Decoder::new(config);
    let mut cursor = Cursor::new(r);

    match decoder.parse(&mut cursor)? {
        Status::Success => {
            let root = decoder.finish().ok_or(Error::EndOfSlice)?;
            Ok((root, cursor.as_slice()))
        }
        Status::Unfinished => Err(Error::EndOfSlice),
    }
}

/// Decode a document split across consecutive chunks.
///
/// Chunks are consumed only until the document is complete. Any bytes
/// following it, in the same chunk or later ones, are ignored.
pub fn decode_chunks<I>(chunks: I, config: impl Into<Config>) -> Result<Named, Error>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut decoder = Decoder::new(config);

    for chunk in chunks {
        let mut cursor = Cursor::new(chunk.as_ref());

        if decoder.parse(&mut cursor)?.is_success() {
            return decoder.finish().ok_or(Error::EndOfSlice);
        }
    }

    Err(Error::EndOfSlice)
}
