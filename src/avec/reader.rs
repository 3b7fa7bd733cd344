//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{BufRead, ErrorKind};

use thiserror::Error;

use crate::{
    config::Config,
    sans::{self, Codec, Cursor, Decoder},
    value::Named,
};

extern crate std;

/// Suggested capacity for buffered readers supplying documents.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The reader ended before the document was complete.
    #[error("Unexpectedly reached the end of the reader.")]
    EndOfReader,
    /// The document is malformed.
    #[error("Malformed document: {0}")]
    Decode(#[from] sans::Error),
}

/// Decode a document from a buffered reader.
///
/// Each filled buffer is fed to the decoder as one chunk. Only the bytes of
/// the document are consumed, so the reader is left positioned directly after
/// it.
///
/// ```
/// let file = File::open("level.dat.nbt")?;
/// let mut reader = BufReader::with_capacity(CHUNK_SIZE, file);
/// let root = nbtflow::avec::decode_reader(&mut reader, Edition::Java)?;
/// ```
///
/// This method is also re-exported as `nbtflow::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl BufRead, config: impl Into<Config>) -> Result<Named, Error> {
    let mut decoder = Decoder::new(config);

    loop {
        let chunk = match r.fill_buf() {
            Ok(chunk) => chunk,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => Err(err)?,
        };

        if chunk.is_empty() {
            Err(Error::EndOfReader)?;
        }

        let mut cursor = Cursor::new(chunk);
        let status = decoder.parse(&mut cursor)?;

        let consumed = chunk.len() - cursor.remaining();
        r.consume(consumed);

        if status.is_success() {
            return decoder.finish().ok_or(Error::EndOfReader);
        }
    }
}
