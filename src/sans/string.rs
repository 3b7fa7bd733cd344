//! Length-prefixed strings, used for both names and string payloads.

use alloc::{string::String, vec::Vec};

use super::{
    Codec, Cursor, Error, Status, initial_capacity,
    scalar::{ByteOrder, ScalarCodec},
};

/// Resumable decoder of a string: an unsigned 16-bit length followed by that
/// many bytes.
///
/// The bytes are converted to text once complete, replacing any invalid UTF-8
/// sequences.
#[derive(Debug, Clone)]
pub struct StringCodec {
    length: ScalarCodec<u16>,
    bytes: Vec<u8>,
}

impl StringCodec {
    /// Create a codec reading lengths in the given byte order.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            length: ScalarCodec::new(order),
            bytes: Vec::new(),
        }
    }

    /// Whether the length and every byte have been read.
    pub fn is_done(&self) -> bool {
        self.length
            .value()
            .is_some_and(|length| self.bytes.len() == usize::from(length))
    }
}

impl Codec for StringCodec {
    type Output = String;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        let Some(length) = self.length.poll(cursor) else {
            return Ok(Status::Unfinished);
        };
        let length = usize::from(length);

        if self.bytes.capacity() == 0 {
            self.bytes.reserve(initial_capacity::<u8>(length));
        }

        let r = cursor.take(length - self.bytes.len());
        self.bytes.extend_from_slice(r);

        Ok(if self.bytes.len() == length {
            Status::Success
        } else {
            Status::Unfinished
        })
    }

    fn finish(&mut self) -> Option<String> {
        if !self.is_done() {
            return None;
        }

        let text = into_text(core::mem::take(&mut self.bytes));
        self.reset();
        Some(text)
    }

    fn reset(&mut self) {
        self.length.reset();
        self.bytes.clear();
    }
}

/// Convert raw string bytes to text.
fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
