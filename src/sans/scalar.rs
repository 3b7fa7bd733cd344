//! Fixed-width numbers.

use super::{Codec, Cursor, Error, Status};

/// Order of bytes within a multi-byte number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

/// A fixed-width number decodable from the wire.
pub trait Scalar: Copy {
    /// The wire representation of this number.
    type Bytes: core::fmt::Debug + Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Convert wire bytes to a number.
    fn from_bytes(r: Self::Bytes, order: ByteOrder) -> Self;
}

macro_rules! integer {
    ($($t:ident),*) => {
        $(
            impl Scalar for $t {
                type Bytes = [u8; size_of::<$t>()];

                fn from_bytes(r: Self::Bytes, order: ByteOrder) -> Self {
                    match order {
                        ByteOrder::BigEndian => $t::from_be_bytes(r),
                        ByteOrder::LittleEndian => $t::from_le_bytes(r),
                    }
                }
            }
        )*
    };
}

// Floats are decoded as the integer of the same width, then reinterpreted.
macro_rules! float {
    ($($t:ident => $bits:ident),*) => {
        $(
            impl Scalar for $t {
                type Bytes = <$bits as Scalar>::Bytes;

                fn from_bytes(r: Self::Bytes, order: ByteOrder) -> Self {
                    let bits = $bits::from_bytes(r, order);
                    zerocopy::transmute!(bits)
                }
            }
        )*
    };
}

integer!(i8, i16, u16, i32, u32, i64, u64);
float!(f32 => u32, f64 => u64);

/// Resumable decoder of a single fixed-width number.
///
/// Bytes are collected until the full width has arrived, possibly across many
/// chunks. The number is only available once [`Status::Success`] has been
/// returned.
#[derive(Debug, Clone)]
pub struct ScalarCodec<T: Scalar> {
    order: ByteOrder,
    bytes: T::Bytes,
    bytes_read: usize,
}

impl<T: Scalar> ScalarCodec<T> {
    /// Create a codec reading numbers in the given byte order.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            bytes: T::Bytes::default(),
            bytes_read: 0,
        }
    }

    /// The byte order this codec was created with.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Whether the full width has been read.
    pub fn is_done(&self) -> bool {
        self.bytes_read == self.bytes.as_ref().len()
    }

    /// The decoded number, once complete.
    pub fn value(&self) -> Option<T> {
        self.is_done().then(|| T::from_bytes(self.bytes, self.order))
    }

    /// Read from a cursor, returning the number once complete.
    pub fn poll(&mut self, cursor: &mut Cursor<'_>) -> Option<T> {
        let buf = self.bytes.as_mut();
        let r = cursor.take(buf.len() - self.bytes_read);

        buf[self.bytes_read..self.bytes_read + r.len()].copy_from_slice(r);
        self.bytes_read += r.len();

        self.value()
    }
}

impl<T: Scalar> Codec for ScalarCodec<T> {
    type Output = T;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        Ok(match self.poll(cursor) {
            Some(_) => Status::Success,
            None => Status::Unfinished,
        })
    }

    fn finish(&mut self) -> Option<T> {
        let value = self.value()?;
        self.reset();
        Some(value)
    }

    fn reset(&mut self) {
        self.bytes = T::Bytes::default();
        self.bytes_read = 0;
    }
}
