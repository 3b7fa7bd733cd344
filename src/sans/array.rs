//! Arrays of fixed-width numbers.

use alloc::vec::Vec;

use super::{
    Codec, Cursor, Error, Status, initial_capacity,
    scalar::{ByteOrder, Scalar, ScalarCodec},
};

/// Resumable decoder of an array: a signed 32-bit element count followed by
/// that many numbers of type `T`, without per-element framing.
#[derive(Debug, Clone)]
pub struct ArrayCodec<T: Scalar> {
    count: ScalarCodec<i32>,
    element: ScalarCodec<T>,
    items: Vec<T>,
}

impl<T: Scalar> ArrayCodec<T> {
    /// Create a codec reading numbers in the given byte order.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            count: ScalarCodec::new(order),
            element: ScalarCodec::new(order),
            items: Vec::new(),
        }
    }

    /// Number of elements completed so far.
    pub fn completed(&self) -> usize {
        self.items.len()
    }

    /// Whether the count and every element have been read.
    pub fn is_done(&self) -> bool {
        self.count
            .value()
            .and_then(|count| usize::try_from(count).ok())
            .is_some_and(|count| self.items.len() == count)
    }
}

impl<T: Scalar> Codec for ArrayCodec<T> {
    type Output = Vec<T>;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        let Some(count) = self.count.poll(cursor) else {
            return Ok(Status::Unfinished);
        };
        let count = usize::try_from(count).map_err(|_| Error::NegativeLength(count))?;

        if self.items.capacity() == 0 {
            self.items.reserve(initial_capacity::<T>(count));
        }

        while self.items.len() < count {
            let Some(item) = self.element.poll(cursor) else {
                return Ok(Status::Unfinished);
            };
            self.element.reset();
            self.items.push(item);
        }

        Ok(Status::Success)
    }

    fn finish(&mut self) -> Option<Vec<T>> {
        if !self.is_done() {
            return None;
        }

        let items = core::mem::take(&mut self.items);
        self.reset();
        Some(items)
    }

    fn reset(&mut self) {
        self.count.reset();
        self.element.reset();
        self.items.clear();
    }
}
