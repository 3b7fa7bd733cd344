//! Lists of anonymous values.

use alloc::{boxed::Box, vec::Vec};

use crate::value::{List, Value};

use super::{
    Codec, Cursor, Error, Status, initial_capacity,
    error::ready,
    payload::{Context, PayloadCodec},
    scalar::ScalarCodec,
    tag::Tag,
};

/// Resumable decoder of a list: an element tag, a signed 32-bit element count,
/// then that many payloads of the element kind without names or tags.
#[derive(Debug, Clone)]
pub struct ListCodec {
    ctx: Context,
    kind: Option<Tag>,
    count: ScalarCodec<i32>,
    child: Option<Box<PayloadCodec>>,
    items: Vec<Value>,
}

impl ListCodec {
    /// Create a codec for a list's contents.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            kind: None,
            count: ScalarCodec::new(ctx.order),
            child: None,
            items: Vec::new(),
        }
    }

    /// Number of elements completed so far.
    pub fn completed(&self) -> usize {
        self.items.len()
    }

    /// Whether the header and every element have been read.
    pub fn is_done(&self) -> bool {
        self.kind.is_some()
            && self
                .count
                .value()
                .and_then(|count| usize::try_from(count).ok())
                .is_some_and(|count| self.items.len() == count)
    }

    fn read_kind(&mut self, cursor: &mut Cursor<'_>) -> Result<Option<Tag>, Error> {
        if self.kind.is_some() {
            return Ok(self.kind);
        }

        let Some(id) = cursor.next_byte() else {
            return Ok(None);
        };

        let kind = Tag::from_id(id).ok_or(Error::UnknownTag(id))?;
        log::trace!("Opened list of {kind} at depth {}.", self.ctx.depth);

        self.kind = Some(kind);
        Ok(self.kind)
    }
}

impl Codec for ListCodec {
    type Output = List;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        let Some(kind) = self.read_kind(cursor)? else {
            return Ok(Status::Unfinished);
        };

        let Some(count) = self.count.poll(cursor) else {
            return Ok(Status::Unfinished);
        };
        let length = usize::try_from(count).map_err(|_| Error::NegativeLength(count))?;

        if kind == Tag::End && length != 0 {
            Err(Error::UntypedList(count))?;
        }

        if self.items.capacity() == 0 {
            self.items.reserve(initial_capacity::<Value>(length));
        }

        while self.items.len() < length {
            let child = match self.child.take() {
                Some(child) => child,
                None => Box::new(PayloadCodec::new(kind, self.ctx)?),
            };
            let child = self.child.insert(child);

            ready!(child.parse(cursor)?);

            // Finishing resets the codec for the next element.
            let Some(item) = child.finish() else {
                return Ok(Status::Unfinished);
            };
            self.items.push(item);
        }

        Ok(Status::Success)
    }

    fn finish(&mut self) -> Option<List> {
        if !self.is_done() {
            return None;
        }

        let list = List {
            kind: self.kind?,
            items: core::mem::take(&mut self.items),
        };
        self.reset();
        Some(list)
    }

    fn reset(&mut self) {
        self.kind = None;
        self.count.reset();
        self.child = None;
        self.items.clear();
    }
}
