//! Compounds of named values.

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::value::{Compound, Named};

use super::{
    Codec, Cursor, Error, Status,
    error::ready,
    payload::{Context, PayloadCodec},
    string::StringCodec,
    tag::Tag,
};

#[derive(Debug, Clone)]
enum State {
    /// Awaiting the tag of the next entry, or the end tag.
    Tag,
    /// Reading the name of an entry.
    Name(Tag),
    /// Reading the payload of an entry.
    Payload {
        name: String,
        child: Box<PayloadCodec>,
    },
    Done,
}

/// Resumable decoder of a compound: entries of a tag, a name and a payload,
/// terminated by an end tag.
#[derive(Debug, Clone)]
pub struct CompoundCodec {
    ctx: Context,
    state: State,
    name: StringCodec,
    entries: Vec<Named>,
}

impl CompoundCodec {
    /// Create a codec for a compound's contents.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            state: State::Tag,
            name: StringCodec::new(ctx.order),
            entries: Vec::new(),
        }
    }

    /// Number of entries completed so far.
    pub fn completed(&self) -> usize {
        self.entries.len()
    }

    /// Whether the end tag has been read.
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

impl Codec for CompoundCodec {
    type Output = Compound;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        loop {
            match &mut self.state {
                State::Tag => {
                    let Some(id) = cursor.next_byte() else {
                        return Ok(Status::Unfinished);
                    };

                    self.state = match Tag::from_id(id).ok_or(Error::UnknownTag(id))? {
                        Tag::End => State::Done,
                        tag => State::Name(tag),
                    };
                }
                State::Name(tag) => {
                    let tag = *tag;

                    ready!(self.name.parse(cursor)?);
                    let name = self.name.finish().unwrap_or_default();
                    let child = Box::new(PayloadCodec::new(tag, self.ctx)?);

                    self.state = State::Payload { name, child };
                }
                State::Payload { name, child } => {
                    ready!(child.parse(cursor)?);

                    let Some(value) = child.finish() else {
                        return Ok(Status::Unfinished);
                    };

                    log::trace!(
                        "Decoded {} entry {name:?} at depth {}.",
                        value.tag(),
                        self.ctx.depth
                    );

                    let name = core::mem::take(name);
                    self.entries.push(Named { name, value });

                    self.state = State::Tag;
                }
                State::Done => return Ok(Status::Success),
            }
        }
    }

    fn finish(&mut self) -> Option<Compound> {
        if !self.is_done() {
            return None;
        }

        let compound = Compound {
            entries: core::mem::take(&mut self.entries),
        };
        self.reset();
        Some(compound)
    }

    fn reset(&mut self) {
        self.state = State::Tag;
        self.name.reset();
        self.entries.clear();
    }
}
