//! Decoding of whole documents.

use alloc::string::String;

use crate::{config::Config, value::Named};

use super::{
    Codec, Cursor, Error, Status,
    error::ready,
    payload::{Context, PayloadCodec},
    string::StringCodec,
    tag::Tag,
};

#[derive(Debug, Clone)]
enum State {
    Tag,
    Name(Tag),
    Payload { name: String, child: PayloadCodec },
    Done(Named),
    Failed,
}

/// Resumable decoder of a document: a single named value, conventionally a
/// compound.
///
/// # Example
///
/// ```
/// let mut decoder = Decoder::new(Config::default());
///
/// for chunk in chunks {
///     if decoder.parse(&mut Cursor::new(chunk))?.is_success() {
///         break;
///     }
/// }
///
/// let root = decoder.finish();
/// ```
#[derive(Debug, Clone)]
pub struct Decoder {
    ctx: Context,
    expected: Option<Tag>,
    state: State,
    name: StringCodec,
}

impl Decoder {
    /// Create a decoder accepting a root of any kind.
    pub fn new(config: impl Into<Config>) -> Self {
        let ctx = Context::new(&config.into());

        Self {
            ctx,
            expected: None,
            state: State::Tag,
            name: StringCodec::new(ctx.order),
        }
    }

    /// Create a decoder accepting only a root of the given kind.
    pub fn expecting(config: impl Into<Config>, tag: Tag) -> Self {
        Self {
            expected: Some(tag),
            ..Self::new(config)
        }
    }

    /// The tag of the root, once read.
    pub fn tag(&self) -> Option<Tag> {
        match &self.state {
            State::Tag | State::Failed => None,
            State::Name(tag) => Some(*tag),
            State::Payload { child, .. } => Some(child.tag()),
            State::Done(root) => Some(root.value.tag()),
        }
    }

    /// Whether a previous call failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }

    fn advance(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        loop {
            match &mut self.state {
                State::Tag => {
                    let Some(id) = cursor.next_byte() else {
                        return Ok(Status::Unfinished);
                    };

                    let found = Tag::from_id(id).ok_or(Error::UnknownTag(id))?;
                    if found == Tag::End {
                        Err(Error::UnexpectedEnd)?;
                    }

                    if let Some(expected) = self.expected.filter(|&tag| tag != found) {
                        Err(Error::TagMismatch { expected, found })?;
                    }

                    self.state = State::Name(found);
                }
                State::Name(tag) => {
                    let tag = *tag;

                    ready!(self.name.parse(cursor)?);
                    let name = self.name.finish().unwrap_or_default();
                    let child = PayloadCodec::new(tag, self.ctx)?;

                    self.state = State::Payload { name, child };
                }
                State::Payload { name, child } => {
                    ready!(child.parse(cursor)?);

                    let Some(value) = child.finish() else {
                        return Ok(Status::Unfinished);
                    };

                    let root = Named {
                        name: core::mem::take(name),
                        value,
                    };
                    log::debug!("Decoded {} document {:?}.", root.value.tag(), root.name);

                    self.state = State::Done(root);
                }
                State::Done(_) => return Ok(Status::Success),
                State::Failed => Err(Error::Poisoned)?,
            }
        }
    }
}

impl Codec for Decoder {
    type Output = Named;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        self.advance(cursor).inspect_err(|err| {
            if !self.is_failed() {
                log::warn!("Failed to decode document: {err}");
                self.state = State::Failed;
            }
        })
    }

    fn finish(&mut self) -> Option<Named> {
        match core::mem::replace(&mut self.state, State::Tag) {
            State::Done(root) => {
                self.name.reset();
                Some(root)
            }
            state => {
                self.state = state;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.state = State::Tag;
        self.name.reset();
    }
}
