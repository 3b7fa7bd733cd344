//! Selection of a codec by tag.

use crate::{config::Config, value::Value};

use super::{
    Codec, Cursor, Error, Status,
    array::ArrayCodec,
    compound::CompoundCodec,
    list::ListCodec,
    scalar::{ByteOrder, ScalarCodec},
    string::StringCodec,
    tag::Tag,
};

/// Settings shared by a codec and every codec nested within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Byte order of every number.
    pub order: ByteOrder,
    /// Number of lists and compounds enclosing this codec.
    pub depth: usize,
    /// Limit on `depth`.
    pub max_depth: usize,
}

impl Context {
    /// Context for a value at the top of a document.
    pub fn new(config: &Config) -> Self {
        Self {
            order: config.edition.byte_order(),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Context for the contents of a list or compound opened here.
    pub(crate) fn nested(self) -> Result<Self, Error> {
        let depth = self.depth + 1;

        if depth > self.max_depth {
            Err(Error::DepthExceeded(self.max_depth))?;
        }

        Ok(Self { depth, ..self })
    }
}

/// Codec for an anonymous payload of any kind.
#[derive(Debug, Clone)]
pub enum PayloadCodec {
    Byte(ScalarCodec<i8>),
    Short(ScalarCodec<i16>),
    Int(ScalarCodec<i32>),
    Long(ScalarCodec<i64>),
    Float(ScalarCodec<f32>),
    Double(ScalarCodec<f64>),
    ByteArray(ArrayCodec<i8>),
    String(StringCodec),
    List(ListCodec),
    Compound(CompoundCodec),
    IntArray(ArrayCodec<i32>),
    LongArray(ArrayCodec<i64>),
}

impl PayloadCodec {
    /// Create the codec for payloads of a tag.
    ///
    /// Fails for [`Tag::End`], which has no payload, and for lists and
    /// compounds nested beyond the depth limit.
    pub fn new(tag: Tag, ctx: Context) -> Result<Self, Error> {
        let order = ctx.order;

        Ok(match tag {
            Tag::End => Err(Error::UnexpectedEnd)?,
            Tag::Byte => Self::Byte(ScalarCodec::new(order)),
            Tag::Short => Self::Short(ScalarCodec::new(order)),
            Tag::Int => Self::Int(ScalarCodec::new(order)),
            Tag::Long => Self::Long(ScalarCodec::new(order)),
            Tag::Float => Self::Float(ScalarCodec::new(order)),
            Tag::Double => Self::Double(ScalarCodec::new(order)),
            Tag::ByteArray => Self::ByteArray(ArrayCodec::new(order)),
            Tag::String => Self::String(StringCodec::new(order)),
            Tag::List => Self::List(ListCodec::new(ctx.nested()?)),
            Tag::Compound => Self::Compound(CompoundCodec::new(ctx.nested()?)),
            Tag::IntArray => Self::IntArray(ArrayCodec::new(order)),
            Tag::LongArray => Self::LongArray(ArrayCodec::new(order)),
        })
    }

    /// Create the codec for payloads of a wire id.
    pub fn from_id(id: u8, ctx: Context) -> Result<Self, Error> {
        let tag = Tag::from_id(id).ok_or(Error::UnknownTag(id))?;
        Self::new(tag, ctx)
    }

    /// The tag of the payload being decoded.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Byte(_) => Tag::Byte,
            Self::Short(_) => Tag::Short,
            Self::Int(_) => Tag::Int,
            Self::Long(_) => Tag::Long,
            Self::Float(_) => Tag::Float,
            Self::Double(_) => Tag::Double,
            Self::ByteArray(_) => Tag::ByteArray,
            Self::String(_) => Tag::String,
            Self::List(_) => Tag::List,
            Self::Compound(_) => Tag::Compound,
            Self::IntArray(_) => Tag::IntArray,
            Self::LongArray(_) => Tag::LongArray,
        }
    }
}

impl Codec for PayloadCodec {
    type Output = Value;

    fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<Status, Error> {
        match self {
            Self::Byte(c) => c.parse(cursor),
            Self::Short(c) => c.parse(cursor),
            Self::Int(c) => c.parse(cursor),
            Self::Long(c) => c.parse(cursor),
            Self::Float(c) => c.parse(cursor),
            Self::Double(c) => c.parse(cursor),
            Self::ByteArray(c) => c.parse(cursor),
            Self::String(c) => c.parse(cursor),
            Self::List(c) => c.parse(cursor),
            Self::Compound(c) => c.parse(cursor),
            Self::IntArray(c) => c.parse(cursor),
            Self::LongArray(c) => c.parse(cursor),
        }
    }

    fn finish(&mut self) -> Option<Value> {
        Some(match self {
            Self::Byte(c) => Value::Byte(c.finish()?),
            Self::Short(c) => Value::Short(c.finish()?),
            Self::Int(c) => Value::Int(c.finish()?),
            Self::Long(c) => Value::Long(c.finish()?),
            Self::Float(c) => Value::Float(c.finish()?),
            Self::Double(c) => Value::Double(c.finish()?),
            Self::ByteArray(c) => Value::ByteArray(c.finish()?),
            Self::String(c) => Value::String(c.finish()?),
            Self::List(c) => Value::List(c.finish()?),
            Self::Compound(c) => Value::Compound(c.finish()?),
            Self::IntArray(c) => Value::IntArray(c.finish()?),
            Self::LongArray(c) => Value::LongArray(c.finish()?),
        })
    }

    fn reset(&mut self) {
        match self {
            Self::Byte(c) => c.reset(),
            Self::Short(c) => c.reset(),
            Self::Int(c) => c.reset(),
            Self::Long(c) => c.reset(),
            Self::Float(c) => c.reset(),
            Self::Double(c) => c.reset(),
            Self::ByteArray(c) => c.reset(),
            Self::String(c) => c.reset(),
            Self::List(c) => c.reset(),
            Self::Compound(c) => c.reset(),
            Self::IntArray(c) => c.reset(),
            Self::LongArray(c) => c.reset(),
        }
    }
}
