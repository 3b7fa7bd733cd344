//! The registry of tag ids.

use core::fmt;

/// One-byte discriminator identifying the kind of a value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Terminates the entries of a compound. Carries no payload.
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

/// Every tag, indexed by wire id.
pub const TAGS: [Tag; 13] = [
    Tag::End,
    Tag::Byte,
    Tag::Short,
    Tag::Int,
    Tag::Long,
    Tag::Float,
    Tag::Double,
    Tag::ByteArray,
    Tag::String,
    Tag::List,
    Tag::Compound,
    Tag::IntArray,
    Tag::LongArray,
];

const NAMES: [&str; 13] = [
    "TAG_End",
    "TAG_Byte",
    "TAG_Short",
    "TAG_Int",
    "TAG_Long",
    "TAG_Float",
    "TAG_Double",
    "TAG_Byte_Array",
    "TAG_String",
    "TAG_List",
    "TAG_Compound",
    "TAG_Int_Array",
    "TAG_Long_Array",
];

impl Tag {
    /// Look up the tag bound to a wire id, if any.
    pub fn from_id(id: u8) -> Option<Tag> {
        TAGS.get(id as usize).copied()
    }

    /// The wire id of this tag.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The conventional name of this tag, such as `TAG_Int_Array`.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Number of payload bytes for fixed-width kinds.
    ///
    /// Returns `None` for variable-width kinds and for [`Tag::End`].
    pub const fn payload_size(self) -> Option<usize> {
        match self {
            Tag::Byte => Some(1),
            Tag::Short => Some(2),
            Tag::Int | Tag::Float => Some(4),
            Tag::Long | Tag::Double => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Tag::from_id(id).ok_or(id)
    }
}
