//! Decoded value tree.
//!
//! Every value owns its storage outright; dropping the root releases the whole
//! tree.

use alloc::{string::String, vec::Vec};

use crate::sans::tag::Tag;

/// A decoded payload of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The tag identifying this kind of value on the wire.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// The number held by a byte.
    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    /// A byte viewed as a boolean, where any nonzero byte is `true`.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_i8().map(|v| v != 0)
    }

    /// The number held by a short.
    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    /// The number held by an int.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The number held by a long.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// The number held by a float.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The number held by a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The text held by a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// The elements of a byte array.
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    /// The elements of an int array.
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// The elements of a long array.
    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    /// The contents of a list.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// The contents of a compound.
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// A value with a name, as found in compounds and at the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct Named {
    /// Name, possibly empty.
    pub name: String,
    /// Payload.
    pub value: Value,
}

impl Named {
    /// Pair a name with a value.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An ordered sequence of anonymous values of a single kind.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    /// Kind of every element. Empty lists may carry [`Tag::End`].
    pub kind: Tag,
    /// Elements in decoded order.
    pub items: Vec<Value>,
}

impl List {
    /// An empty list of the given kind.
    pub fn new(kind: Tag) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at an index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Named entries in the order they were decoded.
///
/// Names are not required to be unique. Lookups by name return the first
/// matching entry; [`Compound::get_all`] yields every match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    /// Entries in decoded order.
    pub entries: Vec<Named>,
}

impl Compound {
    /// An empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the compound has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value of the first entry with this name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// The values of every entry with this name, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Whether any entry has this name.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append an entry, keeping any earlier entry of the same name.
    pub fn push(&mut self, entry: Named) {
        self.entries.push(entry);
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, Named> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Named;
    type IntoIter = core::slice::Iter<'a, Named>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Named> for Compound {
    fn from_iter<I: IntoIterator<Item = Named>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
