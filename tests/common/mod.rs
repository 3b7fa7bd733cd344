#![allow(dead_code)]

use nbtflow::{
    config::Edition,
    sans::Tag,
    value::{Compound, List, Named, Value},
};

/// Encode a document, mirroring the decoder, for use as test input.
pub fn encode(root: &Named, edition: Edition) -> Vec<u8> {
    let mut w = Writer {
        out: Vec::new(),
        big: edition == Edition::Java,
    };

    w.out.push(root.value.tag().id());
    w.string(&root.name);
    w.payload(&root.value);
    w.out
}

struct Writer {
    out: Vec<u8>,
    big: bool,
}

macro_rules! put {
    ($w:expr, $v:expr) => {{
        let v = $v;
        let bytes = if $w.big { v.to_be_bytes() } else { v.to_le_bytes() };
        $w.out.extend_from_slice(&bytes);
    }};
}

impl Writer {
    fn string(&mut self, s: &str) {
        put!(self, s.len() as u16);
        self.out.extend_from_slice(s.as_bytes());
    }

    fn payload(&mut self, value: &Value) {
        match value {
            Value::Byte(v) => put!(self, *v),
            Value::Short(v) => put!(self, *v),
            Value::Int(v) => put!(self, *v),
            Value::Long(v) => put!(self, *v),
            Value::Float(v) => put!(self, v.to_bits()),
            Value::Double(v) => put!(self, v.to_bits()),
            Value::ByteArray(v) => {
                put!(self, v.len() as i32);
                v.iter().for_each(|x| put!(self, *x));
            }
            Value::String(v) => self.string(v),
            Value::List(list) => {
                self.out.push(list.kind.id());
                put!(self, list.items.len() as i32);
                list.items.iter().for_each(|x| self.payload(x));
            }
            Value::Compound(compound) => {
                for entry in &compound.entries {
                    self.out.push(entry.value.tag().id());
                    self.string(&entry.name);
                    self.payload(&entry.value);
                }
                self.out.push(Tag::End.id());
            }
            Value::IntArray(v) => {
                put!(self, v.len() as i32);
                v.iter().for_each(|x| put!(self, *x));
            }
            Value::LongArray(v) => {
                put!(self, v.len() as i32);
                v.iter().for_each(|x| put!(self, *x));
            }
        }
    }
}

pub fn compound(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Value {
    Value::Compound(
        entries
            .into_iter()
            .map(|(name, value)| Named::new(name, value))
            .collect::<Compound>(),
    )
}

pub fn list(kind: Tag, items: Vec<Value>) -> Value {
    Value::List(List { kind, items })
}

/// A document exercising every kind, with lists of compounds nested inside
/// compounds.
pub fn level() -> Named {
    let player = |name: &'static str, health: f32, pos: [f64; 3]| {
        compound([
            ("Name", Value::String(name.to_string())),
            ("Health", Value::Float(health)),
            ("Pos", list(Tag::Double, pos.map(Value::Double).to_vec())),
            ("OnGround", Value::Byte(1)),
        ])
    };

    Named::new(
        "Level",
        compound([
            ("Version", Value::Int(19133)),
            ("Seed", Value::Long(-4_530_634_556_500_121_041)),
            ("SpawnY", Value::Short(-64)),
            ("Difficulty", Value::Byte(-2)),
            ("DayTime", Value::Double(6000.25)),
            ("LevelName", Value::String("Nouvelle Région".to_string())),
            ("Empty", Value::String(String::new())),
            ("Flags", Value::ByteArray(vec![1, -1, 0, 127, -128])),
            ("Heights", Value::IntArray(vec![64, -64, i32::MAX, i32::MIN])),
            ("Blocks", Value::LongArray(vec![0, -1, i64::MAX])),
            (
                "Players",
                list(
                    Tag::Compound,
                    vec![
                        player("Alex", 20.0, [0.5, 64.0, -12.75]),
                        player("Steve", 7.5, [-100.0, 70.0, 3.0]),
                    ],
                ),
            ),
            (
                "Matrix",
                list(
                    Tag::List,
                    vec![
                        list(Tag::Int, vec![Value::Int(1), Value::Int(2)]),
                        list(Tag::End, vec![]),
                    ],
                ),
            ),
            ("Nothing", list(Tag::End, vec![])),
            ("Inner", compound([("Inner", compound([]))])),
            ("Dup", Value::Int(1)),
            ("Dup", Value::Int(2)),
        ]),
    )
}

/// Parse hexadecimal bytes, ignoring whitespace.
pub fn hex(s: &str) -> Vec<u8> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    digits
        .chunks(2)
        .map(|pair| u8::from_str_radix(std::str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}
