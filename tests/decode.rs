mod common;

use common::{compound, encode, hex, level, list};
use nbtflow::{
    avec,
    config::{Config, DEFAULT_MAX_DEPTH, Edition},
    sans::{self, Codec, Cursor, Decoder, Status, Tag},
    value::{Named, Value},
};

fn decode_one(bytes: &[u8], edition: Edition) -> Named {
    let (root, rest) = avec::decode_slice(bytes, edition).unwrap();
    assert!(rest.is_empty());
    root
}

fn decode_err(bytes: &[u8], config: impl Into<Config>) -> sans::Error {
    match avec::decode_slice(bytes, config) {
        Err(avec::slice::Error::Decode(err)) => err,
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn named_int() {
    let bytes = [0x03, 0x00, 0x03, b'I', b'n', b't', 0x00, 0x00, 0x00, 0x2A];

    let mut decoder = Decoder::new(Edition::Java);
    let mut cursor = Cursor::new(&bytes);

    assert_eq!(decoder.parse(&mut cursor), Ok(Status::Success));
    assert_eq!(cursor.remaining(), 0);
    assert_eq!(decoder.finish(), Some(Named::new("Int", Value::Int(42))));
}

#[test]
fn anonymous_string() {
    let bytes = [0x08, 0x00, 0x00, 0x00, 0x05, b'H', b'e', b'l', b'l', b'o'];
    let root = decode_one(&bytes, Edition::Java);

    assert_eq!(root.name, "");
    assert_eq!(root.value, Value::String("Hello".to_string()));
}

#[test]
fn int_array() {
    let bytes = hex("0B 0000 00000002 00000001 FFFFFFFE");
    let root = decode_one(&bytes, Edition::Java);

    assert_eq!(root.value, Value::IntArray(vec![1, -2]));
}

#[test]
fn empty_compound_payload() {
    let ctx = sans::Context::new(&Config::default());
    let mut codec = sans::PayloadCodec::new(Tag::Compound, ctx).unwrap();
    let mut cursor = Cursor::new(&[0x00]);

    assert_eq!(codec.parse(&mut cursor), Ok(Status::Success));
    assert!(cursor.is_empty());

    let value = codec.finish().unwrap();
    assert!(value.as_compound().unwrap().is_empty());
}

#[test]
fn endianness() {
    let n: i64 = -0x0123_4567_89AB_CDEF;

    let mut java = vec![0x04, 0x00, 0x00];
    java.extend_from_slice(&n.to_be_bytes());

    let mut bedrock = vec![0x04, 0x00, 0x00];
    bedrock.extend_from_slice(&n.to_le_bytes());

    assert_eq!(decode_one(&java, Edition::Java).value, Value::Long(n));
    assert_eq!(decode_one(&bedrock, Edition::Bedrock).value, Value::Long(n));
}

#[test]
fn whole_document_both_editions() {
    let root = level();

    for edition in [Edition::Java, Edition::Bedrock] {
        let bytes = encode(&root, edition);
        assert_eq!(decode_one(&bytes, edition), root);
    }
}

#[test]
fn compound_lookup_keeps_duplicates() {
    let root = level();
    let bytes = encode(&root, Edition::Java);
    let decoded = decode_one(&bytes, Edition::Java);
    let level = decoded.value.as_compound().unwrap();

    assert_eq!(level.get("Dup"), Some(&Value::Int(1)));
    assert_eq!(
        level.get_all("Dup").collect::<Vec<_>>(),
        [&Value::Int(1), &Value::Int(2)]
    );
    assert!(!level.contains_key("Missing"));

    let names: Vec<_> = level.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Version"));
    assert_eq!(names.last(), Some(&"Dup"));

    let players = level.get("Players").and_then(Value::as_list).unwrap();
    assert_eq!(players.kind, Tag::Compound);
    assert_eq!(players.len(), 2);

    let steve = players.get(1).and_then(Value::as_compound).unwrap();
    assert_eq!(steve.get("Name").and_then(Value::as_str), Some("Steve"));
    assert_eq!(steve.get("Health").and_then(Value::as_f32), Some(7.5));
    assert_eq!(steve.get("OnGround").and_then(Value::as_bool), Some(true));
}

#[test]
fn trailing_bytes_are_returned() {
    let mut bytes = encode(&Named::new("", Value::Byte(7)), Edition::Java);
    bytes.extend_from_slice(&[0xDE, 0xAD]);

    let (root, rest) = avec::decode_slice(&bytes, Edition::Java).unwrap();

    assert_eq!(root.value, Value::Byte(7));
    assert_eq!(rest, [0xDE_u8, 0xAD]);
}

#[test]
fn truncated_slice() {
    let bytes = encode(&level(), Edition::Java);

    assert!(matches!(
        avec::decode_slice(&bytes[..bytes.len() - 1], Edition::Java),
        Err(avec::slice::Error::EndOfSlice)
    ));
}

#[test]
fn unknown_tag_in_compound() {
    // Root compound whose first entry claims tag 13.
    let bytes = hex("0A 0000 0D 0001 61 00");

    assert_eq!(decode_err(&bytes, Edition::Java), sans::Error::UnknownTag(13));
}

#[test]
fn unknown_root_tag() {
    assert_eq!(decode_err(&[0xFF], Edition::Java), sans::Error::UnknownTag(0xFF));
}

#[test]
fn end_at_root() {
    assert_eq!(decode_err(&[0x00], Edition::Java), sans::Error::UnexpectedEnd);
}

#[test]
fn unknown_list_kind() {
    let bytes = hex("09 0000 2A 00000001");

    assert_eq!(decode_err(&bytes, Edition::Java), sans::Error::UnknownTag(0x2A));
}

#[test]
fn untyped_list() {
    let bytes = hex("09 0000 00 00000003");

    assert_eq!(decode_err(&bytes, Edition::Java), sans::Error::UntypedList(3));
}

#[test]
fn negative_lengths() {
    let array = hex("07 0000 FFFFFFFF");
    let list = hex("09 0000 01 80000000");

    assert_eq!(decode_err(&array, Edition::Java), sans::Error::NegativeLength(-1));
    assert_eq!(
        decode_err(&list, Edition::Java),
        sans::Error::NegativeLength(i32::MIN)
    );
}

#[test]
fn huge_declared_length_does_not_preallocate() {
    // Declares two billion longs but supplies none.
    let bytes = hex("0C 0000 7FFFFFFF");

    let mut decoder = Decoder::new(Edition::Java);
    let status = decoder.parse(&mut Cursor::new(&bytes));

    assert_eq!(status, Ok(Status::Unfinished));
}

#[test]
fn depth_limit() {
    // Three lists around a list of one compound: five levels in all.
    let mut value = list(Tag::Compound, vec![compound([])]);
    for _ in 0..3 {
        value = list(Tag::List, vec![value]);
    }
    let root = Named::new("", value);
    let bytes = encode(&root, Edition::Java);

    let shallow = Config::new(Edition::Java).with_max_depth(4);
    assert_eq!(decode_err(&bytes, shallow), sans::Error::DepthExceeded(4));

    let exact = Config::new(Edition::Java).with_max_depth(5);
    let (decoded, rest) = avec::decode_slice(&bytes, exact).unwrap();
    assert_eq!(decoded, root);
    assert!(rest.is_empty());
}

#[test]
fn depth_limit_default_single_bytes() {
    fn nested(levels: usize) -> Vec<u8> {
        // `levels - 1` lists of lists around a compound.
        let mut value = compound([]);
        if levels > 1 {
            value = list(Tag::Compound, vec![value]);
            for _ in 2..levels {
                value = list(Tag::List, vec![value]);
            }
        }
        encode(&Named::new("", value), Edition::Java)
    }

    let fits = nested(DEFAULT_MAX_DEPTH);
    let root = avec::decode_chunks(fits.chunks(1), Edition::Java).unwrap();
    assert_eq!(root.value.tag(), Tag::List);

    let deep = nested(DEFAULT_MAX_DEPTH + 1);
    assert!(matches!(
        avec::decode_chunks(deep.chunks(1), Edition::Java),
        Err(avec::slice::Error::Decode(sans::Error::DepthExceeded(DEFAULT_MAX_DEPTH)))
    ));
}

#[test]
fn expected_root_tag() {
    let bytes = encode(&Named::new("x", Value::Int(1)), Edition::Java);

    let mut decoder = Decoder::expecting(Edition::Java, Tag::Compound);
    assert_eq!(
        decoder.parse(&mut Cursor::new(&bytes)),
        Err(sans::Error::TagMismatch {
            expected: Tag::Compound,
            found: Tag::Int,
        })
    );

    let mut decoder = Decoder::expecting(Edition::Java, Tag::Int);
    assert_eq!(decoder.parse(&mut Cursor::new(&bytes)), Ok(Status::Success));
    assert_eq!(decoder.tag(), Some(Tag::Int));
}

#[test]
fn failure_is_terminal_until_reset() {
    let mut decoder = Decoder::new(Edition::Java);

    assert_eq!(
        decoder.parse(&mut Cursor::new(&[0x20])),
        Err(sans::Error::UnknownTag(0x20))
    );
    assert!(decoder.is_failed());

    let good = encode(&Named::new("", Value::Short(-3)), Edition::Java);
    assert_eq!(
        decoder.parse(&mut Cursor::new(&good)),
        Err(sans::Error::Poisoned)
    );

    decoder.reset();
    assert_eq!(decoder.parse(&mut Cursor::new(&good)), Ok(Status::Success));
    assert_eq!(decoder.finish().map(|root| root.value), Some(Value::Short(-3)));
}

#[test]
fn success_is_idempotent() {
    let bytes = encode(&Named::new("", Value::Int(5)), Edition::Java);
    let mut decoder = Decoder::new(Edition::Java);

    assert_eq!(decoder.parse(&mut Cursor::new(&bytes)), Ok(Status::Success));

    let mut extra = Cursor::new(&[1, 2, 3]);
    assert_eq!(decoder.parse(&mut extra), Ok(Status::Success));
    assert_eq!(extra.remaining(), 3);

    assert_eq!(decoder.finish().map(|root| root.value), Some(Value::Int(5)));
    assert_eq!(decoder.finish(), None);
}

#[test]
fn reused_after_finish() {
    let first = encode(&Named::new("a", Value::Byte(1)), Edition::Bedrock);
    let second = encode(&level(), Edition::Bedrock);
    let mut decoder = Decoder::new(Edition::Bedrock);

    assert!(decoder.parse(&mut Cursor::new(&first)).unwrap().is_success());
    assert_eq!(decoder.finish().unwrap().name, "a");

    assert!(decoder.parse(&mut Cursor::new(&second)).unwrap().is_success());
    assert_eq!(decoder.finish(), Some(level()));
}

#[test]
fn invalid_utf8_is_replaced() {
    let bytes = hex("08 0000 0002 C328");
    let root = decode_one(&bytes, Edition::Java);

    assert_eq!(root.value, Value::String("\u{FFFD}(".to_string()));
}

#[test]
fn value_accessors() {
    let mut compound = nbtflow::value::Compound::new();
    compound.push(Named::new("list", Value::List(nbtflow::value::List::new(Tag::End))));
    compound.push(Named::new("bytes", Value::ByteArray(vec![1, 0])));
    compound.push(Named::new("list", Value::Long(3)));

    let list = compound.get("list").and_then(Value::as_list).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.kind, Tag::End);

    assert_eq!(compound.get_all("list").count(), 2);
    assert_eq!(compound.get("bytes").and_then(Value::as_byte_array), Some(&[1, 0][..]));
    assert_eq!(compound.get("bytes").and_then(Value::as_i8), None);
    assert_eq!(Value::Byte(0).as_bool(), Some(false));
    assert_eq!(Value::Double(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::Int(0).tag(), Tag::Int);
}
