use eosabi_codec::{BuiltinType, CodecError, Cursor, decode_builtin};
use eosabi_core::Value;

// ── helpers ──────────────────────────────────────────────────────────────────

fn decode(name: &str, data: &[u8]) -> Result<Value, CodecError> {
    let mut cursor = Cursor::from_slice(data);
    decode_builtin(name, &mut cursor).expect("builtin type")
}

fn decode_all(name: &str, data: &[u8]) -> (Value, usize) {
    let mut cursor = Cursor::from_slice(data);
    let value = decode_builtin(name, &mut cursor)
        .expect("builtin type")
        .expect("decode should succeed");
    (value, cursor.offset())
}

// ── integers ─────────────────────────────────────────────────────────────────

#[test]
fn decodes_fixed_width_integers_little_endian() {
    assert_eq!(decode("int8", &[0xfe]).unwrap(), Value::I8(-2));
    assert_eq!(decode("uint8", &[0xfe]).unwrap(), Value::U8(254));
    assert_eq!(
        decode("int16", &(-1234i16).to_le_bytes()).unwrap(),
        Value::I16(-1234)
    );
    assert_eq!(
        decode("uint16", &0xbeefu16.to_le_bytes()).unwrap(),
        Value::U16(0xbeef)
    );
    assert_eq!(
        decode("int32", &i32::MIN.to_le_bytes()).unwrap(),
        Value::I32(i32::MIN)
    );
    assert_eq!(
        decode("uint32", &0xdead_beefu32.to_le_bytes()).unwrap(),
        Value::U32(0xdead_beef)
    );
    assert_eq!(
        decode("int64", &(-42i64).to_le_bytes()).unwrap(),
        Value::I64(-42)
    );
    assert_eq!(
        decode("uint64", &u64::MAX.to_le_bytes()).unwrap(),
        Value::U64(u64::MAX)
    );
}

#[test]
fn decodes_128_bit_integers_as_decimal_text() {
    let value = decode("uint128", &u128::MAX.to_le_bytes()).unwrap();
    assert_eq!(value, Value::U128(u128::MAX));
    assert_eq!(
        value.to_json(),
        serde_json::Value::String("340282366920938463463374607431768211455".to_string())
    );

    let value = decode("int128", &(-5i128).to_le_bytes()).unwrap();
    assert_eq!(value.to_json(), serde_json::Value::String("-5".to_string()));
}

#[test]
fn bool_is_nonzero_byte() {
    assert_eq!(decode("bool", &[0]).unwrap(), Value::Bool(false));
    assert_eq!(decode("bool", &[1]).unwrap(), Value::Bool(true));
    assert_eq!(decode("bool", &[7]).unwrap(), Value::Bool(true));
}

// ── varints ──────────────────────────────────────────────────────────────────

#[test]
fn decodes_varuint32_multi_byte() {
    assert_eq!(decode_all("varuint32", &[0x00]), (Value::U32(0), 1));
    assert_eq!(decode_all("varuint32", &[0x7f]), (Value::U32(127), 1));
    assert_eq!(decode_all("varuint32", &[0x80, 0x01]), (Value::U32(128), 2));
    assert_eq!(decode_all("varuint32", &[0xd5, 0x01, 0xff]), (Value::U32(213), 2));
    assert_eq!(
        decode_all("varuint32", &[0xff, 0xff, 0xff, 0xff, 0x0f]),
        (Value::U32(u32::MAX), 5)
    );
}

#[test]
fn varint32_reinterprets_unsigned_magnitude() {
    let (value, _) = decode_all("varint32", &[0xff, 0xff, 0xff, 0xff, 0x0f]);
    assert_eq!(value, Value::I32(-1));
    let (value, _) = decode_all("varint32", &[0x05]);
    assert_eq!(value, Value::I32(5));
}

#[test]
fn varuint32_rejects_overlong_encoding() {
    let err = decode("varuint32", &[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]).expect_err("too long");
    assert!(matches!(err, CodecError::InvalidEncoding { offset: 0, .. }));

    let err = decode("varuint32", &[0xff, 0xff, 0xff, 0xff, 0x1f]).expect_err("overflow");
    assert!(matches!(err, CodecError::InvalidEncoding { .. }));
}

#[test]
fn varuint32_truncated_is_end_of_stream() {
    let err = decode("varuint32", &[0x80, 0x80]).expect_err("truncated");
    assert_eq!(
        err,
        CodecError::UnexpectedEnd {
            offset: 2,
            needed: 1,
            remaining: 0
        }
    );
}

// ── floats ───────────────────────────────────────────────────────────────────

#[test]
fn decodes_ieee_floats() {
    assert_eq!(
        decode("float32", &1.5f32.to_bits().to_le_bytes()).unwrap(),
        Value::F32(1.5)
    );
    assert_eq!(
        decode("float64", &(-0.25f64).to_bits().to_le_bytes()).unwrap(),
        Value::F64(-0.25)
    );
    let raw = 0x3fff_0000_0000_0000_0000_0000_0000_0000u128;
    assert_eq!(
        decode("float128", &raw.to_le_bytes()).unwrap(),
        Value::U128(raw)
    );
}

// ── byte strings ─────────────────────────────────────────────────────────────

#[test]
fn decodes_length_prefixed_bytes_and_strings() {
    let (value, consumed) = decode_all("bytes", &[0x03, 0xaa, 0xbb, 0xcc, 0xdd]);
    assert_eq!(value, Value::bytes([0xaa, 0xbb, 0xcc]));
    assert_eq!(consumed, 4);

    let (value, _) = decode_all("string", b"\x05hello");
    assert_eq!(value, Value::string("hello"));

    let (value, consumed) = decode_all("string", &[0x00]);
    assert_eq!(value, Value::string(""));
    assert_eq!(consumed, 1);
}

#[test]
fn string_rejects_invalid_utf8() {
    let err = decode("string", &[0x02, 0xc3, 0x28]).expect_err("invalid utf-8");
    assert!(matches!(err, CodecError::InvalidEncoding { offset: 0, .. }));
}

#[test]
fn bytes_shorter_than_prefix_is_end_of_stream() {
    let err = decode("bytes", &[0x04, 0x01, 0x02]).expect_err("truncated");
    assert_eq!(
        err,
        CodecError::UnexpectedEnd {
            offset: 1,
            needed: 4,
            remaining: 2
        }
    );
}

// ── time ─────────────────────────────────────────────────────────────────────

#[test]
fn decodes_time_point_microseconds() {
    let micros: i64 = 1_527_854_400_000_000;
    assert_eq!(
        decode("time_point", &micros.to_le_bytes()).unwrap(),
        Value::string("2018-06-01T12:00:00Z")
    );
    assert_eq!(
        decode("time_point", &(micros + 250_000).to_le_bytes()).unwrap(),
        Value::string("2018-06-01T12:00:00.250Z")
    );
}

#[test]
fn decodes_time_point_sec_from_eight_bytes() {
    let (value, consumed) = decode_all("time_point_sec", &1_527_854_400i64.to_le_bytes());
    assert_eq!(value, Value::string("2018-06-01T12:00:00Z"));
    assert_eq!(consumed, 8);
}

#[test]
fn decodes_block_timestamp_slots() {
    assert_eq!(
        decode("block_timestamp_type", &0u32.to_le_bytes()).unwrap(),
        Value::string("2000-01-01T00:00:00Z")
    );
    assert_eq!(
        decode("block_timestamp_type", &3u32.to_le_bytes()).unwrap(),
        Value::string("2000-01-01T00:00:01.500Z")
    );
}

// ── builtin table ────────────────────────────────────────────────────────────

#[test]
fn builtin_table_round_trips_names() {
    for ty in BuiltinType::ALL {
        assert_eq!(BuiltinType::from_name(ty.name()), Some(ty));
    }
    assert_eq!(BuiltinType::from_name("transfer"), None);
    assert_eq!(BuiltinType::from_name("uint32[]"), None);
    assert!(decode_builtin("authority", &mut Cursor::from_slice(&[])).is_none());
}

#[test]
fn typed_builtin_decodes_from_shared_cursor() {
    let mut cursor = Cursor::from_slice(&[0x2a, 0x00, 0x00, 0x00, 0xff]);
    assert_eq!(BuiltinType::Uint32.decode(&mut cursor), Ok(Value::U32(42)));
    assert!(!cursor.is_empty());

    let mut cursor = Cursor::from_slice(&hex::decode("0000000000ea3055").expect("valid hex"));
    assert_eq!(BuiltinType::Name.decode(&mut cursor), Ok(Value::string("eosio")));
    assert!(cursor.is_empty());
    assert!(matches!(
        BuiltinType::Name.decode(&mut cursor),
        Err(CodecError::UnexpectedEnd { offset: 8, needed: 8, remaining: 0 })
    ));
}

#[test]
fn every_fixed_width_builtin_fails_cleanly_when_truncated() {
    let widths = [
        ("int16", 2),
        ("uint32", 4),
        ("int64", 8),
        ("uint128", 16),
        ("float64", 8),
        ("time_point", 8),
        ("block_timestamp_type", 4),
        ("name", 8),
        ("checksum256", 32),
        ("public_key", 34),
        ("signature", 65),
        ("symbol", 8),
        ("asset", 16),
        ("extended_asset", 24),
    ];
    for (name, width) in widths {
        let data = vec![0u8; width - 1];
        let err = decode(name, &data).expect_err("truncated input should fail");
        assert!(
            matches!(err, CodecError::UnexpectedEnd { .. }),
            "{name}: unexpected error {err:?}"
        );
    }
}
