use eosabi_codec::{CodecError, Cursor, base58_check_encode, decode_builtin, name_to_string};
use eosabi_core::Value;

// ── helpers ──────────────────────────────────────────────────────────────────

fn decode_hex(name: &str, hex_data: &str) -> Result<Value, CodecError> {
    let data = hex::decode(hex_data).expect("valid hex");
    let mut cursor = Cursor::from_slice(&data);
    decode_builtin(name, &mut cursor).expect("builtin type")
}

fn symbol_bytes(precision: u8, code: &str) -> Vec<u8> {
    let mut raw = vec![precision];
    raw.extend_from_slice(code.as_bytes());
    raw.resize(8, 0);
    raw
}

// ── name ─────────────────────────────────────────────────────────────────────

#[test]
fn decodes_names() {
    assert_eq!(
        decode_hex("name", "a01861fc499b8969").unwrap(),
        Value::string("ha4tqmjwg4ge")
    );
    assert_eq!(
        decode_hex("name", "0000000000ea3055").unwrap(),
        Value::string("eosio")
    );
    assert_eq!(
        decode_hex("name", "0000735802ea3055").unwrap(),
        Value::string("eosio.msig")
    );
}

#[test]
fn empty_name_renders_as_empty_string() {
    assert_eq!(name_to_string(0), "");
    assert_eq!(
        decode_hex("name", "0000000000000000").unwrap(),
        Value::string("")
    );
}

#[test]
fn thirteenth_character_uses_four_bits() {
    // Low nibble 0x0f selects 'j' for the final character.
    assert_eq!(name_to_string(0x0f), "............j");
}

// ── symbol / asset ───────────────────────────────────────────────────────────

#[test]
fn decodes_symbol_precision_and_code() {
    let mut cursor = Cursor::from_slice(&symbol_bytes(4, "EOS"));
    let value = decode_builtin("symbol", &mut cursor).unwrap().unwrap();
    assert_eq!(value, Value::string("4,EOS"));
    assert_eq!(cursor.offset(), 8);
}

#[test]
fn symbol_rejects_precision_above_eighteen() {
    let mut cursor = Cursor::from_slice(&symbol_bytes(19, "EOS"));
    let err = decode_builtin("symbol", &mut cursor).unwrap().expect_err("bad precision");
    assert!(matches!(err, CodecError::InvalidEncoding { offset: 0, .. }));
}

#[test]
fn symbol_code_reads_bytes_after_the_first() {
    let value = decode_hex("symbol_code", "00454f5300000000").unwrap();
    assert_eq!(value, Value::string("EOS"));
}

#[test]
fn decodes_asset_with_fixed_point_amount() {
    let mut data = 43_999_960u64.to_le_bytes().to_vec();
    data.extend(symbol_bytes(4, "EOS"));
    let mut cursor = Cursor::from_slice(&data);
    let value = decode_builtin("asset", &mut cursor).unwrap().unwrap();
    assert_eq!(value, Value::string("4399.9960 EOS"));
}

#[test]
fn asset_amount_smaller_than_precision_is_zero_padded() {
    let mut data = 5u64.to_le_bytes().to_vec();
    data.extend(symbol_bytes(4, "SYS"));
    let mut cursor = Cursor::from_slice(&data);
    let value = decode_builtin("asset", &mut cursor).unwrap().unwrap();
    assert_eq!(value, Value::string("0.0005 SYS"));
}

#[test]
fn asset_with_zero_precision_has_no_decimal_point() {
    let mut data = 1200u64.to_le_bytes().to_vec();
    data.extend(symbol_bytes(0, "TOK"));
    let mut cursor = Cursor::from_slice(&data);
    let value = decode_builtin("asset", &mut cursor).unwrap().unwrap();
    assert_eq!(value, Value::string("1200 TOK"));
}

#[test]
fn decodes_asset_from_buyram_payload() {
    let value = decode_hex("asset", "5cd542000000000004454f5300000000").unwrap();
    assert_eq!(value, Value::string("437.9996 EOS"));
}

#[test]
fn decodes_extended_asset_with_contract() {
    let value = decode_hex(
        "extended_asset",
        "a08601000000000004454f5300000000a6823403ea3055",
    );
    // 23 bytes: the contract name is one byte short.
    assert!(matches!(value, Err(CodecError::UnexpectedEnd { .. })));

    let value = decode_hex(
        "extended_asset",
        "a08601000000000004454f53000000000000000000ea3055",
    )
    .unwrap();
    assert_eq!(
        value,
        Value::Struct(vec![
            ("quantity".to_string(), Value::string("10.0000 EOS")),
            ("contract".to_string(), Value::string("eosio")),
        ])
    );
}

// ── keys / signatures / checksums ────────────────────────────────────────────

#[test]
fn decodes_legacy_public_keys() {
    assert_eq!(
        decode_hex(
            "public_key",
            "0003350529efca8c607421e95846cc2a3d2efaa8454018deb75a204e27acf29ee5cc"
        )
        .unwrap(),
        Value::string("EOS7EarnUhcyYqmdnPon8rm7mBCTnBoot6o7fE2WzjvEX2TdggbL3")
    );
    assert_eq!(
        decode_hex(
            "public_key",
            "000362a6a7e46c62856973506a0c9cd9311b7829c563a1f39f8ebcb0d1618e527b0f"
        )
        .unwrap(),
        Value::string("EOS7agSKkiM1bUz4vJZ5DB6eMNZUjridajqggr8hrPXaL63mTuL5E")
    );
}

#[test]
fn decodes_r1_public_key_with_suffixed_checksum() {
    assert_eq!(
        decode_hex(
            "public_key",
            "0103350529efca8c607421e95846cc2a3d2efaa8454018deb75a204e27acf29ee5cc"
        )
        .unwrap(),
        Value::string("PUB_R1_7EarnUhcyYqmdnPon8rm7mBCTnBoot6o7fE2WzjvEX2Tf8Vbyi")
    );
}

#[test]
fn rejects_unknown_public_key_type() {
    let mut data = vec![0x07];
    data.extend([0u8; 33]);
    let mut cursor = Cursor::from_slice(&data);
    let err = decode_builtin("public_key", &mut cursor)
        .unwrap()
        .expect_err("unknown key type");
    assert!(matches!(err, CodecError::InvalidEncoding { offset: 0, .. }));
}

#[test]
fn decodes_signature_with_prefix() {
    let raw: Vec<u8> = (0u8..65).collect();
    let mut cursor = Cursor::from_slice(&raw);
    let value = decode_builtin("signature", &mut cursor).unwrap().unwrap();
    assert_eq!(
        value,
        Value::string(
            "SIG_18eZoZozC16DxAWsfGzwNnJfZkCJ3Yw3VEogWoNy59BmoiJN734Q65SP7pvu88BSxoNUG691Agzde6e742NK27AzPmtLY"
        )
    );
    assert_eq!(cursor.offset(), 65);
}

#[test]
fn base58_check_appends_ripemd160_checksum() {
    use ripemd::{Digest, Ripemd160};

    let encoded = base58_check_encode(&[1, 2, 3], b"K1");
    let decoded = bs58::decode(&encoded).into_vec().expect("valid base58");
    assert_eq!(decoded.len(), 7);
    assert_eq!(&decoded[..3], &[1, 2, 3]);

    let digest = Ripemd160::new().chain_update([1, 2, 3]).chain_update(b"K1").finalize();
    assert_eq!(&decoded[3..], &digest[..4]);
}

#[test]
fn checksums_are_raw_byte_blobs() {
    let data: Vec<u8> = (0u8..64).collect();
    for (name, len) in [("checksum160", 20), ("checksum256", 32), ("checksum512", 64)] {
        let mut cursor = Cursor::from_slice(&data);
        let value = decode_builtin(name, &mut cursor).unwrap().unwrap();
        assert_eq!(value, Value::bytes(&data[..len]));
        assert_eq!(cursor.offset(), len);
    }
}
