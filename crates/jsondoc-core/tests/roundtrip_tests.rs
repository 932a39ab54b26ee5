use jsondoc_core::{parse, serialize, Value};

/// Assert that serialize → parse reproduces the same tree, and that a
/// second serialize → parse pass changes nothing (idempotence).
fn assert_roundtrip(v: &Value) {
    let text = serialize(v);
    let reparsed = match parse(&text) {
        Ok(r) => r,
        Err(e) => panic!("reparse failed:\n  tree: {v:?}\n  text: {text}\n  error: {e}"),
    };
    assert_eq!(
        &reparsed, v,
        "roundtrip changed the tree:\n  text: {text}\n  got:  {reparsed:?}"
    );
    assert_eq!(
        serialize(&reparsed),
        text,
        "second serialization differs from the first"
    );
}

/// Assert that canonical text survives parse → serialize byte-for-byte.
fn assert_text_fixed_point(text: &str) {
    let doc = parse(text).expect("parse failed");
    assert_eq!(serialize(&doc), text);
}

// ============================================================================
// Built trees
// ============================================================================

#[test]
fn roundtrip_flat_object() {
    let mut v = Value::new();
    v.entry("name").unwrap().assign("Alice").unwrap();
    v.entry("age").unwrap().assign(30u32).unwrap();
    v.entry("debt").unwrap().assign(-250i64).unwrap();
    v.entry("active").unwrap().assign(true).unwrap();
    v.entry("rate").unwrap().assign(0.5f64).unwrap();
    v.entry("note").unwrap().set_null();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_arrays() {
    let mut v = Value::new();
    v.push(1u64).unwrap();
    v.push(-2i64).unwrap();
    v.push(3.25f64).unwrap();
    v.push("four").unwrap();
    v.push(false).unwrap();
    v.push(Value::Null).unwrap();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_empty_containers() {
    let mut arr = Value::new();
    arr.set_array();
    assert_roundtrip(&arr);

    let mut obj = Value::new();
    obj.set_object();
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_nested_document() {
    let mut v = Value::new();
    v.entry("id").unwrap().assign(7u64).unwrap();
    let tags = v.entry("tags").unwrap();
    tags.push("red").unwrap();
    tags.push("green").unwrap();
    let meta = v.entry("meta").unwrap();
    meta.entry("created").unwrap().assign("2018-06-01").unwrap();
    let mut row = Value::new();
    row.push(1u8).unwrap();
    row.push(2u8).unwrap();
    meta.entry("matrix").unwrap().push(row).unwrap();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_strings_with_escapes() {
    let mut v = Value::new();
    v.entry("quote").unwrap().assign("say \"hi\"").unwrap();
    v.entry("path").unwrap().assign("C:\\temp").unwrap();
    v.entry("lines").unwrap().assign("a\nb\r\nc").unwrap();
    v.entry("ctrl").unwrap().assign("bell\u{7}end").unwrap();
    v.entry("uni").unwrap().assign("café 你好 😀").unwrap();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_integer_extremes() {
    let mut v = Value::new();
    v.push(u64::MAX).unwrap();
    v.push(i64::MIN).unwrap();
    v.push(0u64).unwrap();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_six_decimal_doubles() {
    let mut v = Value::new();
    for d in [0.5, -3.14, 1234.5678, 0.000001, 99999.875] {
        v.push(d).unwrap();
    }
    assert_roundtrip(&v);
}

// ============================================================================
// Canonical text fixed points
// ============================================================================

#[test]
fn canonical_text_is_a_fixed_point() {
    assert_text_fixed_point("{}");
    assert_text_fixed_point("[]");
    assert_text_fixed_point("{\"a\":1,\"b\":[true,false,null]}");
    assert_text_fixed_point("[\"x\",-1,2]");
    assert_text_fixed_point("{\"nested\":{\"deep\":[{\"leaf\":null}]}}");
}

#[test]
fn noncanonical_input_normalizes_once_then_sticks() {
    // Whitespace and key order normalize on the first pass.
    let messy = "{ \"b\" : 2 , \"a\" : 1 }";
    let once = serialize(&parse(messy).expect("parse failed"));
    assert_eq!(once, "{\"a\":1,\"b\":2}");
    assert_text_fixed_point(&once);
}

#[test]
fn double_text_normalizes_to_six_digits_once_then_sticks() {
    let once = serialize(&parse("[3.14]").expect("parse failed"));
    assert_eq!(once, "[3.140000]");
    assert_text_fixed_point(&once);
}

#[test]
fn absent_document_roundtrips_as_empty_object() {
    let absent = parse("").expect("empty input is the absent document");
    let text = serialize(&absent);
    assert_eq!(text, "{}");
    // One pass later it is a real (empty) object, and stays that way.
    assert_text_fixed_point(&text);
}
