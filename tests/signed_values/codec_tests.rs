use signed_values::codec::{query, transport};
use signed_values::{CodecError, SpaceEncoding, Values};

#[test]
fn canonical_form_matches_form_encoding() {
    let values: Values = [
        ("q", "rust & go"),
        ("lang", "en"),
        ("q", "100%"),
        ("emoji", "🦀"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        query::encode(&values, SpaceEncoding::Plus),
        "emoji=%F0%9F%A6%80&lang=en&q=rust+%26+go&q=100%25"
    );
}

#[test]
fn keys_sort_bytewise_not_by_locale() {
    let values: Values = [("é", "1"), ("z", "2"), ("Z", "3")].into_iter().collect();
    let encoded = query::encode(&values, SpaceEncoding::Plus);
    assert_eq!(encoded, "Z=3&z=2&%C3%A9=1");
}

#[test]
fn parse_collects_repeated_keys() {
    let values = query::parse("a=1&b=2&a=3").expect("valid query");
    assert_eq!(values.get_all("a"), ["1", "3"]);
    assert_eq!(values.get_all("b"), ["2"]);
}

#[test]
fn parse_accepts_non_canonical_but_valid_queries() {
    let values = query::parse("b=2&a=x%20y&c").expect("valid query");
    assert_eq!(values.get("a"), "x y");
    assert_eq!(values.get("c"), "");
    assert_eq!(query::encode(&values, SpaceEncoding::Plus), "a=x+y&b=2&c=");
}

#[test]
fn parse_failures_do_not_yield_partial_values() {
    for bad in ["a=1&b=%", "a=1&b=%4", "a=1&b=%zz", "a=1;b=2", "a=%C3"] {
        assert!(query::parse(bad).is_err(), "{bad:?} must be rejected");
    }
}

#[test]
fn unescape_rejects_invalid_utf8_sequences() {
    assert_eq!(query::unescape("%C3%28"), Err(CodecError::InvalidUtf8));
}

#[test]
fn transport_helpers_round_trip() {
    let bytes = [0u8, 1, 2, 250, 251, 252, 253, 254, 255];
    let text = transport::encode(&bytes);
    assert!(text.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_=".contains(&b)));
    assert_eq!(transport::decode(&text).expect("decodes"), bytes);
}

#[test]
fn transport_decode_errors_are_transport_kind() {
    let err = transport::decode("a").expect_err("single char is never valid");
    assert!(err.is_transport());
}
