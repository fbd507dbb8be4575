use rand::Rng;

use crate::tests::test_utils::{random_country, random_digits};
use crate::{hex, NumKey, ParseHexError};

#[test]
fn test_hex_known_vector() {
    let nk = NumKey::from_u64(0xc2ab5e44f21a947f);
    assert_eq!(nk.to_hex(), "c2ab5e44f21a947f");
    assert_eq!(NumKey::from_hex("c2ab5e44f21a947f").unwrap(), nk);
}

#[test]
fn test_hex_fixed_width() {
    for (nk, expected) in [
        (NumKey::from_parts(0, 0), "0000000000000000"),
        (NumKey::from_parts(0, 1), "0000000000000001"),
        (NumKey::from_parts(0xacc00034, 0xbbc979fb), "acc00034bbc979fb"),
        (NumKey::from_parts(u32::MAX, u32::MAX), "ffffffffffffffff"),
    ] {
        let s = nk.to_hex();
        assert_eq!(s, expected);
        assert_eq!(s.len(), hex::LEN);
    }
}

#[test]
fn test_hex_is_stable() {
    let nk = NumKey::new("US", "14155552671");
    assert_eq!(nk.to_hex(), "acc00034bbc979fb");
    assert_eq!(nk.to_hex(), nk.to_hex());
}

#[test]
fn test_hex_roundtrip_random() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let country = random_country(&mut rng);
        let len = rng.random_range(1..=15);
        let number = random_digits(&mut rng, len);
        let nk = NumKey::new(&country, &number);
        assert_eq!(NumKey::from_hex(&nk.to_hex()).unwrap(), nk);
    }
}

#[test]
fn test_display_and_fromstr() {
    let nk = NumKey::new("GB", "447700900123");
    assert_eq!(format!("{nk}"), nk.to_hex());

    let parsed: NumKey = nk.to_hex().parse().unwrap();
    assert_eq!(parsed, nk);
}

#[test]
fn test_from_hex_rejects_bad_input() {
    assert_eq!(
        NumKey::from_hex("acc00034"),
        Err(ParseHexError::InvalidLength { len: 8 })
    );
    assert_eq!(
        NumKey::from_hex("acc00034bbc979fb00"),
        Err(ParseHexError::InvalidLength { len: 18 })
    );
    assert_eq!(
        NumKey::from_hex("gcc00034bbc979fb"),
        Err(ParseHexError::InvalidCharacter('g'))
    );
}

#[test]
fn test_encode_array_matches_string() {
    let nk = NumKey::new("SE", "46701234567");
    let array = hex::encode_array(nk.as_u64());
    assert_eq!(String::from_utf8_lossy(&array), nk.to_hex());
}
