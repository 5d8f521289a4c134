use num_bigint::BigUint;
use threshold_recovery::primitives::{RadixError, decode, encode};

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn decodes_documented_values() {
    assert_eq!(decode("1A", 16).unwrap(), big(26));
    assert_eq!(decode("111", 2).unwrap(), big(7));
    assert_eq!(decode("213", 4).unwrap(), big(39));
    assert_eq!(decode("zz", 36).unwrap(), big(36 * 36 - 1));
}

#[test]
fn rejects_digit_outside_radix() {
    assert!(matches!(
        decode("2", 2),
        Err(RadixError::InvalidDigit {
            digit: '2',
            position: 0,
            radix: 2
        })
    ));
    assert!(matches!(
        decode("g", 16),
        Err(RadixError::InvalidDigit { .. })
    ));
}

#[test]
fn rejects_whitespace_and_signs() {
    for value in [" 12", "12 ", "1 2", "-12", "+12", "0x1f", "1_000"] {
        assert!(
            matches!(decode(value, 16), Err(RadixError::InvalidDigit { .. })),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn rejects_empty_value() {
    assert_eq!(decode("", 10), Err(RadixError::EmptyValue));
}

#[test]
fn rejects_invalid_radix() {
    assert_eq!(decode("0", 0), Err(RadixError::InvalidRadix(0)));
    assert_eq!(decode("0", 1), Err(RadixError::InvalidRadix(1)));
    assert_eq!(decode("0", 37), Err(RadixError::InvalidRadix(37)));
}

#[test]
fn decodes_beyond_u64() {
    let value = decode("ffffffffffffffffffffffffffffffff", 16).unwrap();
    assert_eq!(value, BigUint::from(u128::MAX));

    let value = decode("18446744073709551616", 10).unwrap();
    assert_eq!(value, big(u64::MAX) + 1u32);
}

#[test]
fn encode_is_lowercase() {
    assert_eq!(encode(&big(255), 16).unwrap(), "ff");
    assert_eq!(encode(&big(35), 36).unwrap(), "z");
    assert_eq!(encode(&big(7), 2).unwrap(), "111");
}
