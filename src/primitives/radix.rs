//! Positional numeral decoding and encoding.
//!
//! Values are read as unsigned integers written in a radix between 2 and
//! 36, using `0-9` followed by the Latin letters `a-z` (case-insensitive)
//! for digits ten and above.
//!
//! Decoding is strict: whitespace, signs, separators and prefixes such as
//! `0x` are all rejected as invalid digits. There is no upper bound on the
//! length of the input, the result is an arbitrary precision
//! [`BigUint`].

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Errors produced while decoding or encoding a positional value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixError {
    /// The radix is outside `2..=36`.
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u32),

    /// A character is not a digit of the requested radix.
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    /// The value contains no digits at all.
    #[error("empty value")]
    EmptyValue,
}

fn check_radix(radix: u32) -> Result<(), RadixError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(RadixError::InvalidRadix(radix))
    }
}

/// Decodes `value` written in base `radix` into its integer value.
///
/// # Errors
///
/// - [`RadixError::InvalidRadix`] if `radix` is outside `2..=36`
/// - [`RadixError::EmptyValue`] if `value` is empty
/// - [`RadixError::InvalidDigit`] for the first character that is not a
///   digit of `radix`
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use threshold_recovery::primitives::decode;
///
/// assert_eq!(decode("1A", 16).unwrap(), BigUint::from(26u32));
/// assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
/// assert!(decode("2", 2).is_err());
/// ```
pub fn decode(value: &str, radix: u32) -> Result<BigUint, RadixError> {
    check_radix(radix)?;

    if value.is_empty() {
        return Err(RadixError::EmptyValue);
    }

    let mut digits = Vec::with_capacity(value.len());

    for (position, c) in value.chars().enumerate() {
        match c.to_digit(radix) {
            Some(d) => digits.push(d as u8),
            None => {
                return Err(RadixError::InvalidDigit {
                    digit: c,
                    position,
                    radix,
                });
            }
        }
    }

    // Every digit is below `radix`, which `from_radix_be` accepts for 2..=256.
    BigUint::from_radix_be(&digits, radix).ok_or(RadixError::InvalidRadix(radix))
}

/// Encodes `value` in base `radix` using lowercase letters.
///
/// Zero encodes as `"0"`.
pub fn encode(value: &BigUint, radix: u32) -> Result<String, RadixError> {
    check_radix(radix)?;

    if value.is_zero() {
        return Ok("0".to_owned());
    }

    Ok(value.to_str_radix(radix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(decode("ff", 16).unwrap(), decode("FF", 16).unwrap());
        assert_eq!(decode("z", 36).unwrap(), BigUint::from(35u8));
    }

    #[test]
    fn reports_first_bad_digit() {
        let err = decode("12 3", 10).unwrap_err();
        assert_eq!(
            err,
            RadixError::InvalidDigit {
                digit: ' ',
                position: 2,
                radix: 10
            }
        );
    }

    #[test]
    fn rejects_out_of_range_radix() {
        assert_eq!(decode("1", 1), Err(RadixError::InvalidRadix(1)));
        assert_eq!(decode("1", 37), Err(RadixError::InvalidRadix(37)));
        assert_eq!(
            encode(&BigUint::from(1u8), 0),
            Err(RadixError::InvalidRadix(0))
        );
    }

    #[test]
    fn zero_encodes_as_single_digit() {
        assert_eq!(encode(&BigUint::zero(), 7).unwrap(), "0");
        assert_eq!(decode("000", 7).unwrap(), BigUint::zero());
    }
}
