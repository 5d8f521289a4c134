use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

use threshold_recovery::primitives::{decode, encode};
use threshold_recovery::recovery::shamirsecretsharing::{
    Point, Polynomial, interpolate_constant_term, split,
};

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn digit_string(radix: u32) -> impl Strategy<Value = (u32, Vec<u32>)> {
    prop::collection::vec(0..radix, 1..64).prop_map(move |d| (radix, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn decode_matches_positional_value(
        (radix, digits) in (2u32..=36).prop_flat_map(digit_string),
        upper in any::<bool>(),
    ) {
        let text: String = digits
            .iter()
            .map(|&d| {
                let c = DIGITS[d as usize] as char;
                if upper { c.to_ascii_uppercase() } else { c }
            })
            .collect();

        let expected = digits
            .iter()
            .fold(BigUint::from(0u8), |acc, &d| acc * radix + d);

        prop_assert_eq!(decode(&text, radix).unwrap(), expected);
    }

    #[test]
    fn encode_then_decode_is_identity(value in any::<u128>(), radix in 2u32..=36) {
        let value = BigUint::from(value);
        let text = encode(&value, radix).unwrap();
        prop_assert_eq!(decode(&text, radix).unwrap(), value);
    }

    #[test]
    fn interpolation_recovers_constant_term(
        coeffs in prop::collection::vec(any::<i64>(), 1..8),
        extra in 0usize..4,
    ) {
        let p = Polynomial::new(coeffs.iter().map(|&c| BigInt::from(c)).collect());
        let shares = split(&p, p.threshold() + extra).unwrap();

        let recovered = interpolate_constant_term(&shares[extra..]).unwrap();
        prop_assert_eq!(recovered, p.constant_term());
    }

    #[test]
    fn interpolation_is_order_independent(
        coeffs in prop::collection::vec(-1000i64..1000, 1..7),
        seed in any::<u64>(),
    ) {
        let p = Polynomial::new(coeffs.iter().map(|&c| BigInt::from(c)).collect());
        let shares = split(&p, p.threshold()).unwrap();

        let mut shuffled: Vec<Point> = shares.clone();
        let len = shuffled.len();
        let mut state = seed;
        for i in (1..len).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        prop_assert_eq!(
            interpolate_constant_term(&shuffled).unwrap(),
            interpolate_constant_term(&shares).unwrap()
        );
    }
}
