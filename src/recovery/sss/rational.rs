//! Exact rational arithmetic for Lagrange interpolation.
//!
//! Lagrange basis values at zero are ratios of integer products, so the
//! intermediate terms of a reconstruction are rational even when the
//! secret is an integer. This module keeps them exact: a [`Ratio`] is a
//! reduced fraction of arbitrary precision integers, and rounding happens
//! once, on the final sum.
//!
//! ## Invariants
//!
//! - The denominator is always strictly positive.
//! - Numerator and denominator are coprime after every operation.
//! - Zero is represented as `0/1`.
//!
//! This module is private to the Shamir implementation. It does **not**
//! check that abscissas are distinct; callers validate points before
//! interpolating.

use std::ops::Add;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// A reduced fraction `numer / denom` with `denom > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ratio {
    numer: BigInt,
    denom: BigInt,
}

impl Ratio {
    /// The additive identity.
    pub(crate) fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// Builds the reduced fraction `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    pub(crate) fn new(numer: BigInt, denom: BigInt) -> Self {
        assert!(!denom.is_zero(), "zero denominator in Ratio");

        let (numer, denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        let g = numer.gcd(&denom);
        if g.is_one() {
            Self { numer, denom }
        } else {
            Self {
                numer: numer / &g,
                denom: denom / &g,
            }
        }
    }

    /// Returns `true` if the fraction has no fractional part.
    pub(crate) fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Rounds to the nearest integer, ties away from zero.
    ///
    /// ```text
    /// 5/2 -> 3, -5/2 -> -3, 7/3 -> 2
    /// ```
    pub(crate) fn round(&self) -> BigInt {
        // Truncating division: |rem| < denom and rem has the sign of numer.
        let (quot, rem) = self.numer.div_rem(&self.denom);

        if rem.is_zero() {
            return quot;
        }

        let twice: BigInt = rem.abs() << 1usize;
        if twice < self.denom {
            return quot;
        }

        match self.numer.sign() {
            Sign::Minus => quot - 1,
            _ => quot + 1,
        }
    }

    /// Computes the value of a polynomial at zero using Lagrange interpolation.
    ///
    /// Each point contributes:
    ///
    /// ```text
    /// y_i · Π_{j≠i} x_j / (x_j − x_i)
    /// ```
    ///
    /// The products of a term are accumulated as plain integers and reduced
    /// once, so each point costs a single gcd.
    ///
    /// # Preconditions
    ///
    /// - All `x` values must be distinct, otherwise a denominator is zero
    ///   and this function panics.
    pub(crate) fn lagrange_at_zero(points: &[(BigInt, BigInt)]) -> Self {
        let mut acc = Ratio::zero();

        for (i, (xi, yi)) in points.iter().enumerate() {
            let mut num = BigInt::one();
            let mut den = BigInt::one();

            for (j, (xj, _)) in points.iter().enumerate() {
                if i != j {
                    num *= xj;
                    den *= xj - xi;
                }
            }

            acc = acc + Ratio::new(num * yi, den);
        }

        acc
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.denom == rhs.denom {
            return Ratio::new(self.numer + rhs.numer, self.denom);
        }

        Ratio::new(
            self.numer * &rhs.denom + rhs.numer * &self.denom,
            self.denom * rhs.denom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Ratio {
        Ratio::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn normalizes_sign_and_gcd() {
        let r = ratio(4, -6);
        assert_eq!(r, ratio(-2, 3));
        assert_eq!(ratio(0, -5), Ratio::zero());
    }

    #[test]
    fn arithmetic_stays_reduced() {
        assert_eq!(ratio(1, 6) + ratio(1, 3), ratio(1, 2));
        assert_eq!(ratio(3, 4) + ratio(-1, 4), ratio(1, 2));
        assert_eq!(ratio(-1, 6) + ratio(1, 6), Ratio::zero());
        assert!((ratio(1, 3) + ratio(2, 3)).is_integer());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(ratio(5, 2).round(), BigInt::from(3));
        assert_eq!(ratio(-5, 2).round(), BigInt::from(-3));
        assert_eq!(ratio(7, 3).round(), BigInt::from(2));
        assert_eq!(ratio(-7, 3).round(), BigInt::from(-2));
        assert_eq!(ratio(8, 3).round(), BigInt::from(3));
        assert_eq!(ratio(1, 3).round(), BigInt::from(0));
        assert_eq!(ratio(-1, 3).round(), BigInt::from(0));
        assert_eq!(ratio(9, 1).round(), BigInt::from(9));
    }

    #[test]
    fn lagrange_recovers_line() {
        // f(x) = 3x + 11
        let points = vec![
            (BigInt::from(1), BigInt::from(14)),
            (BigInt::from(4), BigInt::from(23)),
        ];
        let c = Ratio::lagrange_at_zero(&points);
        assert!(c.is_integer());
        assert_eq!(c.round(), BigInt::from(11));
    }

    #[test]
    fn lagrange_keeps_fractional_result() {
        // The line through (1, 1) and (3, 2) crosses zero at 1/2.
        let points = vec![
            (BigInt::from(1), BigInt::from(1)),
            (BigInt::from(3), BigInt::from(2)),
        ];
        let c = Ratio::lagrange_at_zero(&points);
        assert_eq!(c, ratio(1, 2));
        assert_eq!(c.round(), BigInt::from(1));
    }
}
