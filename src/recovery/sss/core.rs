//! Shamir Secret Sharing core implementation.
//!
//! This module provides the public API for reconstructing the constant
//! term of a polynomial over the integers from a threshold set of its
//! evaluations, and for producing such evaluations in the first place.
//!
//! A polynomial of degree `k - 1` is uniquely determined by `k` points
//! with distinct abscissas, so:
//!
//! - Any `k` points reconstruct the constant term exactly.
//! - The order in which the points are supplied does not matter.
//!
//! ## Provided operations
//!
//! - [`interpolate_constant_term`]  
//!   Recover `f(0)` from a set of points using Lagrange interpolation.
//!
//! - [`split`]  
//!   Evaluate a polynomial at `1..=n` to produce `n` points.
//!
//! ## Numeric semantics
//!
//! All arithmetic is exact. Basis values are kept as reduced fractions of
//! arbitrary precision integers and only the final sum is rounded (half
//! away from zero). For genuine samples of a polynomial with an integer
//! constant term the sum is already an integer and no rounding happens.

use std::collections::HashSet;

use num_bigint::BigInt;
use thiserror::Error;

use crate::recovery::sss::rational::Ratio;

/// A single evaluation `(x, f(x))` of the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Abscissa; for shares this is the share index.
    pub x: BigInt,

    /// Ordinate, the decoded share value.
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A polynomial with integer coefficients, constant term first.
///
/// ```text
/// f(x) = coefficients[0] + coefficients[1]·x + coefficients[2]·x² + ...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// The value at zero, i.e. the secret.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Number of points needed to reconstruct the constant term.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        let mut acc = BigInt::default();

        for c in self.coefficients.iter().rev() {
            acc = acc * x + c;
        }

        acc
    }
}

/// Errors that may occur during Shamir Secret Sharing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretSharingError {
    /// No points were supplied.
    #[error("no points to interpolate")]
    EmptyInput,

    /// Two points share the same x-coordinate.
    #[error("duplicate abscissa x = {0}")]
    DuplicateAbscissa(BigInt),

    /// The threshold is zero or larger than the share count.
    #[error("invalid threshold {threshold} for {share_count} shares")]
    InvalidThreshold { threshold: usize, share_count: usize },
}

/// Reconstructs the constant term of the polynomial through `points`.
///
/// # Errors
///
/// - [`SecretSharingError::EmptyInput`] if `points` is empty
/// - [`SecretSharingError::DuplicateAbscissa`] if two points share an `x`
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use threshold_recovery::recovery::shamirsecretsharing::{Point, interpolate_constant_term};
///
/// // f(x) = x² + 3
/// let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// assert_eq!(interpolate_constant_term(&points).unwrap(), BigInt::from(3));
/// ```
pub fn interpolate_constant_term(points: &[Point]) -> Result<BigInt, SecretSharingError> {
    if points.is_empty() {
        return Err(SecretSharingError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !seen.insert(&p.x) {
            return Err(SecretSharingError::DuplicateAbscissa(p.x.clone()));
        }
    }

    let pairs: Vec<(BigInt, BigInt)> = points
        .iter()
        .map(|p| (p.x.clone(), p.y.clone()))
        .collect();

    let constant = Ratio::lagrange_at_zero(&pairs);
    if !constant.is_integer() {
        tracing::debug!(
            ?constant,
            "interpolated constant term is not an integer, rounding"
        );
    }

    Ok(constant.round())
}

/// Evaluates `polynomial` at `x = 1..=share_count`.
///
/// # Errors
///
/// Returns [`SecretSharingError::InvalidThreshold`] if the polynomial has
/// no coefficients or needs more points than `share_count` provides.
pub fn split(
    polynomial: &Polynomial,
    share_count: usize,
) -> Result<Vec<Point>, SecretSharingError> {
    let threshold = polynomial.threshold();

    if threshold == 0 || threshold > share_count {
        return Err(SecretSharingError::InvalidThreshold {
            threshold,
            share_count,
        });
    }

    Ok((1..=share_count)
        .map(|id| {
            let x = BigInt::from(id);
            let y = polynomial.evaluate(&x);
            Point { x, y }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_direct_evaluation() {
        // 2 + x + x²
        let p = Polynomial::new(vec![2.into(), 1.into(), 1.into()]);
        assert_eq!(p.evaluate(&BigInt::from(0)), BigInt::from(2));
        assert_eq!(p.evaluate(&BigInt::from(3)), BigInt::from(14));
        assert_eq!(p.evaluate(&BigInt::from(-2)), BigInt::from(4));
    }

    #[test]
    fn empty_polynomial_has_zero_constant() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.constant_term(), BigInt::from(0));
        assert_eq!(p.threshold(), 0);
    }

    #[test]
    fn non_integer_constant_is_rounded() {
        // The line through (1, 1) and (3, 2) meets x = 0 at 1/2.
        let points = [Point::new(1, 1), Point::new(3, 2)];
        assert_eq!(interpolate_constant_term(&points).unwrap(), BigInt::from(1));
    }
}
