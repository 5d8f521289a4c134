//! Primitive conversions
//!
//! This module holds the low-level building blocks that sit between the
//! textual share format and the arithmetic core.
//!
//! Current primitives include:
//! - [`decode`]: read an unsigned integer written in radix 2..=36
//! - [`encode`]: write an unsigned integer in radix 2..=36
//!
//! Both operate on arbitrary precision integers, so share values are not
//! limited to 64 or 128 bits.

mod radix;

pub use radix::{MAX_RADIX, MIN_RADIX, RadixError, decode, encode};
