//! Shamir Secret Sharing (SSS) over the integers.
//!
//! The implementation is split into two layers:
//!
//! - [`core`]  
//!   Public API: points, polynomials, reconstruction and splitting.
//!
//! - `rational`  
//!   Exact fractions used by Lagrange interpolation. Kept private so that
//!   every reconstruction goes through the validated `core` API.
//!
//! ## Design notes
//!
//! - Secrets and share values are arbitrary precision integers, not
//!   field elements. Reconstruction is exact over the rationals.
//! - Share identifiers double as abscissas and must be unique.
//! - The module knows nothing about documents, encodings or reporting.

pub mod core;
pub(crate) mod rational;
