//! Secret recovery.
//!
//! This module reconstructs a secret hidden as the constant term of a
//! polynomial, given enough evaluations of that polynomial.
//!
//! # Shamir Secret Sharing (SSS)
//!
//! The `shamirsecretsharing` submodule holds the arithmetic:
//!
//! - Any `k` points with distinct abscissas determine a polynomial of
//!   degree `k - 1`, and with it the secret `f(0)`.
//! - Reconstruction is performed with Lagrange interpolation at zero,
//!   in exact rational arithmetic.
//!
//! # Share documents
//!
//! The `document` submodule models the JSON share format: a `keys` header
//! with the share count `n` and threshold `k`, followed by entries keyed
//! by share index, each holding a radix and a value written in that radix.
//!
//! # Reconstruction
//!
//! The `reconstruct` submodule ties both together. It scans the entries
//! of a document in index order, skips the ones that are missing or do
//! not decode, keeps the first `k` valid points and interpolates them.
//! Skipped entries are returned as diagnostics rather than printed, so
//! callers decide how to report them.

pub mod document;
pub mod reconstruct;
mod sss;

pub use document::{
    DocumentError, Entry, EntrySlot, RadixField, ShareDocument, Threshold, ValueField,
};
pub use reconstruct::{Recovery, RecoveryError, SkipReason, SkippedEntry, recover_secret};
pub use sss::core as shamirsecretsharing;
