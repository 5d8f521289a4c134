//! Threshold secret recovery
//!
//! This crate reconstructs a secret hidden as the constant term of an
//! integer polynomial, given a threshold number of its evaluations
//! ("shares") encoded in arbitrary numeral bases inside a JSON document.
//!
//! # Module overview
//!
//! - `primitives`  
//!   Positional numeral decoding and encoding for radix 2..=36, on
//!   arbitrary precision integers.
//!
//! - `recovery`  
//!   The share document model, exact Lagrange interpolation at zero
//!   (Shamir Secret Sharing over the integers) and the reconstruction
//!   pipeline that turns a document into a secret plus diagnostics.
//!
//!   The interpolation is exact: basis values are reduced fractions and
//!   only the final sum is rounded, half away from zero. Share values and
//!   secrets have no size ceiling beyond available memory.
//!
//! - `report`  
//!   Per-document processing and rendering of results. A failing
//!   document is reported and never stops the remaining ones.
//!
//! - `config`  
//!   Command line definition and logging setup for the binary.
//!
//! # Example
//!
//! ```
//! use threshold_recovery::recovery::{ShareDocument, recover_secret};
//!
//! let doc = ShareDocument::from_json_str(r#"{
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }"#).unwrap();
//!
//! let recovery = recover_secret(&doc).unwrap();
//! assert_eq!(recovery.secret.to_string(), "3");
//! ```

pub mod config;
pub mod primitives;
pub mod recovery;
pub mod report;
