//! Secret reconstruction from a share document.
//!
//! Reconstruction is a filter-then-take pipeline over the entries
//! `1..=n` of a [`ShareDocument`]:
//!
//! 1. each index is looked up in order, and its entry decoded into a
//!    [`Point`] `(index, value)`;
//! 2. indices that are absent, incomplete or undecodable are recorded as
//!    [`SkippedEntry`] diagnostics and the scan continues;
//! 3. the scan stops as soon as `k` points have been collected, so later
//!    entries are never examined;
//! 4. with fewer than `k` points the document fails with
//!    [`RecoveryError::InsufficientPoints`], otherwise the points are
//!    interpolated at zero.

use num_bigint::BigInt;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::primitives::{RadixError, decode};
use crate::recovery::document::{Entry, EntrySlot, ShareDocument};
use crate::recovery::shamirsecretsharing::{
    Point, SecretSharingError, interpolate_constant_term,
};

/// Why an entry did not contribute a point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// No entry exists from this index up to and including `last`.
    #[error("no entry at indices through {last}")]
    Absent { last: u64 },

    /// The entry is missing `base` or `value`, or is not an entry at all.
    #[error("malformed entry: {0}")]
    MalformedEntry(String),

    /// The `base` field is not an integer.
    #[error("unreadable base {0:?}")]
    UnreadableBase(String),

    /// The value does not decode in the given base.
    #[error(transparent)]
    Decode(#[from] RadixError),
}

/// An entry that was skipped while collecting points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub index: u64,
    #[serde(serialize_with = "serialize_display")]
    pub reason: SkipReason,
}

fn serialize_display<S: serde::Serializer>(
    reason: &SkipReason,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Errors that abort the reconstruction of one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// The document asks for a threshold of zero.
    #[error("threshold k must be at least 1")]
    InvalidThreshold,

    /// Fewer than `k` valid points exist among entries `1..=n`.
    #[error("insufficient points: need {required}, found {found}")]
    InsufficientPoints {
        required: u64,
        found: u64,
        skipped: Vec<SkippedEntry>,
    },

    #[error(transparent)]
    Interpolation(#[from] SecretSharingError),
}

/// The outcome of a successful reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The constant term of the interpolated polynomial.
    pub secret: BigInt,

    /// The `k` points that were interpolated, in index order.
    pub points: Vec<Point>,

    /// Entries skipped before the threshold was reached.
    pub skipped: Vec<SkippedEntry>,
}

/// Points gathered from a document, together with what was skipped.
#[derive(Debug, Default)]
struct Collected {
    points: Vec<Point>,
    skipped: Vec<SkippedEntry>,
}

impl Collected {
    fn skip(&mut self, index: u64, reason: SkipReason) {
        warn!(index, %reason, "skipping share entry");
        self.skipped.push(SkippedEntry { index, reason });
    }
}

/// Decodes a single entry into a point at `x = index`.
fn decode_entry(index: u64, entry: &Entry) -> Result<Point, SkipReason> {
    let (base, value) = match (&entry.base, &entry.value) {
        (Some(base), Some(value)) => (base, value),
        (None, _) => return Err(SkipReason::MalformedEntry("missing 'base'".into())),
        (_, None) => return Err(SkipReason::MalformedEntry("missing 'value'".into())),
    };

    let radix = base
        .radix()
        .ok_or_else(|| SkipReason::UnreadableBase(base.to_string()))?;

    let y = decode(&value.digits(), radix)?;

    Ok(Point::new(index, y))
}

fn collect_points(doc: &ShareDocument, k: u64) -> Collected {
    let mut collected = Collected::default();
    let n = doc.keys.n;

    // First index not yet accounted for; `None` once past `u64::MAX`.
    let mut next = Some(1u64);

    let in_range = doc.entries.range(1..).take_while(|(index, _)| **index <= n);

    for (&index, slot) in in_range {
        if collected.points.len() as u64 == k {
            break;
        }

        if let Some(first) = next.filter(|&first| first < index) {
            collected.skip(first, SkipReason::Absent { last: index - 1 });
        }
        next = index.checked_add(1);

        let result = match slot {
            EntrySlot::Malformed(why) => Err(SkipReason::MalformedEntry(why.clone())),
            EntrySlot::Entry(entry) => decode_entry(index, entry),
        };

        match result {
            Ok(point) => {
                debug!(index, y = %point.y, "collected share");
                collected.points.push(point);
            }
            Err(reason) => collected.skip(index, reason),
        }
    }

    if (collected.points.len() as u64) < k
        && let Some(first) = next.filter(|&first| first <= n)
    {
        collected.skip(first, SkipReason::Absent { last: n });
    }

    collected
}

/// Recovers the secret encoded by `doc`.
///
/// # Errors
///
/// - [`RecoveryError::InvalidThreshold`] if `k` is zero
/// - [`RecoveryError::InsufficientPoints`] if fewer than `k` entries among
///   `1..=n` decode; the interpolator is not called
/// - [`RecoveryError::Interpolation`] if interpolation itself fails
pub fn recover_secret(doc: &ShareDocument) -> Result<Recovery, RecoveryError> {
    let k = doc.keys.k;
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold);
    }

    let Collected { points, skipped } = collect_points(doc, k);

    let found = points.len() as u64;
    if found < k {
        return Err(RecoveryError::InsufficientPoints {
            required: k,
            found,
            skipped,
        });
    }

    let secret = interpolate_constant_term(&points)?;
    info!(n = doc.keys.n, k, skipped = skipped.len(), %secret, "recovered secret");

    Ok(Recovery {
        secret,
        points,
        skipped,
    })
}
