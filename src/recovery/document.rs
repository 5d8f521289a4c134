//! Share document model.
//!
//! A share document is a JSON object with a `keys` header and one entry
//! per share, keyed by the share index written in decimal:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! The document is validated once, when it is parsed. Entry keys are read
//! as share indices, and every entry is classified up front as either a
//! typed [`Entry`] with explicit optional fields or as malformed. Keys
//! that are not canonical decimal indices are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use num_bigint::{BigInt, Sign};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::primitives::{RadixError, encode};
use crate::recovery::shamirsecretsharing::Point;

/// The `keys` header of a share document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Number of entries to scan (indices `1..=n`).
    pub n: u64,

    /// Number of points needed for reconstruction.
    pub k: u64,
}

/// Radix of an entry, written either as a JSON string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadixField {
    Number(u64),
    Text(String),
}

impl RadixField {
    /// Reads the radix as an integer.
    ///
    /// Returns `None` when the text is not a plain decimal integer or the
    /// number does not fit in a `u32`. Range checking is left to the
    /// decoder.
    pub fn radix(&self) -> Option<u32> {
        match self {
            RadixField::Number(n) => u32::try_from(*n).ok(),
            RadixField::Text(s) => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                s.parse().ok()
            }
        }
    }
}

impl fmt::Display for RadixField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixField::Number(n) => write!(f, "{n}"),
            RadixField::Text(s) => f.write_str(s),
        }
    }
}

/// Value of an entry, written either as a digit string or a JSON number.
///
/// A number is read through its decimal representation, which is then
/// decoded in the entry's radix like any other digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueField {
    Number(u64),
    Text(String),
}

impl ValueField {
    pub fn digits(&self) -> String {
        match self {
            ValueField::Number(n) => n.to_string(),
            ValueField::Text(s) => s.clone(),
        }
    }
}

/// A single share entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<RadixField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueField>,
}

/// One indexed slot of a share document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySlot {
    /// The slot holds an object readable as an [`Entry`].
    Entry(Entry),

    /// The slot holds something else; the string describes why it was
    /// rejected.
    Malformed(String),
}

/// Errors produced while loading, parsing or building a share document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse share document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("share value {0} is negative and cannot be encoded")]
    NegativeShare(BigInt),

    #[error("share index {0} is not a positive integer")]
    InvalidIndex(BigInt),

    #[error(transparent)]
    Radix(#[from] RadixError),
}

/// A parsed share document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDocument")]
pub struct ShareDocument {
    pub keys: Threshold,
    pub entries: BTreeMap<u64, EntrySlot>,
}

#[derive(Deserialize)]
struct RawDocument {
    keys: Threshold,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl From<RawDocument> for ShareDocument {
    fn from(raw: RawDocument) -> Self {
        let mut entries = BTreeMap::new();

        for (key, value) in raw.entries {
            let Some(index) = parse_index(&key) else {
                tracing::debug!(key = %key, "ignoring non-index key in share document");
                continue;
            };

            let slot = match value {
                Value::Object(_) => match Entry::deserialize(value) {
                    Ok(entry) => EntrySlot::Entry(entry),
                    Err(e) => EntrySlot::Malformed(e.to_string()),
                },
                other => EntrySlot::Malformed(format!("expected an object, found {other}")),
            };

            entries.insert(index, slot);
        }

        ShareDocument {
            keys: raw.keys,
            entries,
        }
    }
}

/// Accepts only canonical decimal indices (`"7"`, not `"07"` or `"+7"`).
fn parse_index(key: &str) -> Option<u64> {
    let index: u64 = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

impl ShareDocument {
    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&text)
    }

    /// Returns the slot stored under `index`, if any.
    pub fn slot(&self, index: u64) -> Option<&EntrySlot> {
        self.entries.get(&index)
    }

    /// Builds a document holding `points`, each value encoded in `radix`.
    ///
    /// The header records `n = points.len()` and `k = threshold`. Every
    /// abscissa must be a positive integer and every ordinate non-negative.
    pub fn from_shares(
        points: &[Point],
        threshold: u64,
        radix: u32,
    ) -> Result<Self, DocumentError> {
        let mut entries = BTreeMap::new();

        for p in points {
            let index = match (p.x.sign(), u64::try_from(&p.x)) {
                (Sign::Plus, Ok(index)) => index,
                _ => return Err(DocumentError::InvalidIndex(p.x.clone())),
            };

            let value = p
                .y
                .to_biguint()
                .ok_or_else(|| DocumentError::NegativeShare(p.y.clone()))?;

            entries.insert(
                index,
                EntrySlot::Entry(Entry {
                    base: Some(RadixField::Text(radix.to_string())),
                    value: Some(ValueField::Text(encode(&value, radix)?)),
                }),
            );
        }

        Ok(ShareDocument {
            keys: Threshold {
                n: points.len() as u64,
                k: threshold,
            },
            entries,
        })
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ShareDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let readable: Vec<(u64, &Entry)> = self
            .entries
            .iter()
            .filter_map(|(index, slot)| match slot {
                EntrySlot::Entry(entry) => Some((*index, entry)),
                EntrySlot::Malformed(_) => None,
            })
            .collect();

        let mut map = serializer.serialize_map(Some(readable.len() + 1))?;
        map.serialize_entry("keys", &self.keys)?;
        for (index, entry) in readable {
            map.serialize_entry(&index.to_string(), entry)?;
        }
        map.end()
    }
}
