//! Per-document processing and reporting.
//!
//! Each input document is an independent unit of work: it is loaded,
//! parsed and reconstructed on its own, and any failure is captured in
//! its [`DocumentReport`] instead of interrupting the remaining documents.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tracing::{error, info_span};

use crate::recovery::{RecoveryError, ShareDocument, SkippedEntry, recover_secret};

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Where the document came from, usually its path.
    pub source: String,

    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Recovered {
        /// Decimal representation of the secret.
        secret: String,
        /// Share indices that were interpolated.
        used: Vec<String>,
        skipped: Vec<SkippedEntry>,
    },
    Failed {
        error: String,
        skipped: Vec<SkippedEntry>,
    },
}

impl DocumentReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Recovered { .. })
    }
}

/// Reconstructs the secret of an already parsed document.
pub fn process_document(source: impl Into<String>, doc: &ShareDocument) -> DocumentReport {
    let source = source.into();

    let outcome = match recover_secret(doc) {
        Ok(recovery) => Outcome::Recovered {
            secret: recovery.secret.to_string(),
            used: recovery.points.iter().map(|p| p.x.to_string()).collect(),
            skipped: recovery.skipped,
        },
        Err(e) => {
            error!(source = %source, error = %e, "failed to recover secret");
            let skipped = match &e {
                RecoveryError::InsufficientPoints { skipped, .. } => skipped.clone(),
                _ => Vec::new(),
            };
            Outcome::Failed {
                error: e.to_string(),
                skipped,
            }
        }
    };

    DocumentReport { source, outcome }
}

/// Loads the document at `path` and reconstructs its secret.
///
/// Read and parse failures are reported like any other failure.
pub fn process_file(path: &Path) -> DocumentReport {
    let source = path.display().to_string();
    let _span = info_span!("document", source = %source).entered();

    match ShareDocument::load(path) {
        Ok(doc) => process_document(source, &doc),
        Err(e) => {
            error!(error = %e, "failed to load share document");
            DocumentReport {
                source,
                outcome: Outcome::Failed {
                    error: e.to_string(),
                    skipped: Vec::new(),
                },
            }
        }
    }
}

/// Processes every path in order, one document at a time.
pub fn process_files<P: AsRef<Path>>(paths: &[P]) -> Vec<DocumentReport> {
    paths.iter().map(|p| process_file(p.as_ref())).collect()
}

/// Whether a batch counts as failed.
///
/// Failed documents are always reported; they only fail the batch in
/// strict mode.
pub fn batch_failed(reports: &[DocumentReport], strict: bool) -> bool {
    strict && reports.iter().any(|r| !r.is_success())
}

/// Renders reports as human readable text, one block per document.
pub fn render_text(reports: &[DocumentReport]) -> String {
    let mut out = String::new();

    for report in reports {
        let skipped = match &report.outcome {
            Outcome::Recovered {
                secret, skipped, ..
            } => {
                let _ = writeln!(out, "{}: secret = {secret}", report.source);
                skipped
            }
            Outcome::Failed { error, skipped } => {
                let _ = writeln!(out, "{}: error: {error}", report.source);
                skipped
            }
        };

        for s in skipped {
            let _ = writeln!(out, "  skipped entry {}: {}", s.index, s.reason);
        }
    }

    out
}

/// Renders reports as a pretty-printed JSON array.
pub fn render_json(reports: &[DocumentReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
