//! Metadata filtering over candidate items
//!
//! A document is kept when at least one of its fields carries the target key
//! and a value that matches under the chosen [`MatchMode`]. Comparison is
//! case-insensitive in both modes. Input order is preserved.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// How a field value is compared against the target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whole value equal, ignoring case
    #[default]
    Exact,
    /// Target appears literally inside the value, ignoring case
    Contains,
}

impl MatchMode {
    /// Compare a field value against an already lowercased target
    fn matches_lowered(self, value: &str, target_lower: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            MatchMode::Exact => value == target_lower,
            MatchMode::Contains => value.contains(target_lower),
        }
    }

    pub fn matches(self, value: &str, target: &str) -> bool {
        self.matches_lowered(value, &target.to_lowercase())
    }
}

/// Whether any field of `document` matches `key`/`value` under `mode`.
///
/// Stops at the first matching field.
pub fn document_matches(document: &Document, key: &str, value: &str, mode: MatchMode) -> bool {
    let target = value.to_lowercase();
    matches_lowered(document, key, &target, mode)
}

fn matches_lowered(document: &Document, key: &str, target_lower: &str, mode: MatchMode) -> bool {
    document
        .metadata
        .iter()
        .any(|field| field.key == key && mode.matches_lowered(&field.value, target_lower))
}

/// Keep the documents with a field matching `key`/`value` under `mode`
pub fn filter_documents(
    documents: &[Document],
    key: &str,
    value: &str,
    mode: MatchMode,
) -> Vec<Document> {
    let target = value.to_lowercase();
    documents
        .iter()
        .filter(|doc| matches_lowered(doc, key, &target, mode))
        .cloned()
        .collect()
}
