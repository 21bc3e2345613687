//! Structured analysis results exchanged with the Khmer NLP server.
//!
//! Field names follow the server's JSON wire shape so a result can be
//! deserialized straight from the `/api/analyze` response or from a
//! previously exported file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summary counts rendered on the analysis page.
///
/// Field order is the order the plain-text report prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Tokens produced by segmentation before filtering.
    pub original_tokens: u64,
    /// Tokens that survived stop-word filtering.
    pub filtered_tokens: u64,
    /// Tokens removed by stop-word filtering.
    pub removed_tokens: u64,
}

impl AnalysisStats {
    /// Stat entries as `(key, value)` pairs, in report order.
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [
            ("original_tokens", self.original_tokens),
            ("filtered_tokens", self.filtered_tokens),
            ("removed_tokens", self.removed_tokens),
        ]
    }
}

/// One analysis result produced by the server.
///
/// A `None` field means the section is absent from the source, which is
/// distinct from present-but-empty: an absent section is omitted from
/// exports entirely, while an empty one still prints its header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tokens that passed filtering, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_tokens: Option<Vec<String>>,
    /// Tokens excluded by filtering, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_tokens: Option<Vec<String>>,
    /// Token frequencies; insertion order is display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_tokens: Option<IndexMap<String, u64>>,
    /// Summary counts, present only when fully populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<AnalysisStats>,
}

impl AnalysisResult {
    /// True when every section is absent.
    pub fn is_empty(&self) -> bool {
        self.filtered_tokens.is_none()
            && self.removed_tokens.is_none()
            && self.frequency_tokens.is_none()
            && self.stats.is_none()
    }
}
