//! In-memory result source.

use super::ResultSource;
use crate::model::AnalysisResult;

/// Wraps a result that is already in memory.
///
/// This is the explicit replacement for the web client's process-wide
/// cached result object: the analysis call hands its parsed response to
/// whichever consumer needs it, and page scraping is never consulted.
#[derive(Debug, Clone)]
pub struct MemorySource {
    result: AnalysisResult,
}

impl MemorySource {
    /// Wrap an existing result.
    pub fn new(result: AnalysisResult) -> Self {
        Self { result }
    }
}

impl ResultSource for MemorySource {
    fn resolve(&self) -> Option<AnalysisResult> {
        Some(self.result.clone())
    }
}
