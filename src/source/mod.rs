//! Result sources: where an analysis result comes from.
//!
//! Export and charting do not care whether a result arrived over the API
//! or has to be reconstructed from rendered markup. Both suppliers sit
//! behind [`ResultSource`]; consumers ask each source in order and take
//! the first that resolves.

pub mod memory;
pub mod page;

pub use memory::MemorySource;
pub use page::PageExtractor;

use crate::model::AnalysisResult;

/// A place an analysis result can be recovered from.
pub trait ResultSource {
    /// Produce a result, or `None` when this source has nothing.
    fn resolve(&self) -> Option<AnalysisResult>;
}

/// Ask each source in order; the first that resolves wins.
pub fn resolve_first(sources: &[&dyn ResultSource]) -> Option<AnalysisResult> {
    sources.iter().find_map(|source| source.resolve())
}
