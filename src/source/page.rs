//! Reconstruct an analysis result from server-rendered HTML.
//!
//! The rendered page is the de facto wire format between the server's
//! templates and this client: token lists live under `#filtered` and
//! `#removed`, frequencies in the `#frequency` table, and summary counts
//! in `.stats-card` headings.

use indexmap::IndexMap;
use scraper::{Html, Selector};
use tracing::debug;

use super::ResultSource;
use crate::model::{AnalysisResult, AnalysisStats};

const FILTERED_REGION: &str = "#filtered";
const REMOVED_REGION: &str = "#removed";
const FREQUENCY_TABLE: &str = "#frequency";
const FREQUENCY_ROWS: &str = "#frequency tbody tr";
const STAT_HEADINGS: &str = ".stats-card h3";
const TOKEN: &str = ".token";

/// Reconstructs an [`AnalysisResult`] from a rendered analysis page.
///
/// Reading is side-effect-free: the extractor only inspects the document
/// it was given and never touches application state.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    html: String,
}

impl PageExtractor {
    /// Build an extractor over the given document text.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Extract a result from the rendered document.
    ///
    /// Each section is present only when its markup exists: a `#filtered`
    /// region with no tokens yields an empty list, while a page without
    /// the region yields an absent one. Returns `None` when the page
    /// carries no result markup at all.
    pub fn extract(&self) -> Option<AnalysisResult> {
        let doc = Html::parse_document(&self.html);

        let result = AnalysisResult {
            filtered_tokens: region_tokens(&doc, FILTERED_REGION),
            removed_tokens: region_tokens(&doc, REMOVED_REGION),
            frequency_tokens: frequency_entries(&doc),
            stats: stat_counts(&doc),
        };

        if result.is_empty() {
            debug!("page carries no result markup");
            return None;
        }
        Some(result)
    }
}

impl ResultSource for PageExtractor {
    fn resolve(&self) -> Option<AnalysisResult> {
        self.extract()
    }
}

/// Token texts under a region, in document order; `None` when the region
/// itself is missing.
fn region_tokens(doc: &Html, region: &str) -> Option<Vec<String>> {
    let region_sel = Selector::parse(region).ok()?;
    doc.select(&region_sel).next()?;

    let token_sel = Selector::parse(&format!("{region} {TOKEN}")).ok()?;
    Some(
        doc.select(&token_sel)
            .map(|el| el.text().collect::<String>())
            .collect(),
    )
}

/// Frequency rows in table order; `None` when the table is missing.
///
/// Rows need at least two cells: the first cell's trimmed text is the
/// token, the second parses as its count. Rows whose count fails integer
/// parsing are skipped, never defaulted to zero.
fn frequency_entries(doc: &Html) -> Option<IndexMap<String, u64>> {
    let table_sel = Selector::parse(FREQUENCY_TABLE).ok()?;
    doc.select(&table_sel).next()?;

    let row_sel = Selector::parse(FREQUENCY_ROWS).ok()?;
    let cell_sel = Selector::parse("td").ok()?;

    let mut entries = IndexMap::new();
    for row in doc.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() < 2 {
            continue;
        }
        let token = cells[0].text().collect::<String>().trim().to_string();
        let raw = cells[1].text().collect::<String>();
        match raw.trim().parse::<u64>() {
            Ok(count) => {
                entries.insert(token, count);
            }
            Err(_) => {
                debug!(token = %token, cell = %raw.trim(), "skipping unparsable frequency row");
            }
        }
    }
    Some(entries)
}

/// Summary counts from the first four stat-card headings.
///
/// Fewer than four headings means the summary block is not rendered and
/// stats stay absent. The fourth heading (the page shows the reduction
/// percentage there) is read like the others but has no output field.
fn stat_counts(doc: &Html) -> Option<AnalysisStats> {
    let sel = Selector::parse(STAT_HEADINGS).ok()?;
    let headings: Vec<String> = doc
        .select(&sel)
        .map(|el| el.text().collect::<String>())
        .collect();

    if headings.len() < 4 {
        return None;
    }

    let _ = parse_count(headings.get(3));
    Some(AnalysisStats {
        original_tokens: parse_count(headings.first()),
        filtered_tokens: parse_count(headings.get(1)),
        removed_tokens: parse_count(headings.get(2)),
    })
}

fn parse_count(text: Option<&String>) -> u64 {
    text.and_then(|t| t.trim().parse().ok()).unwrap_or(0)
}
