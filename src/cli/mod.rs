//! CLI subcommand implementations for the khmer-export binary.

pub mod analyze_cmd;
pub mod chart_cmd;
pub mod copy_cmd;
pub mod count_cmd;
pub mod export_cmd;
pub mod lang_cmd;
pub mod output;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::source::{MemorySource, PageExtractor, ResultSource};

/// Result sources loaded from command-line inputs.
///
/// A saved JSON result becomes the in-memory source; a saved page becomes
/// the extractor fallback. Registration order matches the web client:
/// supplied result first, page reconstruction second.
pub struct LoadedSources {
    memory: Option<MemorySource>,
    page: Option<PageExtractor>,
}

impl LoadedSources {
    /// Read the optional result and page files.
    pub fn load(result_path: Option<&Path>, page_path: Option<&Path>) -> Result<Self> {
        let memory = match result_path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read result file {}", path.display()))?;
                let result = serde_json::from_str(&json)
                    .with_context(|| format!("invalid result JSON in {}", path.display()))?;
                Some(MemorySource::new(result))
            }
            None => None,
        };

        let page = match page_path {
            Some(path) => {
                let html = fs::read_to_string(path)
                    .with_context(|| format!("failed to read page file {}", path.display()))?;
                Some(PageExtractor::new(html))
            }
            None => None,
        };

        Ok(Self { memory, page })
    }

    /// Sources in resolution order.
    pub fn as_refs(&self) -> Vec<&dyn ResultSource> {
        let mut sources: Vec<&dyn ResultSource> = Vec::new();
        if let Some(memory) = &self.memory {
            sources.push(memory);
        }
        if let Some(page) = &self.page {
            sources.push(page);
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_prefers_result_over_page() {
        let dir = tempfile::tempdir().unwrap();

        let result_path = dir.path().join("result.json");
        let mut file = fs::File::create(&result_path).unwrap();
        write!(file, r#"{{"filtered_tokens": ["memory"]}}"#).unwrap();

        let page_path = dir.path().join("page.html");
        fs::write(
            &page_path,
            r#"<div id="filtered"><span class="token">page</span></div>"#,
        )
        .unwrap();

        let sources = LoadedSources::load(Some(&result_path), Some(&page_path)).unwrap();
        let refs = sources.as_refs();
        assert_eq!(refs.len(), 2);

        let resolved = crate::source::resolve_first(&refs).unwrap();
        assert_eq!(resolved.filtered_tokens.unwrap(), ["memory"]);
    }

    #[test]
    fn test_load_with_nothing_resolves_nothing() {
        let sources = LoadedSources::load(None, None).unwrap();
        assert!(sources.as_refs().is_empty());
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        assert!(LoadedSources::load(Some(&path), None).is_err());
    }
}
