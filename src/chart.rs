//! Terminal bar chart of token frequencies.

use crate::i18n::{localize, Lang, StringKey};
use crate::source::{resolve_first, ResultSource};

/// Entries charted, in frequency-table order.
const TOP_ENTRIES: usize = 10;
/// Glyph width of the longest bar.
const BAR_WIDTH: usize = 40;

/// Render a bar chart of the first ten frequency entries.
///
/// Entries keep their table order rather than being re-sorted by count;
/// bars scale against the largest charted count. Returns `None` when no
/// source resolves a result or the frequency map is missing or empty.
pub fn render(sources: &[&dyn ResultSource], lang: Lang) -> Option<String> {
    let result = resolve_first(sources)?;
    let frequencies = result.frequency_tokens?;
    if frequencies.is_empty() {
        return None;
    }

    let entries: Vec<(&String, u64)> = frequencies
        .iter()
        .take(TOP_ENTRIES)
        .map(|(token, count)| (token, *count))
        .collect();
    let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1);
    let label_width = entries
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", localize(lang, StringKey::WordFrequency));
    for (token, count) in entries {
        let filled = ((count as usize) * BAR_WIDTH) / max as usize;
        out.push_str(&format!(
            "{token:<label_width$} {}{} {count}\n",
            "\u{2588}".repeat(filled),
            "\u{2591}".repeat(BAR_WIDTH - filled),
        ));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisResult;
    use crate::source::MemorySource;
    use indexmap::IndexMap;

    fn result_with_frequencies(entries: &[(&str, u64)]) -> AnalysisResult {
        let mut frequencies = IndexMap::new();
        for (token, count) in entries {
            frequencies.insert(token.to_string(), *count);
        }
        AnalysisResult {
            frequency_tokens: Some(frequencies),
            ..Default::default()
        }
    }

    #[test]
    fn test_chart_keeps_table_order() {
        let source = MemorySource::new(result_with_frequencies(&[
            ("គ", 1),
            ("ក", 5),
            ("ខ", 3),
        ]));

        let chart = render(&[&source], Lang::En).unwrap();
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Word Frequency");
        assert!(lines[1].starts_with("គ"));
        assert!(lines[2].starts_with("ក"));
        assert!(lines[3].starts_with("ខ"));
    }

    #[test]
    fn test_chart_takes_first_ten_entries() {
        let entries: Vec<(String, u64)> = (0..15).map(|i| (format!("t{i}"), i + 1)).collect();
        let borrowed: Vec<(&str, u64)> = entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        let source = MemorySource::new(result_with_frequencies(&borrowed));

        let chart = render(&[&source], Lang::En).unwrap();
        // Title plus ten bars.
        assert_eq!(chart.lines().count(), 11);
        assert!(chart.contains("t9"));
        assert!(!chart.contains("t10"));
    }

    #[test]
    fn test_largest_count_fills_the_bar() {
        let source = MemorySource::new(result_with_frequencies(&[("ក", 4), ("ខ", 2)]));

        let chart = render(&[&source], Lang::En).unwrap();
        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[1].contains(&"\u{2588}".repeat(40)));
        assert!(lines[2].contains(&"\u{2588}".repeat(20)));
        assert!(lines[2].contains(&"\u{2591}".repeat(20)));
    }

    #[test]
    fn test_no_frequency_data_yields_none() {
        let source = MemorySource::new(AnalysisResult::default());
        assert!(render(&[&source], Lang::En).is_none());

        let empty = MemorySource::new(result_with_frequencies(&[]));
        assert!(render(&[&empty], Lang::En).is_none());
    }
}
