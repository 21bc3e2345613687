//! Pure converters from an analysis result to export text.
//!
//! All three converters are total: absent sections are skipped, never an
//! error. JSON is generic serde output; CSV and TXT mirror the layouts
//! the web client produced.

use crate::i18n::{localize, Lang, StringKey};
use crate::model::AnalysisResult;

/// Width of the separator line under the plain-text report title.
const SEPARATOR_WIDTH: usize = 50;

/// Serialize a result as indented JSON.
pub fn to_json(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Render the CSV export.
///
/// A header row, then one row per filtered token (count 1), one per
/// removed token (count 1), and one per frequency entry (its count).
/// Every cell is wrapped in double quotes; embedded quotes in token text
/// are not escaped.
pub fn to_csv(result: &AnalysisResult, lang: Lang) -> String {
    let mut rows: Vec<[String; 3]> = vec![[
        localize(lang, StringKey::Word).to_string(),
        localize(lang, StringKey::Frequency).to_string(),
        "Type".to_string(),
    ]];

    if let Some(tokens) = &result.filtered_tokens {
        for token in tokens {
            rows.push([
                token.clone(),
                "1".to_string(),
                localize(lang, StringKey::TypeFiltered).to_string(),
            ]);
        }
    }

    if let Some(tokens) = &result.removed_tokens {
        for token in tokens {
            rows.push([
                token.clone(),
                "1".to_string(),
                localize(lang, StringKey::TypeRemoved).to_string(),
            ]);
        }
    }

    if let Some(frequencies) = &result.frequency_tokens {
        for (token, count) in frequencies {
            rows.push([
                token.clone(),
                count.to_string(),
                localize(lang, StringKey::TypeFiltered).to_string(),
            ]);
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the plain-text report.
///
/// Title, separator, then one block per present section: statistics as
/// `key: value` lines in field order, token lists comma-joined. An absent
/// section is omitted; an empty-but-present list still prints its header.
pub fn to_txt(result: &AnalysisResult, lang: Lang) -> String {
    let mut text = format!("{}\n", localize(lang, StringKey::AppName));
    text.push_str(&"=".repeat(SEPARATOR_WIDTH));
    text.push_str("\n\n");

    if let Some(stats) = &result.stats {
        text.push_str(&format!("{}:\n", localize(lang, StringKey::Statistics)));
        for (key, value) in stats.entries() {
            text.push_str(&format!("  {key}: {value}\n"));
        }
        text.push('\n');
    }

    if let Some(tokens) = &result.filtered_tokens {
        text.push_str(&format!("{}:\n", localize(lang, StringKey::FilteredTokens)));
        text.push_str(&tokens.join(", "));
        text.push_str("\n\n");
    }

    if let Some(tokens) = &result.removed_tokens {
        text.push_str(&format!("{}:\n", localize(lang, StringKey::RemovedTokens)));
        text.push_str(&tokens.join(", "));
        text.push_str("\n\n");
    }

    text
}
