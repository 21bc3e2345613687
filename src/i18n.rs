//! Localized user-facing strings.
//!
//! A typed key lookup over compile-time tables replaces the ad hoc
//! per-call fallback literals of the web client. Khmer values come from
//! the server's language dictionary; English values are the client's
//! hardcoded fallback strings.

use clap::ValueEnum;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    /// Khmer.
    Km,
    /// English.
    #[default]
    En,
}

impl Lang {
    /// Path segment used by the server's language endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Km => "km",
            Lang::En => "en",
        }
    }
}

/// Keys for every user-facing string the client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey {
    /// Title line of the plain-text report.
    AppName,
    /// Heading of the statistics block.
    Statistics,
    /// Heading of the filtered-tokens block.
    FilteredTokens,
    /// Heading of the removed-tokens block.
    RemovedTokens,
    /// CSV type column value for retained tokens.
    TypeFiltered,
    /// CSV type column value for removed tokens.
    TypeRemoved,
    /// CSV word column heading.
    Word,
    /// CSV frequency column heading.
    Frequency,
    /// Chart title.
    WordFrequency,
    /// Character-count label.
    Chars,
    /// Word-count label.
    Words,
    /// Warning shown when the analyze input is empty.
    EnterText,
    /// Warning shown when no result can be resolved for export.
    NoData,
    /// Success message prefix after an export, followed by the format.
    Exported,
    /// Success message after copying a token.
    CopyToken,
    /// Label for the language-switch action.
    SwitchLanguage,
    /// Danger message when the language switch fails.
    SwitchFailed,
    /// Display name of the Khmer language.
    Khmer,
    /// Display name of the English language.
    English,
}

/// Look up a localized string.
pub fn localize(lang: Lang, key: StringKey) -> &'static str {
    use StringKey::*;

    match lang {
        Lang::En => match key {
            AppName => "Khmer NLP Analysis Results",
            Statistics => "Statistics",
            FilteredTokens => "Filtered Tokens",
            RemovedTokens => "Removed Tokens",
            TypeFiltered => "Filtered",
            TypeRemoved => "Removed",
            Word => "Word",
            Frequency => "Frequency",
            WordFrequency => "Word Frequency",
            Chars => "Characters",
            Words => "Words",
            EnterText => "Please enter text before analyzing",
            NoData => "No data available for export",
            Exported => "Exported as format",
            CopyToken => "Copied word to clipboard",
            SwitchLanguage => "Switch Language",
            SwitchFailed => "Failed to switch language",
            Khmer => "Khmer",
            English => "English",
        },
        Lang::Km => match key {
            AppName => "ប្រព័ន្ធលុបពាក្យគន្លឹះភាសាខ្មែរ",
            Statistics => "ការវិភាគ",
            FilteredTokens => "ពាក្យដែលបានច្រោះ",
            RemovedTokens => "ពាក្យដែលលុប",
            TypeFiltered => "ពាក្យដែលបានច្រោះ",
            TypeRemoved => "ពាក្យដែលលុប",
            Word => "ពាក្យ",
            Frequency => "ប្រេកង់",
            WordFrequency => "ប្រេកង់ពាក្យ",
            Chars => "អក្សរ",
            Words => "ពាក្យ",
            EnterText => "សូមបញ្ចូលអត្ថបទមុនពេលវិភាគ",
            NoData => "មិនមានទិន្នន័យសម្រាប់នាំចេញ",
            Exported => "បាននាំចេញជាទ្រង់ទ្រាយ",
            CopyToken => "បានចម្លងពាក្យទៅក្ដារតម្បៀតខ្ទាស់",
            SwitchLanguage => "ប្តូរភាសា",
            // The language dictionary has no Khmer entry for this message.
            SwitchFailed => "Failed to switch language",
            Khmer => "ភាសាខ្មែរ",
            English => "ភាសាអង់គ្លេស",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_fallback_literals() {
        assert_eq!(localize(Lang::En, StringKey::NoData), "No data available for export");
        assert_eq!(localize(Lang::En, StringKey::TypeFiltered), "Filtered");
        assert_eq!(localize(Lang::En, StringKey::TypeRemoved), "Removed");
    }

    #[test]
    fn test_khmer_table() {
        assert_eq!(localize(Lang::Km, StringKey::Word), "ពាក្យ");
        assert_eq!(localize(Lang::Km, StringKey::Chars), "អក្សរ");
    }

    #[test]
    fn test_lang_path_segment() {
        assert_eq!(Lang::Km.as_str(), "km");
        assert_eq!(Lang::En.as_str(), "en");
    }
}
