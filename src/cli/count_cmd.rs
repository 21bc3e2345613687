//! Character and word counter.

use crate::counter::count_text;
use crate::i18n::{localize, Lang, StringKey};

/// Format the counter line the way the web counter displays it.
pub fn counter_line(text: &str, lang: Lang) -> String {
    let count = count_text(text);
    format!(
        "{} {} | {} {}",
        count.chars,
        localize(lang, StringKey::Chars),
        count.words,
        localize(lang, StringKey::Words),
    )
}

/// Run the count command.
pub fn run(text: &str, lang: Lang) {
    println!("{}", counter_line(text, lang));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_line_format() {
        assert_eq!(counter_line("  ab  cd ", Lang::En), "9 Characters | 2 Words");
    }

    #[test]
    fn test_counter_line_khmer_labels() {
        assert_eq!(counter_line("ក ខ", Lang::Km), "3 អក្សរ | 2 ពាក្យ");
    }
}
