//! Draw the word-frequency chart for a saved result or page.

use std::path::Path;

use anyhow::Result;

use crate::alert::{Level, Notifier};
use crate::chart;
use crate::cli::LoadedSources;
use crate::i18n::{localize, Lang, StringKey};

/// Run the chart command.
pub fn run(
    result_path: Option<&Path>,
    page_path: Option<&Path>,
    lang: Lang,
    notifier: &dyn Notifier,
) -> Result<()> {
    let sources = LoadedSources::load(result_path, page_path)?;

    match chart::render(&sources.as_refs(), lang) {
        Some(rendered) => print!("{rendered}"),
        None => notifier.notify(Level::Warning, localize(lang, StringKey::NoData)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::test_support::RecordingNotifier;
    use std::fs;

    #[test]
    fn test_chart_without_frequency_data_warns() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        // Token region but no frequency table.
        fs::write(
            &page_path,
            r#"<div id="filtered"><span class="token">ក</span></div>"#,
        )
        .unwrap();

        let notifier = RecordingNotifier::default();
        run(None, Some(&page_path), Lang::En, &notifier).unwrap();

        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, Level::Warning);
    }
}
