//! Switch the server interface language.

use anyhow::Result;
use tracing::warn;

use crate::alert::{Level, Notifier};
use crate::client::ServerClient;
use crate::i18n::{localize, Lang, StringKey};

/// Run the lang command.
///
/// On an acknowledged switch the page is fetched again (the reload the
/// web client performed) so the next scrape sees the new language. Any
/// failure surfaces as a danger notification and leaves state unchanged.
pub async fn run(
    client: &ServerClient,
    target: Lang,
    ui_lang: Lang,
    notifier: &dyn Notifier,
) -> Result<()> {
    let switched = match client.set_language(target).await {
        Ok(switched) => switched,
        Err(err) => {
            warn!(error = %err, "language switch request failed");
            notifier.notify(Level::Danger, localize(ui_lang, StringKey::SwitchFailed));
            return Ok(());
        }
    };

    if !switched {
        notifier.notify(Level::Danger, localize(ui_lang, StringKey::SwitchFailed));
        return Ok(());
    }

    if let Err(err) = client.fetch_page().await {
        warn!(error = %err, "page reload after language switch failed");
        notifier.notify(Level::Danger, localize(ui_lang, StringKey::SwitchFailed));
        return Ok(());
    }

    let language_name = match target {
        Lang::Km => localize(ui_lang, StringKey::Khmer),
        Lang::En => localize(ui_lang, StringKey::English),
    };
    notifier.notify(
        Level::Success,
        &format!(
            "{}: {language_name}",
            localize(ui_lang, StringKey::SwitchLanguage)
        ),
    );
    Ok(())
}
