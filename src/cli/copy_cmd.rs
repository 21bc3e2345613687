//! Copy a token to the system clipboard.

use tracing::error;

use crate::alert::{Level, Notifier};
use crate::i18n::{localize, Lang, StringKey};

/// Run the copy command.
///
/// A clipboard failure is logged but produces no notification; the only
/// user-visible outcome is the success message.
pub fn run(token: &str, lang: Lang, notifier: &dyn Notifier) {
    let copied =
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(token.to_string()));

    match copied {
        Ok(()) => notifier.notify(Level::Success, localize(lang, StringKey::CopyToken)),
        Err(err) => error!(error = %err, "failed to copy token to clipboard"),
    }
}
