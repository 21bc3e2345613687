//! Submit text to the server for analysis.
//!
//! Mirrors the submit flow of the web form: empty or whitespace-only
//! input is rejected with a warning before any request is made.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::alert::{Level, Notifier};
use crate::client::ServerClient;
use crate::export::{convert, ExportController, ExportFormat};
use crate::i18n::{localize, Lang, StringKey};
use crate::source::MemorySource;

/// Run the analyze command.
///
/// On success the parsed result is printed as JSON, and optionally
/// exported in `export_format` without a second round trip.
pub async fn run(
    client: &ServerClient,
    text: &str,
    lang: Lang,
    export_format: Option<ExportFormat>,
    out_dir: &Path,
    notifier: &dyn Notifier,
) -> Result<()> {
    if text.trim().is_empty() {
        notifier.notify(Level::Warning, localize(lang, StringKey::EnterText));
        return Ok(());
    }

    let result = match client.analyze(text).await {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "analysis request failed");
            notifier.notify(Level::Danger, &err.to_string());
            return Ok(());
        }
    };

    println!("{}", convert::to_json(&result));

    if let Some(format) = export_format {
        let source = MemorySource::new(result);
        ExportController::new(out_dir, lang)
            .with_source(&source)
            .export(format, notifier)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::test_support::RecordingNotifier;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_whitespace_input_suppresses_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ServerClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
        let notifier = RecordingNotifier::default();
        let dir = tempfile::tempdir().unwrap();

        run(&client, "   \t", Lang::En, None, dir.path(), &notifier)
            .await
            .unwrap();

        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, Level::Warning);
        assert_eq!(notifications[0].1, "Please enter text before analyzing");
    }

    #[tokio::test]
    async fn test_network_failure_is_a_danger_notification() {
        let server = MockServer::start().await;
        let client = ServerClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
        drop(server);

        let notifier = RecordingNotifier::default();
        let dir = tempfile::tempdir().unwrap();

        run(&client, "ភាសាខ្មែរ", Lang::En, None, dir.path(), &notifier)
            .await
            .unwrap();

        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, Level::Danger);
    }

    #[tokio::test]
    async fn test_analyze_then_export_chains_the_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "filtered_tokens": ["ភាសា"],
                "removed_tokens": [],
                "frequency_tokens": {"ភាសា": 1},
                "stats": {"original_tokens": 1, "filtered_tokens": 1, "removed_tokens": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServerClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
        let notifier = RecordingNotifier::default();
        let dir = tempfile::tempdir().unwrap();

        run(
            &client,
            "ភាសា",
            Lang::En,
            Some(ExportFormat::Txt),
            dir.path(),
            &notifier,
        )
        .await
        .unwrap();

        let exported = std::fs::read_to_string(dir.path().join("khmer_nlp_analysis.txt")).unwrap();
        assert!(exported.contains("ភាសា"));

        let notifications = notifier.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].1, "Exported as format TXT");
    }
}
