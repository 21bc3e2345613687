//! Export orchestration: resolve a result, convert, write the file.

pub mod convert;

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::info;

use crate::alert::{Level, Notifier};
use crate::error::{Error, Result};
use crate::i18n::{localize, Lang, StringKey};
use crate::source::{resolve_first, ResultSource};

/// Export format selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Indented JSON.
    Json,
    /// Quoted CSV rows.
    Csv,
    /// Plain-text report.
    Txt,
}

impl ExportFormat {
    /// Fixed output filename for this format.
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Json => "khmer_nlp_analysis.json",
            ExportFormat::Csv => "khmer_nlp_analysis.csv",
            ExportFormat::Txt => "khmer_nlp_analysis.txt",
        }
    }

    /// Media type recorded for the exported file.
    pub fn media_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Txt => "text/plain",
        }
    }

    /// Uppercased label used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Txt => "TXT",
        }
    }
}

/// Orchestrates result resolution, conversion, and file output.
///
/// Sources are consulted in registration order; an explicitly supplied
/// result therefore shadows page reconstruction.
pub struct ExportController<'a> {
    sources: Vec<&'a dyn ResultSource>,
    out_dir: PathBuf,
    lang: Lang,
}

impl<'a> ExportController<'a> {
    /// Build a controller writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>, lang: Lang) -> Self {
        Self {
            sources: Vec::new(),
            out_dir: out_dir.into(),
            lang,
        }
    }

    /// Register a result source. Earlier registrations win.
    pub fn with_source(mut self, source: &'a dyn ResultSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Export the resolved result in the given format.
    ///
    /// Returns the written path, or `None` when no source resolved a
    /// result; in that case a warning is shown and nothing is written.
    pub fn export(&self, format: ExportFormat, notifier: &dyn Notifier) -> Result<Option<PathBuf>> {
        let Some(result) = resolve_first(&self.sources) else {
            notifier.notify(Level::Warning, localize(self.lang, StringKey::NoData));
            return Ok(None);
        };

        let content = match format {
            ExportFormat::Json => convert::to_json(&result),
            ExportFormat::Csv => convert::to_csv(&result, self.lang),
            ExportFormat::Txt => convert::to_txt(&result, self.lang),
        };

        let path = self.out_dir.join(format.filename());
        fs::write(&path, content).map_err(|source| Error::WriteExport {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), media_type = format.media_type(), "wrote export");

        notifier.notify(
            Level::Success,
            &format!("{} {}", localize(self.lang, StringKey::Exported), format.label()),
        );
        Ok(Some(path))
    }
}
