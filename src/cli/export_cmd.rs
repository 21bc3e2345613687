//! Export a result reconstructed from saved inputs.

use std::path::Path;

use anyhow::Result;

use crate::alert::Notifier;
use crate::cli::LoadedSources;
use crate::export::{ExportController, ExportFormat};
use crate::i18n::Lang;

/// Run the export command against a saved result and/or page file.
pub fn run(
    format: ExportFormat,
    result_path: Option<&Path>,
    page_path: Option<&Path>,
    out_dir: &Path,
    lang: Lang,
    notifier: &dyn Notifier,
) -> Result<()> {
    let sources = LoadedSources::load(result_path, page_path)?;

    let mut controller = ExportController::new(out_dir, lang);
    for source in sources.as_refs() {
        controller = controller.with_source(source);
    }
    controller.export(format, notifier)?;
    Ok(())
}
