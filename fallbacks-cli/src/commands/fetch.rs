use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_catalog::Catalog;
use fallbacks_lib::{Settings, TemplateLoader};

use crate::CliError;

/// Load a template's source through the same checks the server applies.
pub(crate) fn run_fetch(
    catalog: &Catalog,
    settings: &Settings,
    id: &str,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| CliError::unknown_template(id))?;

    let root = root.unwrap_or_else(|| settings.server.template_root.clone());
    let loader = TemplateLoader::new(root).with_max_bytes(settings.server.max_template_bytes);
    let source = loader.load(&entry.template_path)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &source.content)?;
            log::info!(
                "{} Wrote {} ({} bytes) to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                source.file_name,
                source.content.len(),
                path.display(),
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(source.content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
