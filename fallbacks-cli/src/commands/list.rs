use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_catalog::Catalog;
use fallbacks_lib::Gallery;

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::commands::badge_text;

/// List the templates matching the filter flags.
pub(crate) fn run_list(catalog: &Catalog, filter: &FilterArgs) -> Result<(), CliError> {
    let (criteria, sort) = filter.to_state()?;
    let mut gallery = Gallery::with_state(catalog, criteria, sort);

    log::info!("{}", gallery.summary().if_supports_color(Stdout, |t| t.bold()));
    if let Some(error) = gallery.error() {
        log::warn!("{}", error);
    }
    log::info!("");

    let width = catalog.entries().iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in gallery.results() {
        log::info!(
            "  {}  {} [{}] {}",
            format!("{:<width$}", entry.id).if_supports_color(Stdout, |t| t.bold()),
            entry.title,
            entry.category.label().if_supports_color(Stdout, |t| t.cyan()),
            badge_text(entry.badge),
        );
    }
    Ok(())
}
