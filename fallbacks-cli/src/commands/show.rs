use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_catalog::Catalog;

use crate::CliError;
use crate::commands::{badge_text, join_labels};

/// Print every field of one catalog entry.
pub(crate) fn run_show(catalog: &Catalog, id: &str) -> Result<(), CliError> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| CliError::unknown_template(id))?;

    log::info!(
        "{} {}",
        entry.title.if_supports_color(Stdout, |t| t.bold()),
        badge_text(entry.badge),
    );
    log::info!("  {}", entry.description);
    log::info!("");
    log::info!("  Id:          {}", entry.id);
    log::info!(
        "  Category:    {}",
        entry.category.label().if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!("  Complexity:  {}", entry.complexity.label());
    if !entry.tags.is_empty() {
        log::info!("  Tags:        {}", join_labels(entry.tags.iter().map(|t| t.label())));
    }
    if !entry.features.is_empty() {
        log::info!(
            "  Features:    {}",
            join_labels(entry.features.iter().map(|f| f.label()))
        );
    }
    if !entry.languages.is_empty() {
        log::info!(
            "  Languages:   {}",
            join_labels(entry.languages.iter().map(|l| l.label()))
        );
    }
    log::info!(
        "  Source:      {}",
        entry.template_path.if_supports_color(Stdout, |t| t.dimmed())
    );

    if let Some(example) = &entry.usage_example {
        log::info!("");
        log::info!("{}", "Usage:".if_supports_color(Stdout, |t| t.bold()));
        for line in example.lines() {
            log::info!("  {}", line);
        }
    }
    Ok(())
}
