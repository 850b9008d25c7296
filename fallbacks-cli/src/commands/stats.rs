use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_catalog::Catalog;
use fallbacks_lib::Gallery;

use crate::commands::join_labels;

/// Print catalog counts and every facet value available for filtering.
pub(crate) fn run_stats(catalog: &Catalog) {
    let mut gallery = Gallery::new(catalog);
    let stats = gallery.stats();
    let facets = gallery.facets();

    log::info!("{}", "Catalog".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Templates:   {}", stats.total);
    log::info!(
        "  Categories:  {:>3}  {}",
        stats.categories,
        join_labels(facets.categories.iter().map(|c| c.label()))
    );
    log::info!(
        "  Tags:        {:>3}  {}",
        stats.tags,
        join_labels(facets.tags.iter().map(|t| t.as_str()))
    );
    log::info!(
        "  Languages:   {:>3}  {}",
        stats.languages,
        join_labels(facets.languages.iter().map(|l| l.label()))
    );
    log::info!(
        "  Badges:      {:>3}  {}",
        stats.badges,
        join_labels(facets.badges.iter().map(|b| b.label()))
    );

    let unbadged = catalog.entries().iter().filter(|e| e.badge.is_none()).count();
    if unbadged > 0 {
        log::info!(
            "  {}",
            format!("{unbadged} templates have no badge").if_supports_color(Stdout, |t| t.dimmed())
        );
    }
}
