use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_catalog::Catalog;
use fallbacks_lib::Gallery;

use crate::CliError;
use crate::cli_types::FilterArgs;

/// Print the share link query string reproducing the filter flags.
pub(crate) fn run_link(catalog: &Catalog, filter: &FilterArgs) -> Result<(), CliError> {
    let (criteria, sort) = filter.to_state()?;
    let mut gallery = Gallery::with_state(catalog, criteria, sort);
    let query = gallery.share_query().to_query_string()?;

    if query.is_empty() {
        log::info!(
            "{}",
            "(default view, no query string needed)".if_supports_color(Stdout, |t| t.dimmed())
        );
    } else {
        log::info!("?{}", query);
    }
    log::debug!("{}", gallery.summary());
    Ok(())
}
