pub(crate) mod config;
pub(crate) mod fetch;
pub(crate) mod link;
pub(crate) mod list;
pub(crate) mod serve;
pub(crate) mod show;
pub(crate) mod stats;

use fallbacks_catalog::Badge;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Colored badge label, or an empty string for badge-less entries.
pub(crate) fn badge_text(badge: Option<Badge>) -> String {
    let Some(badge) = badge else {
        return String::new();
    };
    let label = badge.label();
    match badge {
        Badge::New => label.if_supports_color(Stdout, |t| t.green()).to_string(),
        Badge::Popular => label.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        Badge::Stable => label.if_supports_color(Stdout, |t| t.blue()).to_string(),
        Badge::Beta => label.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        Badge::Experimental => label.if_supports_color(Stdout, |t| t.red()).to_string(),
    }
}

/// Comma-joined display labels.
pub(crate) fn join_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels.into_iter().collect::<Vec<_>>().join(", ")
}
