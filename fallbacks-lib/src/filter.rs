//! Catalog filter engine.
//!
//! Returns the entries that satisfy every active criterion, in catalog
//! order. Criteria are checked cheapest first: category, badge, language,
//! tags, and free text last.

use fallbacks_catalog::CatalogEntry;

use crate::criteria::Criteria;

/// Filter `entries` by `criteria`, preserving input order.
///
/// With no active criteria every entry is returned unchanged. Entries are
/// borrowed, never cloned or modified.
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], criteria: &Criteria) -> Vec<&'a CatalogEntry> {
    if criteria.is_empty() {
        return entries.iter().collect();
    }

    let needle = criteria.trimmed_query().to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_entry(entry, criteria, &needle))
        .collect()
}

/// Check one entry against `criteria`. `needle` is the trimmed, lowercased query.
pub fn matches_entry(entry: &CatalogEntry, criteria: &Criteria, needle: &str) -> bool {
    if let Some(category) = criteria.category {
        if entry.category != category {
            return false;
        }
    }

    if !criteria.badges.is_empty() {
        match entry.badge {
            Some(badge) if criteria.badges.contains(&badge) => {}
            _ => return false,
        }
    }

    if !criteria
        .languages
        .iter()
        .all(|&language| entry.has_language(language))
    {
        return false;
    }

    if !criteria.tags.iter().all(|&tag| entry.has_label(tag)) {
        return false;
    }

    matches_text(entry, needle)
}

/// Case-insensitive substring search over the entry's text and labels.
///
/// `needle` must already be trimmed and lowercased; an empty needle matches.
pub fn matches_text(entry: &CatalogEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.id.to_lowercase().contains(needle)
        || entry.category.as_str().contains(needle)
        || entry.labels().any(|label| label.as_str().contains(needle))
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
