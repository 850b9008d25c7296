//! Gallery state: the user's selection, the debounced search, and the
//! memoized filtered and sorted view of the catalog.

use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use fallbacks_catalog::{Badge, Catalog, CatalogEntry, Category, Feature, Language};

use crate::criteria::{Criteria, toggle};
use crate::debounce::Debouncer;
use crate::filter::filter_entries;
use crate::query::GalleryQuery;
use crate::sort::{SortField, SortSpec, sort_entries};

/// Filters then sorts one slice of entries.
pub(crate) type Pipeline =
    for<'e> fn(&'e [CatalogEntry], &Criteria, SortSpec) -> Vec<&'e CatalogEntry>;

fn run_pipeline<'e>(
    entries: &'e [CatalogEntry],
    criteria: &Criteria,
    sort: SortSpec,
) -> Vec<&'e CatalogEntry> {
    sort_entries(&filter_entries(entries, criteria), sort)
}

/// Distinct values present anywhere in a catalog, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: BTreeSet<Category>,
    /// Union of every entry's tags and features.
    pub tags: BTreeSet<Feature>,
    pub languages: BTreeSet<Language>,
    pub badges: BTreeSet<Badge>,
}

impl Facets {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut facets = Self::default();
        for entry in entries {
            facets.categories.insert(entry.category);
            facets.tags.extend(entry.labels());
            facets.languages.extend(entry.languages.iter().copied());
            facets.badges.extend(entry.badge);
        }
        facets
    }
}

/// Counts shown alongside the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub total: usize,
    pub filtered: usize,
    pub categories: usize,
    pub tags: usize,
    pub languages: usize,
    pub badges: usize,
    pub has_active_filters: bool,
}

#[derive(Debug)]
struct Cached<'a> {
    criteria: Criteria,
    sort: SortSpec,
    entries: Vec<&'a CatalogEntry>,
}

/// Interactive view over a borrowed catalog.
pub struct Gallery<'a> {
    catalog: &'a Catalog,
    facets: Facets,
    /// Search text as typed, before debouncing.
    search_input: String,
    search: Debouncer<String>,
    criteria: Criteria,
    sort: SortSpec,
    cache: Option<Cached<'a>>,
    computations: usize,
    error: Option<String>,
    pipeline: Pipeline,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            facets: Facets::from_entries(catalog.entries()),
            search_input: String::new(),
            search: Debouncer::default(),
            criteria: Criteria::default(),
            sort: SortSpec::default(),
            cache: None,
            computations: 0,
            error: None,
            pipeline: run_pipeline,
        }
    }

    /// Start from an existing selection. The search query applies immediately.
    pub fn with_state(catalog: &'a Catalog, criteria: Criteria, sort: SortSpec) -> Self {
        let mut gallery = Self::new(catalog);
        gallery.search_input = criteria.query.clone();
        gallery.criteria = criteria;
        gallery.sort = sort;
        gallery
    }

    /// Start from a decoded share link.
    pub fn from_query(catalog: &'a Catalog, query: &GalleryQuery) -> Self {
        let (criteria, sort) = query.apply();
        Self::with_state(catalog, criteria, sort)
    }

    #[cfg(test)]
    pub(crate) fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// True while a typed query is waiting for its debounce delay.
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Message from the last failed recomputation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// How many times the filtered view has been recomputed.
    pub fn computations(&self) -> usize {
        self.computations
    }

    // -- search --

    /// Record typed search text. It takes effect once `tick` sees the delay elapse.
    pub fn set_search_query(&mut self, raw: impl Into<String>, now: Instant) {
        let raw = raw.into();
        self.search_input = raw.clone();
        self.search.push(raw, now);
    }

    /// Apply the pending search if it is due. Returns whether it was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(query) => {
                log::debug!("Applying debounced search query {:?}", query);
                self.criteria.query = query;
                true
            }
            None => false,
        }
    }

    /// Apply the pending search immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.search.flush() {
            Some(query) => {
                self.criteria.query = query;
                true
            }
            None => false,
        }
    }

    // -- facets --

    pub fn set_category(&mut self, category: Option<Category>) {
        self.criteria.category = category;
    }

    pub fn clear_category(&mut self) {
        self.criteria.category = None;
    }

    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: Feature) -> bool {
        toggle(&mut self.criteria.tags, tag)
    }

    pub fn add_tag(&mut self, tag: Feature) {
        self.criteria.tags.insert(tag);
    }

    pub fn remove_tag(&mut self, tag: Feature) {
        self.criteria.tags.remove(&tag);
    }

    pub fn clear_tags(&mut self) {
        self.criteria.tags.clear();
    }

    pub fn toggle_language(&mut self, language: Language) -> bool {
        toggle(&mut self.criteria.languages, language)
    }

    pub fn clear_languages(&mut self) {
        self.criteria.languages.clear();
    }

    pub fn toggle_badge(&mut self, badge: Badge) -> bool {
        toggle(&mut self.criteria.badges, badge)
    }

    pub fn clear_badges(&mut self) {
        self.criteria.badges.clear();
    }

    // -- sort --

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort.field = field;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort.direction = self.sort.direction.toggled();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Reset search, every facet, and the sort order at once.
    pub fn clear_all(&mut self) {
        self.search.cancel();
        self.search_input.clear();
        self.criteria = Criteria::default();
        self.sort = SortSpec::default();
    }

    // -- derived --

    /// The filtered and sorted entries, recomputed only when the selection changed.
    pub fn results(&mut self) -> &[&'a CatalogEntry] {
        let stale = match &self.cache {
            Some(cached) => cached.criteria != self.criteria || cached.sort != self.sort,
            None => true,
        };
        if stale {
            let entries = self.compute();
            self.cache = Some(Cached {
                criteria: self.criteria.clone(),
                sort: self.sort,
                entries,
            });
        }
        match &self.cache {
            Some(cached) => &cached.entries,
            None => &[],
        }
    }

    fn compute(&mut self) -> Vec<&'a CatalogEntry> {
        self.computations += 1;
        log::debug!(
            "Recomputing gallery view ({} active filters, sort {} {})",
            self.criteria.active_count(),
            self.sort.field.as_str(),
            self.sort.direction.as_str()
        );
        let entries = self.catalog.entries();
        let criteria = &self.criteria;
        let sort = self.sort;
        let pipeline = self.pipeline;
        match panic::catch_unwind(AssertUnwindSafe(|| pipeline(entries, criteria, sort))) {
            Ok(found) => {
                self.error = None;
                found
            }
            Err(payload) => {
                let message = format!("Failed to filter templates: {}", panic_message(&*payload));
                log::error!("{}", message);
                self.error = Some(message);
                Vec::new()
            }
        }
    }

    pub fn stats(&mut self) -> GalleryStats {
        let filtered = self.results().len();
        GalleryStats {
            total: self.catalog.len(),
            filtered,
            categories: self.facets.categories.len(),
            tags: self.facets.tags.len(),
            languages: self.facets.languages.len(),
            badges: self.facets.badges.len(),
            has_active_filters: !self.criteria.is_empty(),
        }
    }

    /// The minimal query string state for a share link.
    pub fn share_query(&self) -> GalleryQuery {
        GalleryQuery::from_state(&self.criteria, self.sort)
    }

    /// One-line description of the current results.
    pub fn summary(&mut self) -> String {
        let count = self.results().len();
        let mut line = match count {
            0 => "No results found".to_string(),
            1 => "Found 1 result".to_string(),
            n => format!("Found {n} results"),
        };
        let query = self.criteria.trimmed_query();
        if !query.is_empty() {
            line.push_str(&format!(" for \"{query}\""));
        }
        line
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_string()
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
