//! The user's current filter selection.

use std::collections::BTreeSet;

use fallbacks_catalog::{Badge, Category, Feature, Language};

/// Active filter criteria. Every criterion is ANDed with the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    /// Free-text query, stored untrimmed. Matching trims it.
    pub query: String,
    pub category: Option<Category>,
    /// An entry must carry every selected tag (in tags or features).
    pub tags: BTreeSet<Feature>,
    /// An entry must carry every selected language.
    pub languages: BTreeSet<Language>,
    /// An entry's badge must be one of these.
    pub badges: BTreeSet<Badge>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tag(mut self, tag: Feature) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.insert(language);
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.insert(badge);
        self
    }

    /// The query with surrounding whitespace removed.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// True when no criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.trimmed_query().is_empty()
            && self.category.is_none()
            && self.tags.is_empty()
            && self.languages.is_empty()
            && self.badges.is_empty()
    }

    /// Number of selected facet values. The free-text query is not counted.
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some())
            + self.tags.len()
            + self.languages.len()
            + self.badges.len()
    }
}

/// Add `value` if absent, remove it if present. Returns whether it is now selected.
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Criteria::new().is_empty());
        assert_eq!(Criteria::new().active_count(), 0);
    }

    #[test]
    fn whitespace_query_is_empty() {
        assert!(Criteria::new().with_query("   \t").is_empty());
        assert!(!Criteria::new().with_query(" retry ").is_empty());
    }

    #[test]
    fn active_count_ignores_query() {
        let criteria = Criteria::new()
            .with_query("retry")
            .with_category(Category::Minimal)
            .with_tag(Feature::Retry)
            .with_tag(Feature::Copy)
            .with_language(Language::Tsx)
            .with_badge(Badge::New);
        assert_eq!(criteria.active_count(), 5);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut set: BTreeSet<Feature> = [Feature::Copy, Feature::Retry].into_iter().collect();
        let original = set.clone();
        assert!(!toggle(&mut set, Feature::Copy));
        assert!(toggle(&mut set, Feature::Copy));
        assert_eq!(set, original);
    }
}
