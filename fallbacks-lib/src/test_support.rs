//! Entry builders shared by the unit tests.

use fallbacks_catalog::{Badge, Catalog, CatalogEntry, Category, Complexity, Feature, Language};

pub(crate) fn entry(id: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        title: format!("Template {id}"),
        description: "A fallback view".to_string(),
        category: Category::Minimal,
        tags: vec![],
        features: vec![],
        languages: vec![],
        badge: None,
        complexity: Complexity::Simple,
        template_path: format!("app/components/error-boundaries/{id}.tsx"),
        usage_example: None,
    }
}

pub(crate) fn with_badge(mut e: CatalogEntry, badge: Option<Badge>) -> CatalogEntry {
    e.badge = badge;
    e
}

pub(crate) fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

/// A small catalog covering every criterion.
pub(crate) fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            title: "Retry Boundary".into(),
            description: "Re-renders the failed subtree".into(),
            category: Category::Interactive,
            features: vec![Feature::Retry, Feature::Loading],
            languages: vec![Language::Tsx],
            badge: Some(Badge::Popular),
            complexity: Complexity::Intermediate,
            ..entry("retry")
        },
        CatalogEntry {
            title: "Dark Mode".into(),
            description: "High contrast for dark interfaces".into(),
            category: Category::Themed,
            tags: vec![Feature::DarkMode, Feature::Themed],
            features: vec![Feature::Retry],
            languages: vec![Language::Tsx, Language::Tailwind],
            badge: Some(Badge::New),
            ..entry("dark-mode")
        },
        CatalogEntry {
            title: "Minimal".into(),
            description: "A single line of text".into(),
            tags: vec![Feature::Minimal],
            features: vec![Feature::Essential],
            languages: vec![Language::Tsx],
            badge: None,
            ..entry("minimal")
        },
        CatalogEntry {
            title: "Fancy".into(),
            description: "Layered shadows and decoration".into(),
            category: Category::Themed,
            tags: vec![Feature::Fancy, Feature::Shadow],
            features: vec![Feature::Animated],
            languages: vec![Language::Tsx, Language::Css],
            badge: Some(Badge::Experimental),
            complexity: Complexity::Advanced,
            ..entry("fancy")
        },
        CatalogEntry {
            title: "Detailed".into(),
            description: "Full diagnostic view with the component stack".into(),
            category: Category::Detailed,
            tags: vec![Feature::Details, Feature::StackTrace],
            features: vec![Feature::Copy],
            languages: vec![Language::Tsx, Language::Tailwind],
            badge: Some(Badge::Stable),
            complexity: Complexity::Advanced,
            ..entry("detailed")
        },
    ]
}

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new(sample_entries()).unwrap()
}
