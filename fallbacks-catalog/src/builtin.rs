//! The catalog bundled with the gallery.

use crate::catalog::{Catalog, CatalogError};
use crate::yaml::parse_entries;

const BUILTIN_YAML: &str = include_str!("../catalog/templates.yaml");

/// Parse and validate the bundled template catalog.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let entries = parse_entries(BUILTIN_YAML, "<builtin catalog>")?;
    Catalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Badge, Category};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.len() >= 20);
        for category in Category::all() {
            assert!(
                catalog.entries().iter().any(|e| e.category == *category),
                "no builtin entry in category {:?}",
                category
            );
        }
    }

    #[test]
    fn builtin_catalog_has_unbadged_entries() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.entries().iter().any(|e| e.badge.is_none()));
        assert!(catalog.entries().iter().any(|e| e.badge == Some(Badge::New)));
    }

    #[test]
    fn builtin_template_paths_are_components() {
        let catalog = builtin_catalog().unwrap();
        for entry in catalog.entries() {
            assert!(
                entry
                    .template_path
                    .starts_with("app/components/error-boundaries/"),
                "unexpected template path for {}",
                entry.id
            );
            assert!(entry.template_path.ends_with(".tsx"));
        }
    }
}
