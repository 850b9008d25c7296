//! Template catalog data model, closed vocabularies, and YAML I/O.
//!
//! This crate defines the static gallery catalog: every error boundary
//! template the gallery presents, with the category, tag, language, badge,
//! and complexity vocabularies used to browse it. Entries are loaded once
//! and never modified; filtering and sorting live in `fallbacks-lib`.

pub mod builtin;
pub mod catalog;
pub mod types;
pub mod yaml;

pub use builtin::builtin_catalog;
pub use catalog::{Catalog, CatalogError};
pub use types::*;
pub use yaml::{YamlError, load_catalog, load_entries, load_entries_dir};
