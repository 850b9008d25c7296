//! The validated, immutable template catalog.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::CatalogEntry;
use crate::yaml::YamlError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Yaml(#[from] YamlError),

    /// Ids are lowercase ASCII letters, digits, and hyphens.
    #[error("Invalid entry id '{0}': expected lowercase letters, digits, and '-'")]
    InvalidId(String),

    #[error("Duplicate entry id '{0}'")]
    DuplicateId(String),

    #[error("Entry '{id}': title must be 1..=100 characters, got {len}")]
    InvalidTitle { id: String, len: usize },

    #[error("Entry '{id}': description must be 1..=500 characters, got {len}")]
    InvalidDescription { id: String, len: usize },

    #[error("Entry '{0}': template path is empty")]
    MissingTemplatePath(String),
}

/// The full entry list, fixed at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate `entries` and wrap them, preserving their order.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            validate_entry(entry)?;
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that a template id is a non-empty `[a-z0-9-]+` slug.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn validate_entry(entry: &CatalogEntry) -> Result<(), CatalogError> {
    if !is_valid_id(&entry.id) {
        return Err(CatalogError::InvalidId(entry.id.clone()));
    }
    let title_len = entry.title.chars().count();
    if title_len == 0 || title_len > MAX_TITLE_LEN {
        return Err(CatalogError::InvalidTitle {
            id: entry.id.clone(),
            len: title_len,
        });
    }
    let description_len = entry.description.chars().count();
    if description_len == 0 || description_len > MAX_DESCRIPTION_LEN {
        return Err(CatalogError::InvalidDescription {
            id: entry.id.clone(),
            len: description_len,
        });
    }
    if entry.template_path.trim().is_empty() {
        return Err(CatalogError::MissingTemplatePath(entry.id.clone()));
    }
    Ok(())
}
