//! YAML loading for the human-curated template catalog.
//!
//! A catalog is either a single file holding a YAML sequence of entries or
//! a directory of such files, merged in file name order.

use crate::catalog::{Catalog, CatalogError};
use crate::types::CatalogEntry;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Load entries from one YAML file containing a sequence of `CatalogEntry`.
pub fn load_entries(path: &Path) -> Result<Vec<CatalogEntry>, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_entries(&contents, &path.display().to_string())
}

/// Load entries from every `.yaml`/`.yml` file in a directory.
///
/// Files are read in file name order so the merged catalog order is
/// deterministic. A missing directory yields no entries.
pub fn load_entries_dir(dir: &Path) -> Result<Vec<CatalogEntry>, YamlError> {
    let mut all = Vec::new();
    for file in yaml_files(dir)? {
        all.extend(load_entries(&file)?);
    }
    Ok(all)
}

fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| YamlError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("yaml" | "yml")
                )
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Load and validate a catalog from a file or a directory of files.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let entries = if path.is_dir() {
        load_entries_dir(path)?
    } else {
        load_entries(path)?
    };
    log::debug!(
        "Loaded {} catalog entries from {}",
        entries.len(),
        path.display()
    );
    Catalog::new(entries)
}

pub(crate) fn parse_entries(contents: &str, origin: &str) -> Result<Vec<CatalogEntry>, YamlError> {
    // An empty file parses as YAML null rather than an empty sequence.
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    })
}
