//! Loading template source files for copy and download.
//!
//! Requested paths are untrusted. They are sanitized, checked against an
//! allow-list of directories and extensions, resolved under the template
//! root, and the file content is sanity-checked before it is returned.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::TemplateError;

/// Directories (relative to the template root) that may be served.
pub const ALLOWED_PREFIXES: &[&str] = &[
    "templates/",
    "app/components/error-boundaries/",
    "app/templates/",
];

pub const ALLOWED_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Largest template file that will be served, in bytes.
pub const MAX_TEMPLATE_BYTES: u64 = 100_000;

/// At least one of these must occur in a file for it to count as source code.
const SOURCE_MARKERS: &[&str] = &["React", "react", "export", "function", "const", "class"];

/// A template file that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// The sanitized path relative to the template root.
    pub path: String,
    /// Base name offered as the download file name.
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
}

/// Strip path traversal sequences and any character outside `[A-Za-z0-9-_./]`.
pub fn sanitize_path(raw: &str) -> String {
    raw.replace("..", "")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
        .collect()
}

/// Check a sanitized path against the allowed locations and extensions.
pub fn validate_path(path: &str) -> Result<(), TemplateError> {
    if path.is_empty() {
        return Err(TemplateError::invalid_path("path is empty after sanitizing"));
    }
    if path.contains("..") {
        return Err(TemplateError::invalid_path(path));
    }
    if !ALLOWED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return Err(TemplateError::invalid_path(format!(
            "{path} is not in a template directory"
        )));
    }
    if !ALLOWED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return Err(TemplateError::invalid_path(format!(
            "{path} has an unsupported extension"
        )));
    }
    Ok(())
}

/// Content type served for a template path, chosen by extension.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "ts" | "tsx" => "text/typescript; charset=utf-8",
        _ => "text/javascript; charset=utf-8",
    }
}

/// True when `content` looks like JavaScript/TypeScript source.
pub fn looks_like_source(content: &str) -> bool {
    SOURCE_MARKERS.iter().any(|marker| content.contains(marker))
}

/// Reads template files confined to one root directory.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    root: PathBuf,
    max_bytes: u64,
}

impl TemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_bytes: MAX_TEMPLATE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the template at `raw_path`, running every check in order.
    pub fn load(&self, raw_path: &str) -> Result<TemplateSource, TemplateError> {
        if raw_path.trim().is_empty() {
            return Err(TemplateError::MissingPath);
        }

        let path = sanitize_path(raw_path);
        validate_path(&path).inspect_err(|_| {
            log::warn!("Invalid template path requested: {}", raw_path);
        })?;

        let resolved = self.resolve(&path)?;
        log::debug!("Reading template file {}", resolved.display());

        let size = std::fs::metadata(&resolved)
            .map_err(|e| map_io_error(e, &path))?
            .len();
        if size > self.max_bytes {
            return Err(TemplateError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let content = std::fs::read_to_string(&resolved).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => TemplateError::NotSource,
            _ => map_io_error(e, &path),
        })?;
        if content.is_empty() {
            return Err(TemplateError::Empty);
        }
        if !looks_like_source(&content) {
            return Err(TemplateError::NotSource);
        }

        let file_name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Ok(TemplateSource {
            content_type: content_type_for(&path),
            file_name,
            path,
            content,
        })
    }

    /// Resolve `path` under the root, following symlinks, and confirm it stays inside.
    fn resolve(&self, path: &str) -> Result<PathBuf, TemplateError> {
        let root = self.root.canonicalize().map_err(|e| {
            log::error!("Template root {} is unusable: {}", self.root.display(), e);
            TemplateError::Io(e)
        })?;
        let resolved = root
            .join(path)
            .canonicalize()
            .map_err(|e| map_io_error(e, path))?;
        if !resolved.starts_with(&root) {
            log::error!("Template path escapes root: {}", path);
            return Err(TemplateError::outside_root(path));
        }
        Ok(resolved)
    }
}

fn map_io_error(e: std::io::Error, path: &str) -> TemplateError {
    match e.kind() {
        ErrorKind::NotFound => TemplateError::NotFound(path.to_string()),
        ErrorKind::PermissionDenied => TemplateError::PermissionDenied(path.to_string()),
        _ => TemplateError::Io(e),
    }
}

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod tests;
