use thiserror::Error;

/// Errors that can occur while loading a template's source file.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No path was supplied
    #[error("Template path is required")]
    MissingPath,

    /// The path failed sanitization or is not an allowed template location
    #[error("Invalid template path: {0}")]
    InvalidPath(String),

    /// The resolved path lies outside the template root
    #[error("Access denied: {0}")]
    OutsideRoot(String),

    /// The file exists but cannot be read by this process
    #[error("Access denied: {0}")]
    PermissionDenied(String),

    #[error("Template file not found: {0}")]
    NotFound(String),

    #[error("Template file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("Template file is empty")]
    Empty,

    /// The content does not look like JavaScript/TypeScript source
    #[error("Invalid template content: not a JavaScript/TypeScript file")]
    NotSource,

    /// Any other I/O failure
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn outside_root(msg: impl Into<String>) -> Self {
        Self::OutsideRoot(msg.into())
    }
}
