use fallbacks_catalog::CatalogError;
use fallbacks_lib::{QueryError, TemplateError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog failed to load or validate
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Template(#[from] TemplateError),

    /// Share link could not be parsed or encoded
    #[error("{0}")]
    Query(#[from] QueryError),

    /// No catalog entry has this id
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate(id.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
