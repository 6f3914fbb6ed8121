//! Unified error types for the crate.

use std::path::PathBuf;

use openai_service::OpenAiError;
use thiserror::Error;

/// Top-level error for ticket-store operations.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Required environment variable is missing or empty.
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Input JSONL file does not exist.
    #[error("Input file {} not found", .0.display())]
    InputNotFound(PathBuf),

    /// I/O or filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSONL line could not be parsed into a record.
    #[error("line {line} parse error: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record's metadata could not be rendered into a document.
    #[error("cannot render {field}: {reason}")]
    Render { field: &'static str, reason: String },

    /// Vector store client errors (wrapped).
    #[error(transparent)]
    Client(#[from] OpenAiError),
}
