// File: src/error.rs
// Purpose: Error types for data loading, page handlers and the shell

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the journal's JSON collections
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures raised by a page handler while building a view
#[derive(Debug, Error)]
pub enum PageError {
    #[error("missing route parameter `{0}`")]
    MissingParam(&'static str),

    #[error("page failed to render: {0}")]
    Render(String),
}

/// Failures of the shell itself
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell already started")]
    AlreadyStarted,

    #[error("invalid route pattern")]
    Route(#[from] scrapbook_router::PatternError),
}
