use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading a schema or writing generated CSV.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("schema file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("schema file must contain at least 2 lines (headers and types), found {lines}")]
    SchemaTooShort { lines: usize },
    #[error(
        "headers and types must have the same number of columns ({headers} headers, {types} types)"
    )]
    HeaderTypeMismatch { headers: usize, types: usize },
    /// `column` is 1-based, matching what a user sees in an editor.
    #[error("unknown value type '{tag}' in column {column}")]
    UnknownValueType { column: usize, tag: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<devtools_core::Error> for GenerationError {
    fn from(err: devtools_core::Error) -> Self {
        match err {
            devtools_core::Error::InvalidArgument(message) => Self::InvalidArgument(message),
        }
    }
}
