use thiserror::Error;

/// Core error type shared across devtools crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A caller asked for something the identifier family cannot represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias for results returned by devtools crates.
pub type Result<T> = std::result::Result<T, Error>;
