use thiserror::Error;

/// Errors returned while loading points or configuring a clustering run.
#[derive(Debug, Error)]
pub enum Error {
    /// The point source could not be opened or read.
    #[error("unreadable point source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No point survived parsing.
    #[error("empty point set")]
    EmptyInput,

    /// Requested cluster count cannot be satisfied by the point set.
    #[error("invalid cluster count: requested {requested}, but only {distinct} distinct locations")]
    InvalidClusterCount { requested: usize, distinct: usize },

    /// Invalid configuration value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
