use thiserror::Error;

/// Core error type shared across Velodata crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A field value does not parse as part of a rental record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Convenience alias for results returned by Velodata crates.
pub type Result<T> = std::result::Result<T, Error>;
