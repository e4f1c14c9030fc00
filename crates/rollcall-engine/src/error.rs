use std::fmt;

/// Result type for rollcall-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Locale identifier could not be parsed
    InvalidLocale(String),

    /// No collation data is available for the locale
    Collator(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            Error::Collator(msg) => write!(f, "Collator error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
