//! Error types for Rollcall

use thiserror::Error;

/// Main error type for Rollcall operations
///
/// Card data errors are defects in the markup that produced the page. They
/// are surfaced instead of being treated as a non-match.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A card is missing one of the data attributes the matcher reads
    #[error("Card {card} is missing data attribute '{attribute}'")]
    MissingAttribute { card: usize, attribute: String },

    /// A card's legal name is not a JSON object with `first` and `last`
    #[error("Card {card} has a malformed legal name: {source}")]
    MalformedLegalName {
        card: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Attach configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using FilterError
pub type FilterResult<T> = Result<T, FilterError>;
