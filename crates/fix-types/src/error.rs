//! Error types for fill extraction

use thiserror::Error;

use crate::tag::Tag;

/// Main error type for fill extraction
///
/// Every variant aborts the run. Conditions the engine tolerates (lines
/// without a body, malformed fields, execution reports for unknown orders)
/// are reported as outcomes, not errors.
#[derive(Error, Debug)]
pub enum FixError {
    // === Correlation Errors ===
    /// A message matched a correlation branch but lacks a required tag
    #[error("Missing expected FIX tag: {tag}")]
    MissingField { tag: Tag },

    // === Boundary Errors ===
    /// Input could not be read
    #[error("Input unavailable: {source}")]
    InputUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// Output sink rejected a record
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // === Setup Errors ===
    /// Rejected configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl FixError {
    /// Create a missing field error
    pub fn missing(tag: Tag) -> Self {
        Self::MissingField { tag }
    }

    /// Wrap a sink failure
    pub fn output(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Output {
            source: source.into(),
        }
    }

    /// The absent tag, if this is a missing field error
    pub fn missing_tag(&self) -> Option<Tag> {
        match self {
            Self::MissingField { tag } => Some(*tag),
            _ => None,
        }
    }

    /// Returns true if the error was caused by the input data rather than I/O
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Returns true if the error happened at the input or output boundary
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::InputUnavailable { .. } | Self::Output { .. })
    }
}

impl From<std::io::Error> for FixError {
    fn from(source: std::io::Error) -> Self {
        Self::InputUnavailable { source }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Body separator collides with the field syntax
    #[error("invalid body separator {separator:?}: it is part of the FIX field syntax")]
    InvalidBodySeparator { separator: char },

    /// Output delimiter cannot be used in a CSV stream
    #[error("invalid output delimiter {delimiter:?}: quotes and line breaks are reserved")]
    InvalidDelimiter { delimiter: char },
}

/// Result type alias for fill extraction
pub type FixResult<T> = Result<T, FixError>;
