// Error types module

use thiserror::Error;

/// Centralized error type for the client
///
/// Categorizes errors into configuration errors (raised at construction or
/// call time), validation errors (raised before any URL is built), and
/// purge transport errors. Encoding edge cases are never errors.
#[derive(Error, Debug)]
pub enum Error {
    /// No host was configured
    #[error("At least one host must be configured")]
    MissingHost,

    /// Host failed fully-qualified-domain-name validation
    #[error(
        "Invalid host '{host}': hosts must be passed in as fully-qualified \
         domain names and should not include a protocol or any path element, \
         i.e. \"assets.pixlane.net\""
    )]
    InvalidHost { host: String },

    /// Purge was attempted without an API key
    #[error("A valid API key is required to send purge requests")]
    MissingApiKey,

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// `width_tolerance` must be a positive number
    #[error("`width_tolerance` must be a positive number, got {value}")]
    InvalidWidthTolerance { value: f64 },

    /// `widths` must be a non-empty list of positive integers
    #[error("`widths` must be a non-empty list of positive integers")]
    InvalidWidths,

    /// `min_width` and `max_width` must be positive
    #[error("`min_width` and `max_width` must be positive, got {min} and {max}")]
    InvalidWidthRange { min: u32, max: u32 },

    /// Purge request failed in transit
    #[error("Purge request failed: {0}")]
    Purge(#[from] reqwest::Error),
}

impl Error {
    /// Helper constructor for host validation failures
    pub fn invalid_host(host: impl Into<String>) -> Self {
        Error::InvalidHost { host: host.into() }
    }
}
