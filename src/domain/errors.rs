//! Domain error types
//!
//! This module defines the error hierarchy for the harvester. Fetch failures and
//! per-record mapping failures are kept apart so that callers can decide how to
//! react to each. None of these types expose third-party error types.

use thiserror::Error;

/// Main harvester error type
///
/// This is the primary error type used throughout the application.
/// It wraps the specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Listing endpoint errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Record mapping errors
    #[error("Data mapping error: {0}")]
    DataMapping(#[from] DataMappingError),

    /// Publication errors reported by a publisher
    #[error("Publish error: {0}")]
    Publish(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while retrieving the layer listing
///
/// Errors that occur when talking to the GeoNode listing endpoint.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the connection dropped
    #[error("Failed to connect to {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body is not JSON or does not have the listing shape
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors raised while mapping one layer record
///
/// Raised per record; the caller decides whether to skip the record or
/// abort the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataMappingError {
    /// The listing element is not an object of layer fields
    #[error("Malformed layer record: {message}")]
    MalformedRecord { message: String },

    /// A contractually required field is absent or empty
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    /// The `date` field is not an ISO 8601 date or date-time
    #[error("Invalid date '{value}': expected ISO 8601 date or date-time")]
    InvalidDate { value: String },

    /// The `distribution_url` field does not carry a layer type-name
    #[error("Invalid distribution URL '{value}': {reason}")]
    InvalidDistributionUrl { value: String, reason: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for HarvestError {
    fn from(err: std::io::Error) -> Self {
        HarvestError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HarvestError {
    fn from(err: serde_json::Error) -> Self {
        HarvestError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HarvestError {
    fn from(err: toml::de::Error) -> Self {
        HarvestError::Configuration(format!("TOML parse error: {err}"))
    }
}
