//! Error types for locus operations.

use thiserror::Error;

/// Errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum LocusError {
    /// The geocoding provider failed to produce coordinates.
    #[error("geocoding failed: {0}")]
    Geocoding(#[from] GeocodingError),

    /// An operation that needs coordinates was invoked on an unset location.
    #[error("location has no coordinates set")]
    UnsetLocation,

    /// Caller-supplied input was rejected before any work was done.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failure modes of a geocoding provider.
///
/// Each variant maps one documented failure mode of the provider; the
/// underlying cause is preserved where one exists.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Network or HTTP transport failure.
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("geocoding provider returned status {0}")]
    Status(String),

    /// The provider found no match for the query.
    #[error("no geocoding match for query")]
    NoMatch,

    /// The provider response could not be decoded.
    #[error("malformed geocoding response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, LocusError>;
