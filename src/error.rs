//! Error handling for rboolean.
//!
//! One error enum covers the whole crate: taxonomy loading, configuration
//! validation, similarity dimension checks, and the I/O and serialization
//! failures of the collaborator layers. Unmatched titles are not an error;
//! they surface as `None` from the matcher.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RbError>;

/// Main error type for rboolean operations.
#[derive(Error, Debug)]
pub enum RbError {
    /// Malformed or duplicate taxonomy entries. Fatal: the taxonomy is
    /// corrupt setup, not a per-item condition.
    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    /// Invalid configuration override (non-positive K, zero match
    /// threshold, out-of-range similarity threshold).
    #[error("Config error: {0}")]
    Config(String),

    /// Similarity operation called with an invalid id list (duplicates in a
    /// matrix request, empty hybrid pool).
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Role group id rejected at the resolve boundary.
    #[error("Unknown role group: {0}")]
    UnknownRole(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RbError {
    /// True for errors that should abort a whole batch run rather than a
    /// single call.
    #[must_use]
    pub fn is_fatal_setup(&self) -> bool {
        matches!(self, Self::Taxonomy(_) | Self::Config(_))
    }
}
