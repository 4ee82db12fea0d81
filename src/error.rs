//! Error types for the blocklist parser.

use std::io;

use thiserror::Error;

use crate::blocklist::{CatalogError, LoadError, RemoteLoadError};

/// Main error type for blocklist parser operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read blocklist file: {0}")]
    Load(#[from] LoadError),

    #[error("failed to fetch blocklist: {0}")]
    Remote(#[from] RemoteLoadError),

    #[error("blocklist catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("http.timeout_secs must be greater than 0")]
    ZeroHttpTimeout,

    #[error("http.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("upstream.listing_url cannot be empty")]
    EmptyListingUrl,

    #[error("upstream.listing_url must start with http:// or https://: {url:?}")]
    InvalidListingUrl { url: String },

    #[error("cdn_file cannot be an empty path")]
    EmptyCdnFile,
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
