//! Configuration loading and validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::blocklist::{Anchoring, DomainValidator};
use crate::error::{ConfigError, Result, ValidationError};

/// Directory listing of the hagezi DNS blocklists in domains format.
pub const DEFAULT_LISTING_URL: &str =
    "https://api.github.com/repos/hagezi/dns-blocklists/contents/domains";

/// Main configuration for the blocklist parser.
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where named blocklists are discovered.
    #[serde(default)]
    pub upstream: UpstreamSettings,

    /// HTTP client settings shared by every remote request.
    #[serde(default)]
    pub http: HttpSettings,

    /// Domain grammar settings.
    #[serde(default)]
    pub validator: ValidatorSettings,

    /// CDN list used as the intact set. If None, the bundled list is used.
    pub cdn_file: Option<PathBuf>,
}

/// Upstream blocklist discovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSettings {
    /// Directory listing in the GitHub contents API format.
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSettings {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request. The GitHub API rejects
    /// requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Domain grammar settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorSettings {
    /// `"full"` requires the whole line to be a domain, `"prefix"` accepts
    /// trailing characters after a valid domain.
    #[serde(default)]
    pub anchoring: Anchoring,
}

fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("blocklist-parser/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Validator built from the `[validator]` section.
    #[must_use]
    pub const fn domain_validator(&self) -> DomainValidator {
        DomainValidator::new(self.validator.anchoring)
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.http.timeout_secs == 0 {
            return Err(ValidationError::ZeroHttpTimeout);
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(ValidationError::EmptyUserAgent);
        }

        let url = &self.upstream.listing_url;
        if url.is_empty() {
            return Err(ValidationError::EmptyListingUrl);
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidListingUrl { url: url.clone() });
        }

        if let Some(path) = &self.cdn_file
            && path.as_os_str().is_empty()
        {
            return Err(ValidationError::EmptyCdnFile);
        }

        Ok(())
    }
}
