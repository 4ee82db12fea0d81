//! Domain-name grammar check.
//!
//! A candidate is accepted when it is one or more dot-separated labels of
//! `[a-z0-9-]` (1-63 characters each) followed by an alphabetic top-level
//! label of 2-63 characters. Matching is case-insensitive and always anchored
//! at the start of the string. Whether the end is anchored is selected with
//! [`Anchoring`]. Either way, only the matched domain is handed on.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Grammar anchored at both ends.
static FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9-]{1,63}\.)+[a-z]{2,63}$").expect("domain grammar is a valid regex")
});

/// Grammar anchored at the start only. The top-level label must still be
/// followed by something that cannot continue a label. Group 1 is the domain.
static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((?:[a-z0-9-]{1,63}\.)+[a-z]{2,63})(?:[^a-z0-9-]|$)")
        .expect("domain grammar is a valid regex")
});

/// How much of a candidate string has to match the domain grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchoring {
    /// The whole string must be a domain name.
    #[default]
    Full,
    /// A domain-name prefix is enough and anything after it is dropped.
    ///
    /// `example.com/ads` and `example.com!!` both yield `example.com`.
    Prefix,
}

/// Classifies strings as syntactically plausible domain names.
///
/// # Example
///
/// ```
/// use blocklist_parser::blocklist::{Anchoring, DomainValidator};
///
/// let validator = DomainValidator::default();
/// assert!(validator.is_valid("ads.example.co.uk"));
/// assert!(!validator.is_valid("192.168.1.1"));
/// assert!(!validator.is_valid("example.com/ads"));
///
/// let loose = DomainValidator::new(Anchoring::Prefix);
/// assert_eq!(loose.domain("example.com/ads"), Some("example.com"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainValidator {
    anchoring: Anchoring,
}

impl DomainValidator {
    #[must_use]
    pub const fn new(anchoring: Anchoring) -> Self {
        Self { anchoring }
    }

    #[must_use]
    pub const fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// Returns `true` if `candidate` matches the domain grammar.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        match self.anchoring {
            Anchoring::Full => FULL.is_match(candidate),
            Anchoring::Prefix => PREFIX.is_match(candidate),
        }
    }

    /// The part of `candidate` that matches the domain grammar, if any.
    #[must_use]
    pub fn domain<'c>(&self, candidate: &'c str) -> Option<&'c str> {
        match self.anchoring {
            Anchoring::Full => FULL.is_match(candidate).then_some(candidate),
            Anchoring::Prefix => PREFIX
                .captures(candidate)
                .and_then(|captures| captures.get(1))
                .map(|domain| domain.as_str()),
        }
    }
}
