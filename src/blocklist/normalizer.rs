//! Line normalization.
//!
//! Turns one raw blocklist line into at most one domain: list-format noise is
//! stripped, the candidate is checked against the domain grammar, and it is
//! reduced to its registrable domain unless that domain is in the intact set.

use super::set::DomainSet;
use super::suffix::registrable_domain;
use super::validator::DomainValidator;

/// Prefix of a null-routed entry in hosts-file formatted lists.
pub const HOSTS_PREFIX: &str = "0.0.0.0 ";

/// Normalizes raw blocklist lines.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is removed.
/// 2. A single leading [`HOSTS_PREFIX`] is removed.
/// 3. Comments (`#`), blank lines and strings failing the
///    [`DomainValidator`] yield nothing. Otherwise the candidate is the domain
///    the validator matched, without any trailing text.
/// 4. With reduction enabled (the default), the candidate becomes its
///    registrable domain. Candidates that are bare public suffixes yield
///    nothing.
/// 5. If the registrable domain is in the intact set, the candidate is kept
///    as written instead.
///
/// # Example
///
/// ```
/// use blocklist_parser::blocklist::{DomainSet, Normalizer};
///
/// let cdn: DomainSet = ["cdn.net"].into_iter().collect();
/// let normalizer = Normalizer::new().intact(Some(&cdn));
///
/// assert_eq!(normalizer.normalize("0.0.0.0 ads.example.com"), Some("example.com"));
/// assert_eq!(normalizer.normalize("img.cdn.net"), Some("img.cdn.net"));
/// assert_eq!(normalizer.normalize("# comment"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    validator: DomainValidator,
    intact: Option<&'a DomainSet>,
    reduce: bool,
}

impl Default for Normalizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Normalizer<'a> {
    /// A normalizer that reduces to registrable domains, with a fully
    /// anchored validator and no intact set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: DomainValidator::new(super::Anchoring::Full),
            intact: None,
            reduce: true,
        }
    }

    #[must_use]
    pub const fn validator(mut self, validator: DomainValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Enable or disable reduction to the registrable domain.
    ///
    /// Without reduction the intact set has no effect.
    #[must_use]
    pub const fn reduce(mut self, reduce: bool) -> Self {
        self.reduce = reduce;
        self
    }

    /// Registrable domains whose subdomains are kept as written.
    #[must_use]
    pub const fn intact(mut self, intact: Option<&'a DomainSet>) -> Self {
        self.intact = intact;
        self
    }

    #[must_use]
    pub const fn is_reducing(&self) -> bool {
        self.reduce
    }

    /// Normalize one raw line. Returns `None` if the line contributes nothing.
    #[must_use]
    pub fn normalize<'l>(&self, line: &'l str) -> Option<&'l str> {
        let candidate = self.validator.domain(strip_noise(line)?)?;

        if !self.reduce {
            return Some(candidate);
        }

        let registrable = registrable_domain(candidate)?;
        match self.intact {
            Some(intact) if intact.contains(registrable) => Some(candidate),
            _ => Some(registrable),
        }
    }
}

/// Strip whitespace and the hosts prefix, dropping comments and blank lines.
fn strip_noise(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let candidate = trimmed
        .strip_prefix(HOSTS_PREFIX)
        .map_or(trimmed, str::trim_start);

    if candidate.is_empty() || candidate.starts_with('#') {
        return None;
    }
    Some(candidate)
}
