//! Builds the ordered, deduplicated and filtered domain list.

use super::normalizer::Normalizer;
use super::set::DomainSet;
use super::validator::DomainValidator;

/// Counters collected while building a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Raw lines read from the source.
    pub lines: usize,
    /// Lines that were comments, blank or not a domain.
    pub discarded: usize,
    /// Normalized entries already seen earlier in the source.
    pub duplicates: usize,
    /// Entries removed by the ignore set.
    pub ignored: usize,
}

/// Turns raw blocklist lines into a [`DomainSet`].
///
/// Every line goes through a [`Normalizer`]; results are kept in first-seen
/// order without duplicates, and any entry present in the ignore set is
/// dropped afterwards. The ignore set is compared against the normalized
/// form, so `0.0.0.0 ads.example.com` is removed by an ignore entry of
/// `example.com` when reducing.
///
/// # Example
///
/// ```
/// use blocklist_parser::blocklist::{DomainSet, ListBuilder};
///
/// let ignore: DomainSet = ["example.org"].into_iter().collect();
/// let domains = ListBuilder::new()
///     .ignore(Some(&ignore))
///     .build(["0.0.0.0 ads.example.com", "# comment", "tracker.example.org", "example.com"]);
/// assert_eq!(domains.into_vec(), vec!["example.com"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBuilder<'a> {
    normalizer: Normalizer<'a>,
    ignore: Option<&'a DomainSet>,
}

impl<'a> ListBuilder<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            ignore: None,
        }
    }

    #[must_use]
    pub const fn validator(mut self, validator: DomainValidator) -> Self {
        self.normalizer = self.normalizer.validator(validator);
        self
    }

    #[must_use]
    pub const fn reduce(mut self, reduce: bool) -> Self {
        self.normalizer = self.normalizer.reduce(reduce);
        self
    }

    #[must_use]
    pub const fn intact(mut self, intact: Option<&'a DomainSet>) -> Self {
        self.normalizer = self.normalizer.intact(intact);
        self
    }

    #[must_use]
    pub const fn ignore(mut self, ignore: Option<&'a DomainSet>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Build the domain list from raw lines.
    pub fn build<I, S>(&self, lines: I) -> DomainSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_with_stats(lines).0
    }

    /// Build the domain list and report what happened to the input.
    pub fn build_with_stats<I, S>(&self, lines: I) -> (DomainSet, ParseStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ParseStats::default();
        let mut domains = DomainSet::new();

        for line in lines {
            stats.lines += 1;
            let Some(domain) = self.normalizer.normalize(line.as_ref()) else {
                stats.discarded += 1;
                continue;
            };
            if domains.contains(domain) {
                stats.duplicates += 1;
            } else {
                domains.insert(domain);
            }
        }

        if let Some(ignore) = self.ignore {
            let before = domains.len();
            domains.retain(|domain| !ignore.contains(domain));
            stats.ignored = before - domains.len();
        }

        tracing::debug!(
            lines = stats.lines,
            kept = domains.len(),
            discarded = stats.discarded,
            duplicates = stats.duplicates,
            ignored = stats.ignored,
            reduce = self.normalizer.is_reducing(),
            "parsed blocklist"
        );

        (domains, stats)
    }
}

/// Build a domain list with the default validator.
///
/// Shorthand for configuring a [`ListBuilder`] with the given ignore set,
/// intact set and reduction flag.
pub fn parse_list<I, S>(
    lines: I,
    ignore: Option<&DomainSet>,
    intact: Option<&DomainSet>,
    reduce: bool,
) -> DomainSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ListBuilder::new()
        .ignore(ignore)
        .intact(intact)
        .reduce(reduce)
        .build(lines)
}
