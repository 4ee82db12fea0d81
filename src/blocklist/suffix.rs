//! Registrable-domain reduction backed by the Public Suffix List.
//!
//! Only the ICANN section of the list counts. Private entries registered by
//! hosting vendors (`akamaiedge.net`, `cloudfront.net`, ...) are treated as
//! ordinary registrable domains.

use std::borrow::Cow;

use psl::Type;

/// Returns the registrable domain of `domain`: its public suffix plus one label.
///
/// The suffix lookup ignores ASCII case, and the returned slice keeps the
/// casing of the input. Returns `None` when `domain` is itself a public
/// suffix (`co.uk`) or cannot be reduced.
///
/// ```
/// use blocklist_parser::blocklist::registrable_domain;
///
/// assert_eq!(registrable_domain("sub.example.co.uk"), Some("example.co.uk"));
/// assert_eq!(registrable_domain("Ads.Example.COM"), Some("Example.COM"));
/// assert_eq!(registrable_domain("co.uk"), None);
/// ```
#[must_use]
pub fn registrable_domain(domain: &str) -> Option<&str> {
    let lookup = if domain.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(domain.to_ascii_lowercase())
    } else {
        Cow::Borrowed(domain)
    };

    let suffix_len = icann_suffix_len(&lookup)?;
    // The suffix needs a label and a dot in front of it.
    let prefix = lookup.len().checked_sub(suffix_len + 1).filter(|len| *len > 0)?;
    let start = lookup[..prefix].rfind('.').map_or(0, |dot| dot + 1);
    domain.get(start..)
}

/// Length of the longest ICANN suffix of `name`.
///
/// A private match is retried without its leftmost label until the lookup
/// lands on an ICANN or unlisted suffix.
fn icann_suffix_len(name: &str) -> Option<usize> {
    let mut scope = name;
    loop {
        let suffix = psl::suffix(scope.as_bytes())?;
        let len = suffix.as_bytes().len();
        if suffix.typ() != Some(Type::Private) {
            return Some(len);
        }
        let (_, parent) = scope[scope.len() - len..].split_once('.')?;
        scope = parent;
    }
}
