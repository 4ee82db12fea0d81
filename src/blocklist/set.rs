//! Insertion-ordered set of domain strings.

use std::collections::HashSet;

/// An ordered collection of unique domains.
///
/// Iteration yields domains in the order they were first inserted. Inserting
/// a domain that is already present leaves both its position and the set
/// unchanged, so building from a source keeps first-seen order.
///
/// ```
/// use blocklist_parser::blocklist::DomainSet;
///
/// let mut set = DomainSet::new();
/// assert!(set.insert("b.com"));
/// assert!(set.insert("a.com"));
/// assert!(!set.insert("b.com"));
/// assert_eq!(set.into_vec(), vec!["b.com", "a.com"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl DomainSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a domain, returning `false` if it was already present.
    pub fn insert(&mut self, domain: impl Into<String>) -> bool {
        let domain = domain.into();
        if self.members.contains(&domain) {
            return false;
        }
        self.members.insert(domain.clone());
        self.order.push(domain);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.members.contains(domain)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Domains in first-seen order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.order.iter()
    }

    /// Keep only the domains for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        let members = &mut self.members;
        self.order.retain(|domain| {
            let kept = keep(domain.as_str());
            if !kept {
                members.remove(domain);
            }
            kept
        });
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for DomainSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for DomainSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for domain in iter {
            self.insert(domain);
        }
    }
}

impl IntoIterator for DomainSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a DomainSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
