//! Upstream blocklist discovery.
//!
//! Named blocklists are discovered from a repository directory listing in the
//! GitHub contents API shape: a JSON array of entries carrying at least a
//! `name` and a `download_url`.

use serde::Deserialize;

use super::remote::{RemoteLoadError, RemoteLoader};

/// Error type for upstream catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The directory listing could not be fetched.
    #[error("failed to fetch blocklist catalog: {0}")]
    Remote(#[from] RemoteLoadError),

    /// The directory listing is not a JSON array of entries.
    #[error("invalid blocklist catalog from {url}: {source}")]
    Decode {
        /// URL of the listing.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// No blocklist with this name exists upstream.
    #[error("unknown blocklist: {0:?}")]
    UnknownList(String),
}

/// One entry of the upstream directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    /// Raw file name, e.g. `native.apple.txt`.
    pub name: String,
    /// Direct download URL. `null` for sub-directories.
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Ordered mapping from friendly blocklist name to download URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, String)>,
}

impl Catalog {
    /// Fetch and decode the directory listing at `listing_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] if the listing cannot be fetched and
    /// [`CatalogError::Decode`] if it is not a JSON array of entries.
    pub async fn fetch(loader: &RemoteLoader, listing_url: &str) -> Result<Self, CatalogError> {
        let body = loader.fetch(listing_url).await?;
        let entries: Vec<ListingEntry> =
            serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
                url: listing_url.to_string(),
                source,
            })?;

        let catalog = Self::from_entries(entries);
        tracing::info!(url = %listing_url, count = catalog.len(), "loaded blocklist catalog");
        Ok(catalog)
    }

    /// Build a catalog from listing entries.
    ///
    /// Entries without a download URL are skipped. When two entries share a
    /// friendly name the later URL wins and the first position is kept.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ListingEntry>,
    {
        let mut catalog = Self::default();
        for entry in entries {
            let Some(url) = entry.download_url else {
                tracing::debug!(name = %entry.name, "skipping catalog entry without download URL");
                continue;
            };
            catalog.insert(friendly_name(&entry.name), url);
        }
        catalog
    }

    fn insert(&mut self, name: &str, url: String) {
        match self.entries.iter_mut().find(|(existing, _)| existing.as_str() == name) {
            Some(entry) => entry.1 = url,
            None => self.entries.push((name.to_string(), url)),
        }
    }

    /// Download URL of the list called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, url)| url.as_str())
    }

    /// Download URL of the list called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownList`] if there is no such list.
    pub fn url_for(&self, name: &str) -> Result<&str, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownList(name.to_string()))
    }

    /// Friendly names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Friendly list name: the raw file name without `.txt` and `native.`.
///
/// ```
/// use blocklist_parser::blocklist::catalog::friendly_name;
///
/// assert_eq!(friendly_name("native.apple.txt"), "apple");
/// assert_eq!(friendly_name("pro.plus.txt"), "pro.plus");
/// ```
#[must_use]
pub fn friendly_name(raw: &str) -> &str {
    let name = raw.strip_suffix(".txt").unwrap_or(raw);
    name.strip_prefix("native.").unwrap_or(name)
}
