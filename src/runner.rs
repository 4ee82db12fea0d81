//! Run orchestration.
//!
//! Wires the source adapters to the [`ListBuilder`]: resolves the source to
//! raw lines, loads the ignore and intact sets, and builds the final list.
//! Every step runs to completion before the next one starts.

use std::path::{Path, PathBuf};

use crate::blocklist::{Catalog, DomainSet, FileLoader, ListBuilder, RemoteLoader};
use crate::config::Config;
use crate::error::Result;

/// CDN list bundled into the binary, used when no CDN file is configured.
pub const BUNDLED_CDN_LIST: &str = include_str!("../data/cdn.txt");

/// Where the blocklist comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A list from the upstream catalog, by friendly name.
    Named(String),
    /// Any HTTP(S) resource returning line-oriented text.
    Url(String),
    /// A local file.
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "upstream list {name:?}"),
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What a run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the names of the upstream blocklists.
    ListNames,
    /// Parse a blocklist into domains.
    Parse(Source),
}

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: Mode,
    /// Domains to leave out, loaded without reduction.
    pub ignore_file: Option<PathBuf>,
    /// Overrides the configured or bundled CDN list.
    pub cdn_file: Option<PathBuf>,
    /// Reduce domains to their registrable domain.
    pub reduce: bool,
}

impl RunOptions {
    /// Options parsing `source` with reduction and no ignore or CDN override.
    #[must_use]
    pub const fn parse(source: Source) -> Self {
        Self {
            mode: Mode::Parse(source),
            ignore_file: None,
            cdn_file: None,
            reduce: true,
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Upstream blocklist names in listing order.
    Names(Vec<String>),
    /// Parsed domains in first-seen order.
    Domains(DomainSet),
}

impl Outcome {
    /// Newline-joined output, or `None` when there is nothing to print.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        let text = match self {
            Self::Names(names) => names.join("\n"),
            Self::Domains(domains) => domains.as_slice().join("\n"),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Executes runs against a fixed configuration.
pub struct Runner {
    config: Config,
    remote: RemoteLoader,
}

impl Runner {
    /// Create a runner, building the HTTP client from `config.http`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let remote = RemoteLoader::new(&config.http)?;
        Ok(Self { config, remote })
    }

    /// Execute one run.
    ///
    /// # Errors
    ///
    /// Fails if the source, the ignore file or the CDN file cannot be read,
    /// if a fetch returns a non-success status, or if a named list is not in
    /// the upstream catalog.
    pub async fn run(&self, options: &RunOptions) -> Result<Outcome> {
        match &options.mode {
            Mode::ListNames => {
                let catalog = self.catalog().await?;
                Ok(Outcome::Names(catalog.names().map(str::to_owned).collect()))
            }
            Mode::Parse(source) => self.parse(source, options).await.map(Outcome::Domains),
        }
    }

    async fn parse(&self, source: &Source, options: &RunOptions) -> Result<DomainSet> {
        let lines = self.source_lines(source).await?;

        let ignore = match &options.ignore_file {
            Some(path) => Some(self.load_ignore(path).await?),
            None => None,
        };

        // Without reduction the intact set would be a no-op.
        let intact = if options.reduce {
            let cdn_file = options.cdn_file.as_deref().or(self.config.cdn_file.as_deref());
            Some(self.load_intact(cdn_file).await?)
        } else {
            None
        };

        let (domains, stats) = ListBuilder::new()
            .validator(self.config.domain_validator())
            .reduce(options.reduce)
            .intact(intact.as_ref())
            .ignore(ignore.as_ref())
            .build_with_stats(&lines);

        tracing::info!(
            source = %source,
            lines = stats.lines,
            domains = domains.len(),
            ignored = stats.ignored,
            "parsed blocklist"
        );
        Ok(domains)
    }

    async fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::fetch(&self.remote, &self.config.upstream.listing_url).await?)
    }

    async fn source_lines(&self, source: &Source) -> Result<Vec<String>> {
        tracing::info!(source = %source, "loading blocklist");
        match source {
            Source::Named(name) => {
                let catalog = self.catalog().await?;
                let url = catalog.url_for(name)?;
                Ok(self.remote.load(url).await?)
            }
            Source::Url(url) => Ok(self.remote.load(url).await?),
            Source::File(path) => Ok(FileLoader::load(path).await?),
        }
    }

    async fn load_ignore(&self, path: &Path) -> Result<DomainSet> {
        let lines = FileLoader::load(path).await?;
        let ignore = ListBuilder::new()
            .validator(self.config.domain_validator())
            .reduce(false)
            .build(&lines);
        tracing::debug!(path = ?path, count = ignore.len(), "loaded ignore list");
        Ok(ignore)
    }

    async fn load_intact(&self, path: Option<&Path>) -> Result<DomainSet> {
        let builder = ListBuilder::new().validator(self.config.domain_validator());
        let intact = match path {
            Some(path) => builder.build(&FileLoader::load(path).await?),
            None => builder.build(BUNDLED_CDN_LIST.lines()),
        };
        tracing::debug!(path = ?path, count = intact.len(), "loaded CDN list");
        Ok(intact)
    }
}
