//! Blocklist parsing and loading.
//!
//! This module turns blocklist sources into ordered lists of domains:
//!
//! - [`DomainValidator`] checks candidates against the domain grammar
//! - [`Normalizer`] strips list noise and reduces a line to its registrable domain
//! - [`ListBuilder`] deduplicates in first-seen order and applies the ignore set
//! - [`FileLoader`], [`RemoteLoader`] and [`Catalog`] produce raw lines from
//!   local files, URLs and named upstream lists
//!
//! # Supported line formats
//!
//! - Plain domain lists, one domain per line
//! - Hosts files using the `0.0.0.0` null route
//! - Comments starting with `#` and blank lines, which are skipped
//!
//! # Example
//!
//! ```
//! use blocklist_parser::blocklist::{DomainSet, parse_list};
//!
//! let content = "# Comment\n0.0.0.0 ads.example.com\nimg.cdn.net\nads.example.com";
//! let cdn: DomainSet = ["cdn.net"].into_iter().collect();
//! let domains = parse_list(content.lines(), None, Some(&cdn), true);
//! assert_eq!(domains.into_vec(), vec!["example.com", "img.cdn.net"]);
//! ```

mod builder;
pub mod catalog;
pub mod loader;
mod normalizer;
pub mod remote;
mod set;
mod suffix;
mod validator;

pub use builder::{ListBuilder, ParseStats, parse_list};
pub use catalog::{Catalog, CatalogError};
pub use loader::{FileLoader, LoadError};
pub use normalizer::{HOSTS_PREFIX, Normalizer};
pub use remote::{RemoteLoadError, RemoteLoader};
pub use set::DomainSet;
pub use suffix::registrable_domain;
pub use validator::{Anchoring, DomainValidator};
