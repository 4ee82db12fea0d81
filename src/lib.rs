//! Blocklist parser - DNS blocklists reduced to registrable domains.
//!
//! Fetches DNS blocklists from a URL, a local file or a named upstream list,
//! and turns them into a deduplicated list of registrable domains. Domains
//! served from shared CDN infrastructure are kept intact, and an optional
//! ignore list removes entries from the result.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`blocklist`]: Domain validation, line normalization, list building and
//!   the file, URL and upstream catalog loaders
//! - [`config`]: Configuration loading and validation
//! - [`runner`]: Run orchestration
//! - [`cli`]: Command-line interface
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```rust
//! use blocklist_parser::blocklist::{DomainSet, ListBuilder};
//!
//! let cdn: DomainSet = ["cdn.net"].into_iter().collect();
//! let domains = ListBuilder::new()
//!     .intact(Some(&cdn))
//!     .build(["0.0.0.0 ads.example.co.uk", "# comment", "img.cdn.net"]);
//! assert_eq!(domains.into_vec(), vec!["example.co.uk", "img.cdn.net"]);
//! ```

pub mod blocklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use config::Config;
pub use error::{Error, Result};
