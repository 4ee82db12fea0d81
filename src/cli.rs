//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::runner::{Mode, RunOptions, Source};

/// Downloads and parses simplified block lists.
#[derive(Debug, Parser)]
#[command(name = "blocklist-parser", version)]
#[command(about = "Downloads and parses simplified block lists", long_about = None)]
pub struct Cli {
    /// List supported upstream blocklists.
    #[arg(short, long)]
    pub list: bool,

    /// Name of the upstream blocklist to use.
    #[arg(short, long, value_name = "NAME")]
    pub blocklist: Option<String>,

    /// URL of a blocklist to use.
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Local blocklist file to use.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// File of domains to leave out of the result, one per line.
    #[arg(short, long, value_name = "PATH")]
    pub ignore: Option<PathBuf>,

    /// File of CDN domains whose subdomains are kept intact.
    #[arg(short, long, value_name = "PATH")]
    pub cdn: Option<PathBuf>,

    /// Keep every domain as listed instead of reducing to registrable domains.
    #[arg(short, long)]
    pub keep_subdomains: bool,

    /// Write the result to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, env = "BLOCKLIST_PARSER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The selected invocation mode.
    ///
    /// Modes are checked in the order list, blocklist, url, file. Returns
    /// `None` when no mode was given.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        if self.list {
            return Some(Mode::ListNames);
        }
        let source = if let Some(name) = &self.blocklist {
            Source::Named(name.clone())
        } else if let Some(url) = &self.url {
            Source::Url(url.clone())
        } else if let Some(path) = &self.file {
            Source::File(path.clone())
        } else {
            return None;
        };
        Some(Mode::Parse(source))
    }

    /// Options for the runner, or `None` when usage help should be shown.
    #[must_use]
    pub fn run_options(&self) -> Option<RunOptions> {
        Some(RunOptions {
            mode: self.mode()?,
            ignore_file: self.ignore.clone(),
            cdn_file: self.cdn.clone(),
            reduce: !self.keep_subdomains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("blocklist-parser").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn should_verify_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_have_no_mode_without_arguments() {
        let cli = parse(&[]);
        assert!(cli.mode().is_none());
        assert!(cli.run_options().is_none());
    }

    #[test]
    fn should_prefer_list_over_everything() {
        let cli = parse(&["-l", "-b", "pro", "-u", "https://example.test/list.txt"]);
        assert_eq!(cli.mode(), Some(Mode::ListNames));
    }

    #[test]
    fn should_prefer_named_list_over_url_and_file() {
        let cli = parse(&["--blocklist", "pro", "--url", "https://x.test", "--file", "a.txt"]);
        assert_eq!(cli.mode(), Some(Mode::Parse(Source::Named("pro".into()))));
    }

    #[test]
    fn should_prefer_url_over_file() {
        let cli = parse(&["-u", "https://x.test/list.txt", "-f", "a.txt"]);
        assert_eq!(
            cli.mode(),
            Some(Mode::Parse(Source::Url("https://x.test/list.txt".into())))
        );
    }

    #[test]
    fn should_use_file_when_alone() {
        let cli = parse(&["-f", "hosts.txt"]);
        assert_eq!(
            cli.mode(),
            Some(Mode::Parse(Source::File(PathBuf::from("hosts.txt"))))
        );
    }

    #[test]
    fn should_build_run_options() {
        let cli = parse(&["-f", "hosts.txt", "-i", "ignore.txt", "-c", "cdn.txt"]);
        let options = cli.run_options().unwrap();
        assert_eq!(options.ignore_file, Some(PathBuf::from("ignore.txt")));
        assert_eq!(options.cdn_file, Some(PathBuf::from("cdn.txt")));
        assert!(options.reduce);
    }

    #[test]
    fn should_disable_reduction_with_keep_subdomains() {
        let cli = parse(&["-f", "hosts.txt", "--keep-subdomains"]);
        assert!(!cli.run_options().unwrap().reduce);
    }

    #[test]
    fn should_parse_output_and_config() {
        let cli = parse(&["-f", "a.txt", "-o", "out.txt", "--config", "cfg.toml"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }
}
