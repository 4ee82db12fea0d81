//! Integration tests for the blocklist parser.
//!
//! These tests run complete invocations against a mock upstream server and
//! temporary files.

use std::io::Write;
use std::path::PathBuf;

use blocklist_parser::blocklist::{CatalogError, FileLoader, RemoteLoadError, parse_list};
use blocklist_parser::cli::Cli;
use blocklist_parser::config::Config;
use blocklist_parser::runner::{Mode, Outcome, RunOptions, Runner, Source};
use clap::Parser;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRO_LIST: &str = "\
# Title: HaGeZi's Pro DNS Blocklist
# Number of entries: 6
#
ads.example.com
tracker.example.com
metrics.example.co.uk
e1234.a.akamaiedge.net
img.cdn.net
192.168.1.1
";

const HOSTS_LIST: &str = "\
# Hosts file
127.0.0.1 localhost
0.0.0.0 0.0.0.0
0.0.0.0 ads.example.com
0.0.0.0 banner.example.com
0.0.0.0 popup.example.org
";

/// Mock upstream with a catalog listing and two lists.
async fn upstream() -> MockServer {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/repos/hagezi/dns-blocklists/contents/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "pro.txt", "download_url": format!("{base}/raw/pro.txt") },
            { "name": "native.apple.txt", "download_url": format!("{base}/raw/native.apple.txt") },
            { "name": "light.txt", "download_url": format!("{base}/raw/light.txt") },
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/raw/pro.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRO_LIST))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/raw/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOSTS_LIST))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/raw/light.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn runner_for(server: &MockServer) -> Runner {
    let mut config = Config::default();
    config.upstream.listing_url = format!(
        "{}/repos/hagezi/dns-blocklists/contents/domains",
        server.uri()
    );
    Runner::new(config).unwrap()
}

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn domains(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Domains(domains) => domains.into_vec(),
        Outcome::Names(names) => panic!("expected domains, got names {names:?}"),
    }
}

#[tokio::test]
async fn should_list_upstream_names() {
    let server = upstream().await;
    let runner = runner_for(&server);

    let options = Cli::parse_from(["blocklist-parser", "--list"])
        .run_options()
        .unwrap();
    let outcome = runner.run(&options).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Names(vec!["pro".into(), "apple".into(), "light".into()])
    );
    assert_eq!(outcome.render().as_deref(), Some("pro\napple\nlight"));
}

#[tokio::test]
async fn should_parse_named_upstream_list() {
    let server = upstream().await;
    let runner = runner_for(&server);

    let outcome = runner
        .run(&RunOptions::parse(Source::Named("pro".into())))
        .await
        .unwrap();

    assert_eq!(
        domains(outcome),
        vec!["example.com", "example.co.uk", "e1234.a.akamaiedge.net", "cdn.net"]
    );
}

#[tokio::test]
async fn should_parse_named_list_with_ignore_and_cdn_files() {
    let server = upstream().await;
    let runner = runner_for(&server);
    let ignore = file_with("# never block\n  example.co.uk  \n");
    let cdn = file_with("cdn.net\n");

    let options = Cli::parse_from([
        "blocklist-parser",
        "-b",
        "pro",
        "-i",
        ignore.path().to_str().unwrap(),
        "-c",
        cdn.path().to_str().unwrap(),
    ])
    .run_options()
    .unwrap();
    let outcome = runner.run(&options).await.unwrap();

    // The CDN file replaces the bundled list, so akamaiedge.net is reduced.
    assert_eq!(
        domains(outcome),
        vec!["example.com", "akamaiedge.net", "img.cdn.net"]
    );
}

#[tokio::test]
async fn should_parse_hosts_file_from_url() {
    let server = upstream().await;
    let runner = runner_for(&server);

    let options = RunOptions {
        reduce: false,
        ..RunOptions::parse(Source::Url(format!("{}/raw/hosts", server.uri())))
    };
    let outcome = runner.run(&options).await.unwrap();

    assert_eq!(
        domains(outcome),
        vec!["ads.example.com", "banner.example.com", "popup.example.org"]
    );
}

#[tokio::test]
async fn should_fail_for_unknown_named_list() {
    let server = upstream().await;
    let runner = runner_for(&server);

    let result = runner
        .run(&RunOptions::parse(Source::Named("ultimate".into())))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        blocklist_parser::Error::Catalog(CatalogError::UnknownList(ref name)) if name == "ultimate"
    ));
    assert!(err.to_string().contains("ultimate"));
}

#[tokio::test]
async fn should_fail_when_named_list_download_fails() {
    let server = upstream().await;
    let runner = runner_for(&server);

    let result = runner
        .run(&RunOptions::parse(Source::Named("light".into())))
        .await;

    assert!(matches!(
        result,
        Err(blocklist_parser::Error::Remote(RemoteLoadError::HttpStatus {
            status: 404,
            ..
        }))
    ));
}

#[tokio::test]
async fn should_fail_when_catalog_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let runner = runner_for(&server);

    let result = runner.run(&RunOptions::parse(Source::Named("pro".into()))).await;

    assert!(matches!(
        result,
        Err(blocklist_parser::Error::Catalog(CatalogError::Remote(
            RemoteLoadError::HttpStatus { status: 503, .. }
        )))
    ));
}

#[tokio::test]
async fn should_produce_no_output_when_everything_is_ignored() {
    let source = file_with("0.0.0.0 ads.example.com\nexample.com\n");
    let ignore = file_with("example.com\n");
    let runner = Runner::new(Config::default()).unwrap();

    let options = RunOptions {
        ignore_file: Some(ignore.path().to_path_buf()),
        ..RunOptions::parse(Source::File(source.path().to_path_buf()))
    };
    let outcome = runner.run(&options).await.unwrap();

    assert_eq!(outcome.render(), None);
}

#[tokio::test]
async fn should_respect_prefix_anchoring_from_config() {
    let source = file_with("example.com/ads\nexample.org\n");
    let config = Config::parse("[validator]\nanchoring = \"prefix\"").unwrap();
    let runner = Runner::new(config).unwrap();

    let options = RunOptions {
        reduce: false,
        ..RunOptions::parse(Source::File(source.path().to_path_buf()))
    };
    let outcome = runner.run(&options).await.unwrap();

    assert_eq!(domains(outcome), vec!["example.com", "example.org"]);
}

#[tokio::test]
async fn should_be_idempotent_on_own_output() {
    let source = file_with(PRO_LIST);
    let runner = Runner::new(Config::default()).unwrap();

    let first = runner
        .run(&RunOptions::parse(Source::File(source.path().to_path_buf())))
        .await
        .unwrap()
        .render()
        .unwrap();

    let output = file_with(&first);
    let lines = FileLoader::load(output.path()).await.unwrap();
    let second = parse_list(&lines, None, None, false);

    assert_eq!(second.as_slice().join("\n"), first);
}

#[test]
fn should_select_file_mode_from_cli() {
    let cli = Cli::parse_from(["blocklist-parser", "--file", "hosts.txt"]);
    assert_eq!(
        cli.mode(),
        Some(Mode::Parse(Source::File(PathBuf::from("hosts.txt"))))
    );
}
