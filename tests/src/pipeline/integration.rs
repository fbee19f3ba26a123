#![cfg(test)]
use massres_common::config::{Config, InputSource};
use massres_common::resolution::ResolveError;
use massres_core::input::InputError;
use massres_core::pipeline::{self, PipelineError, RunSummary};

use crate::support::{ScriptedResolver, input_file};

async fn run_to_string(cfg: &Config, resolver: &ScriptedResolver) -> (String, RunSummary) {
    let mut out: Vec<u8> = Vec::new();
    let summary = pipeline::run(cfg, resolver, &mut out)
        .await
        .expect("pipeline failed");
    (String::from_utf8(out).unwrap(), summary)
}

/// Duplicates are resolved twice and invalid lines never reach DNS.
#[tokio::test]
async fn file_with_duplicates_and_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(
        &dir,
        "hosts.txt",
        &["good.example.com\n", "bad_host!!\n", "good.example.com\n"],
    );
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: None,
    };
    let resolver = ScriptedResolver::default().resolves("good.example.com", &[[1, 2, 3, 4]]);

    let (stdout, summary) = run_to_string(&cfg, &resolver).await;

    assert_eq!(stdout, "good.example.com 1.2.3.4\ngood.example.com 1.2.3.4\n");
    assert_eq!(resolver.queries(), vec!["good.example.com", "good.example.com"]);
    assert_eq!(summary.lines, 3);
    assert_eq!(summary.resolved, 2);
}

#[tokio::test]
async fn dns_failures_are_silent() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(
        &dir,
        "hosts.txt",
        &[
            "nx.example.com\n",
            "slow.example.com\n",
            "norecords.example.com\n",
            "example.com\n",
        ],
    );
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: None,
    };
    let resolver = ScriptedResolver::default()
        .fails("slow.example.com", ResolveError::Timeout)
        .fails("norecords.example.com", ResolveError::NoRecords)
        .resolves("example.com", &[[93, 184, 216, 34]]);

    let (stdout, summary) = run_to_string(&cfg, &resolver).await;

    assert_eq!(stdout, "example.com 93.184.216.34\n");
    assert_eq!(resolver.queries().len(), 4);
    assert_eq!(summary.resolved, 1);
}

#[tokio::test]
async fn coloured_tool_output_is_cleaned() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(
        &dir,
        "sublist3r.txt",
        &["\x1b[92mwww.example.com\x1b[0m\r\n", "   \n", "\x1b[92mapi.example.com\x1b[0m"],
    );
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: None,
    };
    let resolver = ScriptedResolver::default()
        .resolves("www.example.com", &[[10, 0, 0, 1]])
        .resolves("api.example.com", &[[10, 0, 0, 2], [10, 0, 0, 3]]);

    let (stdout, _) = run_to_string(&cfg, &resolver).await;

    assert_eq!(
        stdout,
        "www.example.com 10.0.0.1\napi.example.com 10.0.0.2 10.0.0.3\n"
    );
}

#[tokio::test]
async fn sources_run_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = input_file(&dir, "first.txt", &["b.example.com\n"]);
    let second = input_file(&dir, "second.txt", &["a.example.com\n"]);
    let cfg = Config {
        sources: vec![InputSource::File(first), InputSource::File(second)],
        save_path: None,
    };
    let resolver = ScriptedResolver::default()
        .resolves("a.example.com", &[[1, 1, 1, 1]])
        .resolves("b.example.com", &[[2, 2, 2, 2]]);

    let (stdout, _) = run_to_string(&cfg, &resolver).await;

    assert_eq!(stdout, "b.example.com 2.2.2.2\na.example.com 1.1.1.1\n");
}

#[tokio::test]
async fn report_has_one_row_per_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(
        &dir,
        "hosts.txt",
        &["one.example.com\n", "missing.example.com\n", "two.example.com\n"],
    );
    let report = dir.path().join("report.md");
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: Some(report.clone()),
    };
    let resolver = ScriptedResolver::default()
        .resolves("one.example.com", &[[1, 1, 1, 1]])
        .resolves("two.example.com", &[[2, 2, 2, 2], [3, 3, 3, 3]]);

    let (_, summary) = run_to_string(&cfg, &resolver).await;
    assert_eq!(summary.saved.as_deref(), Some(report.as_path()));

    let text = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "# Mass Resolve Report");
    assert_eq!(
        &lines[2..],
        &[
            "| Hostname | IP |",
            "| --- | --- |",
            "| one.example.com | 1.1.1.1 |",
            "| two.example.com | 2.2.2.2 3.3.3.3 |",
        ]
    );
}

#[tokio::test]
async fn no_report_when_nothing_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(&dir, "hosts.txt", &["missing.example.com\n", "nope\n"]);
    let report = dir.path().join("report.md");
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: Some(report.clone()),
    };
    let resolver = ScriptedResolver::default();

    let (stdout, summary) = run_to_string(&cfg, &resolver).await;

    assert!(stdout.is_empty());
    assert_eq!(summary.saved, None);
    assert!(!report.exists());
}

#[tokio::test]
async fn unwritable_report_is_fatal_after_output() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = input_file(&dir, "hosts.txt", &["example.com\n"]);
    let cfg = Config {
        sources: vec![InputSource::File(hosts)],
        save_path: Some(dir.path().join("no-such-dir").join("report.md")),
    };
    let resolver = ScriptedResolver::default().resolves("example.com", &[[93, 184, 216, 34]]);
    let mut out: Vec<u8> = Vec::new();

    let res = pipeline::run(&cfg, &resolver, &mut out).await;

    assert!(matches!(res, Err(PipelineError::Report(_))));
    assert_eq!(String::from_utf8(out).unwrap(), "example.com 93.184.216.34\n");
}

#[tokio::test]
async fn missing_input_file_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = input_file(&dir, "good.txt", &["example.com\n"]);
    let report = dir.path().join("report.md");
    let cfg = Config {
        sources: vec![
            InputSource::File(good),
            InputSource::File(dir.path().join("missing.txt")),
        ],
        save_path: Some(report.clone()),
    };
    let resolver = ScriptedResolver::default().resolves("example.com", &[[93, 184, 216, 34]]);
    let mut out: Vec<u8> = Vec::new();

    let res = pipeline::run(&cfg, &resolver, &mut out).await;

    assert!(matches!(res, Err(PipelineError::Input(InputError::Open { .. }))));
    assert_eq!(String::from_utf8(out).unwrap(), "example.com 93.184.216.34\n");
    assert!(!report.exists());
}
