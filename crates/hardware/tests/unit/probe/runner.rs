//! Whole-run orchestration over configs, suites and vector files.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use xprobe_core::config::Config;
use xprobe_core::probe::runner::plan;
use xprobe_core::probe::{ProbeError, Verdict, run};

use crate::common::harness::output;

fn vectors_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn config_with_vectors(suites: &str, file: &NamedTempFile) -> Config {
    let path = serde_json::to_string(&file.path()).unwrap();
    Config::from_json(&format!(
        r#"{{ "harness": {{ "suites": {suites}, "vectors": {path} }} }}"#
    ))
    .unwrap()
}

#[test]
fn default_config_runs_every_suite() {
    let mut out = Vec::<u8>::new();
    let verdict = run(&Config::default(), &mut out).unwrap();
    assert_eq!(verdict, Verdict::Passed { cases: 12 });

    let text = output(out);
    assert_eq!(text.matches("[[PASSED]]").count(), 1);
    assert!(text.ends_with("[[ninst-single PASSED]]\n\n[[PASSED]]\n"));
    assert!(text.contains("\n[[mod PASSED]]\n== ninst ==\n"));
    assert!(!text.contains("[[FAILED]]"));
    let headers: Vec<_> = text.lines().filter(|l| l.starts_with("== ")).collect();
    assert_eq!(
        headers,
        ["== mod ==", "== ninst ==", "== fdist ==", "== ninst-single =="]
    );
}

#[test]
fn single_suite_output() {
    let config = Config::from_json(r#"{ "harness": { "suites": ["ninst-single"] } }"#).unwrap();
    let mut out = Vec::<u8>::new();
    assert_eq!(run(&config, &mut out).unwrap(), Verdict::Passed { cases: 1 });
    assert_eq!(
        output(out),
        "== ninst-single ==\ni=0, c[i]=3\n\n[[ninst-single PASSED]]\n\n[[PASSED]]\n"
    );
}

#[test]
fn no_suites_and_no_vectors_pass_vacuously() {
    let config = Config::from_json(r#"{ "harness": { "suites": [] } }"#).unwrap();
    let mut out = Vec::<u8>::new();
    assert_eq!(run(&config, &mut out).unwrap(), Verdict::Passed { cases: 0 });
    assert_eq!(output(out), "\n[[PASSED]]\n");
}

#[test]
fn vectors_run_after_suites() {
    let file = vectors_file(r#"[{ "op": "ninst", "a": 0, "b": -2147483648 }]"#);
    let config = config_with_vectors(r#"["mod"]"#, &file);

    let plans = plan(&config).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "mod");
    assert_eq!(plans[1].cases.len(), 1);

    let mut out = Vec::<u8>::new();
    assert_eq!(run(&config, &mut out).unwrap(), Verdict::Passed { cases: 6 });
    assert!(output(out).contains("i=0, c[i]=-2147483648\n"));
}

#[test]
fn wrong_literal_in_vectors_fails_the_run() {
    let file = vectors_file(
        r#"[
            { "op": "mod", "a": 10, "b": 3, "expected": 1 },
            { "op": "mod", "a": 10, "b": 3, "expected": 2, "label": "wrong" },
            { "op": "mod", "a": 10, "b": 0 }
        ]"#,
    );
    let config = config_with_vectors("[]", &file);
    let mut out = Vec::<u8>::new();
    let Verdict::Failed(mismatch) = run(&config, &mut out).unwrap() else {
        panic!("expected a failure");
    };
    assert_eq!(mismatch.index, 1);
    assert_eq!(mismatch.label, "wrong");
    assert!(output(out).ends_with("\n[[FAILED]]: i=1, c[i]=1, expected=2\n"));
}

#[test]
fn later_failure_never_reports_success() {
    let file = vectors_file(r#"[{ "op": "mod", "a": 10, "b": 3, "expected": 2 }]"#);
    let config = config_with_vectors(r#"["mod"]"#, &file);
    let mut out = Vec::<u8>::new();
    assert!(!run(&config, &mut out).unwrap().passed());

    let text = output(out);
    assert!(!text.contains("[[PASSED]]"), "{text}");
    assert!(text.contains("[[mod PASSED]]"));
    assert!(text.ends_with("\n[[FAILED]]: i=0, c[i]=1, expected=2\n"));
}

#[test]
fn zero_divisor_vector_agrees_on_trap() {
    let file = vectors_file(r#"[{ "op": "mod", "a": 10, "b": 0 }]"#);
    let config = config_with_vectors("[]", &file);
    let mut out = Vec::<u8>::new();
    assert!(run(&config, &mut out).unwrap().passed());
    assert!(output(out).contains("c[i]=trap:DivisionByZero"));
}

#[test]
fn unreadable_vectors_abort_before_any_output() {
    let file = NamedTempFile::new().unwrap();
    let config = config_with_vectors("[]", &file);
    drop(file);

    let mut out = Vec::<u8>::new();
    assert!(matches!(run(&config, &mut out), Err(ProbeError::Vectors(_))));
    assert!(out.is_empty());
}
