use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bibleref-check"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("binary runs")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

const MIXED: &str = r#"[
    {"id":"1","biblicalReference":"Genesis 1:1"},
    {"id":"2","biblicalReference":"Ezechiël 37"},
    {"id":"3","biblicalReference":"Atlantis 3"},
    {"id":"4","biblicalReference":null}
]"#;

#[test]
fn counters_and_failure_exit_for_invalid_reference() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), MIXED).unwrap();
    let out = run(td.path(), &["q.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Invalid references: 1\nValid references: 2\nQuestions without references: 1\n");
}

#[test]
fn filters_print_ids_only() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), MIXED).unwrap();
    let out = run(td.path(), &["--no-reference", "q.json", "--valid"]);
    assert_eq!(stdout(&out), "1\n2\n4\n");
    let out = run(td.path(), &["q.json", "--invalid"]);
    assert_eq!(stdout(&out), "3\n");
}

#[test]
fn clean_dataset_exits_zero() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), r#"[{"id":"1","biblicalReference":"Ruth 1"},{"id":"2"}]"#).unwrap();
    let out = run(td.path(), &["q.json", "--details"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("BIBLICAL REFERENCES VALIDATION REPORT"));
    assert!(text.contains("Success rate: 100.0% (1/1 references)"));
}

#[test]
fn json_output_carries_counts_and_books() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), MIXED).unwrap();
    let out = run(td.path(), &["q.json", "--json"]);
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(v["total"], 4);
    assert_eq!(v["invalid_count"], 1);
    assert_eq!(v["valid"][1]["books"][0]["display_name"], "Ezechiël");
}

#[test]
fn missing_or_malformed_input_is_fatal() {
    let td = tempfile::tempdir().unwrap();
    let out = run(td.path(), &["absent.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("InputNotFound"));

    fs::write(td.path().join("bad.json"), "{ not json").unwrap();
    let out = run(td.path(), &["bad.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("MalformedInput"));
}

#[test]
fn config_file_supplies_dataset_and_mapper() {
    let td = tempfile::tempdir().unwrap();
    fs::create_dir_all(td.path().join("data")).unwrap();
    fs::write(td.path().join("data/q.json"), r#"[{"id":"1","biblicalReference":"Job 1"}]"#).unwrap();
    fs::write(td.path().join("bibleref.yaml"), "questions: data/q.json\nmapper: mapper.dart\n").unwrap();

    // mapper missing
    let out = run(td.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("check_mapper"));

    fs::write(td.path().join("mapper.dart"), "").unwrap();
    let out = run(td.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "Invalid references: 0\nValid references: 1\nQuestions without references: 0\n");
}

#[test]
fn missing_ids_are_reported_as_unknown_with_warning() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), r#"[{"biblicalReference":"Atlantis 1"}]"#).unwrap();
    let out = run(td.path(), &["q.json", "--invalid"]);
    assert_eq!(stdout(&out), "unknown\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("warning"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let td = tempfile::tempdir().unwrap();
    let out = run(td.path(), &["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn broken_config_is_fatal_with_status_one() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("q.json"), r#"[{"id":"1","biblicalReference":"Job 1"}]"#).unwrap();
    fs::write(td.path().join("bibleref.yaml"), "questions: [unclosed").unwrap();
    let out = run(td.path(), &["q.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("load_config"));
}
