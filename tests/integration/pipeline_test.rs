//! Library-level tests for the full pipeline.

use std::fs;

use flowdedup::{parse_line, run_with, Config, DedupError, FlowKey};

use super::helpers::{log_dir, output_lines, HTTPS_FLOW, HTTP_FLOW, HTTP_FLOW_DUP};

#[test]
fn equal_triples_give_equal_keys() {
    assert_eq!(parse_line(HTTP_FLOW), parse_line(HTTP_FLOW_DUP));
    assert_ne!(parse_line(HTTP_FLOW), parse_line(HTTPS_FLOW));
    assert_eq!(parse_line(HTTPS_FLOW), Ok(FlowKey::new(3, 4, 443)));
}

#[test]
fn example_scenario_keeps_first_lines_verbatim() {
    let dir = log_dir(&[
        ("a.log", &[HTTP_FLOW, HTTP_FLOW_DUP]),
        ("b.log", &[HTTPS_FLOW]),
    ]);
    let mut diag = Vec::new();

    let summary = run_with(&Config::in_dir(dir.path()), &mut diag).unwrap();

    assert_eq!(summary.unique_flows, 2);
    assert_eq!(summary.stats.files_processed, 2);
    assert_eq!(summary.stats.duplicate_lines, 1);
    assert_eq!(output_lines(dir.path()), vec![HTTP_FLOW, HTTPS_FLOW]);

    let diag = String::from_utf8(diag).unwrap();
    assert_eq!(
        diag,
        format!(
            "Processing file: a.log\nProcessing file: b.log\nTotal unique flows: 2\nUnique flows written to: {}\n",
            summary.output.filename
        )
    );
}

#[test]
fn lines_are_written_unmodified() {
    // Whitespace and key order survive because the raw line is stored
    let spaced = r#"{ "extra": [1, 2],  "flow" : {"l4":{"TCP":{"destination_port":22}},"destination":{"identity":8},"source":{"identity":7}} }"#;
    let marked = r#"{"flow":{"l4":{"TCP":{"destination_port":22}},"destination":{"identity":8},"source":{"identity":7}},"note":"café"}"#;
    let dir = log_dir(&[("a.log", &[spaced, marked])]);

    run_with(&Config::in_dir(dir.path()), &mut Vec::new()).unwrap();

    // `spaced` lacks the exact `"flow":` marker, so only `marked` is kept
    assert_eq!(output_lines(dir.path()), vec![marked]);
}

#[test]
fn crlf_input_is_written_without_carriage_returns() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("win.log"),
        format!("{}\r\n{}\r\n", HTTP_FLOW, HTTPS_FLOW),
    )
    .unwrap();

    let summary = run_with(&Config::in_dir(dir.path()), &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&summary.output.path).unwrap();
    assert_eq!(written, format!("{}\n{}\n", HTTP_FLOW, HTTPS_FLOW));
}

#[test]
fn empty_logs_still_produce_an_empty_output() {
    let dir = log_dir(&[("empty.log", &[])]);
    let mut diag = Vec::new();

    let summary = run_with(&Config::in_dir(dir.path()), &mut diag).unwrap();

    assert_eq!(summary.unique_flows, 0);
    assert!(output_lines(dir.path()).is_empty());
    assert!(String::from_utf8(diag)
        .unwrap()
        .contains("Total unique flows: 0"));
}

#[test]
fn custom_pattern_selects_other_files() {
    let dir = log_dir(&[("a.log", &[HTTP_FLOW]), ("b.jsonl", &[HTTPS_FLOW])]);
    let config = Config {
        pattern: "*.jsonl".to_string(),
        ..Config::in_dir(dir.path())
    };

    let summary = run_with(&config, &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&summary.output.path).unwrap();
    assert_eq!(written, format!("{}\n", HTTPS_FLOW));
}

#[test]
fn missing_directory_reports_no_inputs() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::in_dir(dir.path().join("missing"));

    let err = run_with(&config, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, DedupError::NoInputFiles));
}

#[test]
fn non_utf8_bytes_in_values_are_written_byte_for_byte() {
    let dir = tempfile::TempDir::new().unwrap();
    let latin1 = b"{\"flow\":{\"source\":{\"identity\":1,\"pod_name\":\"caf\xe9\"},\"destination\":{\"identity\":2},\"l4\":{\"TCP\":{\"destination_port\":80}}}}";
    let mut content = latin1.to_vec();
    content.push(b'\n');
    content.extend_from_slice(HTTP_FLOW.as_bytes());
    content.push(b'\n');
    fs::write(dir.path().join("a.log"), content).unwrap();

    let summary = run_with(&Config::in_dir(dir.path()), &mut Vec::new()).unwrap();

    assert_eq!(summary.unique_flows, 1);
    let mut expected = latin1.to_vec();
    expected.push(b'\n');
    assert_eq!(fs::read(&summary.output.path).unwrap(), expected);
}

#[test]
fn member_case_does_not_split_or_merge_flows() {
    let shouting = r#"{"flow":{"Source":{"Identity":1},"DESTINATION":{"identity":2},"l4":{"Tcp":{"destination_port":80}}},"extra":"caps"}"#;
    let other_port = r#"{"flow":{"Source":{"Identity":1},"destination":{"identity":2},"l4":{"Tcp":{"destination_port":81}}}}"#;
    let dir = log_dir(&[("a.log", &[HTTP_FLOW, shouting, other_port])]);

    let summary = run_with(&Config::in_dir(dir.path()), &mut Vec::new()).unwrap();

    assert_eq!(summary.unique_flows, 2);
    assert_eq!(output_lines(dir.path()), vec![HTTP_FLOW, other_port]);
}
