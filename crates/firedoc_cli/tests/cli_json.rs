#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use firedoc_testkit::fixture_path;
use serde_json::{Value, json};

#[test]
fn decode_json_output_strips_tags() {
	let json = run_json(&["decode", &fixture("typed_values.json"), "--json"]);

	assert_eq!(json["fields"]["count"], 42);
	assert_eq!(json["fields"]["tags"], json!(["a", 1]));
	assert_eq!(json["fields"]["place"], json!({ "latitude": 52.52, "longitude": 0 }));
	assert_eq!(json["fields"]["meta"]["inner"]["leaf"], "z");
}

#[test]
fn decode_reads_stdin() {
	let output = run_with_stdin(&["decode", "-", "--compact"], br#"{"arrayValue":{"values":[{"stringValue":"a"},{"integerValue":"1"}]}}"#);

	assert!(output.status.success(), "decode from stdin should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), r#"["a",1]"#);
}

#[test]
fn decode_of_falsy_input_is_empty_array() {
	let output = run_with_stdin(&["decode", "-", "--compact"], b"null");

	assert!(output.status.success(), "decode of null should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn decode_text_output_reports_kind() {
	let output = run(&["decode", &fixture("note_document.json")]);

	assert!(output.status.success(), "decode should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("kind: map"), "stdout: {stdout}");
	assert!(stdout.contains("title = \"Groceries\""), "stdout: {stdout}");
}

#[test]
fn document_json_output_is_plain_envelope() {
	let json = run_json(&["document", &fixture("note_document.json"), "--json"]);

	assert_eq!(json["name"], "projects/firedoc-demo/databases/(default)/documents/notes/n1");
	assert_eq!(json["fields"]["title"], "Groceries");
	assert_eq!(json["fields"]["revision"], 3);
	assert_eq!(json["createTime"], "2024-03-01T09:30:00.000000Z");
}

#[test]
fn document_not_found_fails() {
	let output = run(&["document", &fixture("not_found.json"), "--json"]);

	assert!(!output.status.success(), "not-found payload should fail");
	assert!(output.stdout.is_empty(), "nothing should be printed on stdout");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: document not found"), "stderr: {stderr}");
}

#[test]
fn document_request_failure_reports_status() {
	let output = run(&["document", &fixture("permission_denied.json")]);

	assert!(!output.status.success(), "error payload should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("status=PERMISSION_DENIED"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_is_an_io_error() {
	let output = run(&["decode", &fixture("does_not_exist.json")]);

	assert!(!output.status.success(), "missing file should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: io:"));
}

#[test]
fn notes_json_filters_by_user() {
	let json = run_json(&["notes", &fixture("notes_list.json"), "--user", "u-alice", "--json"]);

	assert_eq!(json["count"], 2);
	assert_eq!(json["next_page_token"], "page-2");
	assert_eq!(json["notes"][0]["id"], "n1");
	assert_eq!(json["notes"][1]["id"], "n3");
	assert_eq!(json["notes"][1]["userId"], "u-alice");
}

#[test]
fn notes_json_respects_limit() {
	let json = run_json(&["notes", &fixture("notes_list.json"), "--limit", "1", "--json"]);

	assert_eq!(json["count"], 1);
	assert_eq!(json["notes"][0]["title"], "Groceries");
}

#[test]
fn invalid_note_fails_without_skip_flag() {
	let output = run(&["notes", &fixture("notes_list_invalid.json"), "--json"]);

	assert!(!output.status.success(), "invalid note should fail the command");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("note broken field title"), "stderr: {stderr}");
}

#[test]
fn invalid_note_is_skipped_with_flag() {
	let json = run_json(&["notes", &fixture("notes_list_invalid.json"), "--skip-invalid", "--json"]);

	assert_eq!(json["count"], 1);
	assert_eq!(json["notes"][0]["id"], "n1");
	assert!(json["next_page_token"].is_null());
}

#[test]
fn notes_text_output_lists_rows() {
	let output = run(&["notes", &fixture("notes_list.json")]);

	assert!(output.status.success(), "notes command should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("notes: 3"), "stdout: {stdout}");
	assert!(stdout.contains("n2\tStandup\tu-bob\t"), "stdout: {stdout}");
}

#[test]
fn document_brief_truncates_long_strings() {
	let input = fixture("long_note_document.json");

	let full = run(&["document", &input]);
	assert!(full.status.success(), "document should succeed");
	let full = String::from_utf8_lossy(&full.stdout);
	assert!(!full.contains("..."), "stdout: {full}");

	let brief = run(&["document", &input, "--brief"]);
	assert!(brief.status.success(), "document --brief should succeed");
	let brief = String::from_utf8_lossy(&brief.stdout);
	let expected = format!("body = \"{}...\"", "x".repeat(60));
	assert!(brief.contains(&expected), "stdout: {brief}");
}

#[test]
fn verbose_logs_debug_events_to_stderr() {
	let quiet = run(&["document", &fixture("note_document.json"), "--json"]);
	assert!(quiet.status.success(), "document should succeed");
	assert!(!String::from_utf8_lossy(&quiet.stderr).contains("parsed document"));

	let verbose = run(&["document", &fixture("note_document.json"), "--json", "--verbose"]);
	assert!(verbose.status.success(), "document --verbose should succeed");
	let stderr = String::from_utf8_lossy(&verbose.stderr);
	assert!(stderr.contains("parsed document"), "stderr: {stderr}");
	serde_json::from_slice::<Value>(&verbose.stdout).expect("stdout stays valid json");
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_firedoc")).args(args).env_remove("RUST_LOG").output().expect("command executes")
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_firedoc"))
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child.stdin.take().expect("stdin is piped").write_all(input).expect("stdin accepts input");
	child.wait_with_output().expect("command completes")
}

fn fixture(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}
