use std::io::Cursor;

use super::repl;
use crate::EXIT_SUCCESS;
use crate::api::{
    ApiClient, DocumentHandle, HttpResponse, HttpTransport, TransportFailure,
};

struct StubTransport {
    status: u16,
    body: &'static str,
}

impl HttpTransport for StubTransport {
    fn post_check(
        &self,
        _url: &str,
        _document: &DocumentHandle,
        _rules: &[String],
    ) -> Result<HttpResponse, TransportFailure> {
        Ok(HttpResponse {
            status: self.status,
            body: self.body.to_string(),
        })
    }

    fn get(&self, _url: &str) -> Result<HttpResponse, TransportFailure> {
        Ok(HttpResponse {
            status: 200,
            body: "Service is up".to_string(),
        })
    }
}

const OK_BODY: &str = r#"{
    "fileName": "contract.pdf",
    "totalPages": 2,
    "overallStatus": "ALL_PASS",
    "processingTimeMs": 640,
    "timestamp": "2026-08-23T10:00:00",
    "results": [
        {"rule": "has a date", "status": "PASS", "evidence": "", "reasoning": "", "confidence": 88}
    ]
}"#;

fn client() -> ApiClient<StubTransport> {
    ApiClient::with_transport(
        "http://localhost:8080/api",
        StubTransport {
            status: 200,
            body: OK_BODY,
        },
    )
}

fn run_script(script: &str) -> String {
    let mut output = Vec::new();
    let code = repl(Cursor::new(script.as_bytes()), &mut output, &client()).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
    String::from_utf8(output).unwrap()
}

#[test]
fn quit_exits_cleanly() {
    let screen = run_script("quit\n");
    assert!(screen.contains("Commands:"));
    assert!(screen.contains("Document: none selected"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let screen = run_script("");
    assert!(screen.contains("Commands:"));
}

#[test]
fn add_edit_and_remove_reshape_the_rule_list() {
    let screen = run_script("add names the author\nedit 1 has a title page\nrm 2\nquit\n");
    assert!(screen.contains("4. names the author"));
    assert!(screen.contains("1. has a title page"));
    // after rm 2 the original second rule is gone
    let last = screen.rsplit("Rules:").next().unwrap();
    assert!(!last.contains("must mention at least one date"));
}

#[test]
fn add_past_the_limit_reports_the_cap() {
    let script = "add\n".repeat(8) + "quit\n";
    let screen = run_script(&script);
    assert!(screen.contains("Rule limit reached (10)"));
}

#[test]
fn edit_with_bad_index_prints_usage() {
    let screen = run_script("edit 99 whatever\nquit\n");
    assert!(screen.contains("Usage: edit <n> <text>"));
}

#[test]
fn rm_below_the_minimum_is_refused() {
    let screen = run_script("rm 1\nrm 1\nrm 1\nquit\n");
    assert!(screen.contains("Cannot remove rule 1"));
}

#[test]
fn file_selects_a_document_and_clear_drops_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let script = format!("file {}\nquit\n", path.display());
    let screen = run_script(&script);
    assert!(screen.contains("Document: contract.pdf (8 Bytes)"));

    let script = format!("file {}\nclear\nquit\n", path.display());
    let screen = run_script(&script);
    assert!(screen.ends_with("> "));
    assert!(screen.rsplit("Document:").next().unwrap().contains("none selected"));
}

#[test]
fn submit_without_a_document_renders_the_validation_error() {
    let screen = run_script("submit\nquit\n");
    assert!(screen.contains("Error: Validation failed"));
    assert!(screen.contains("  - Please select a PDF file"));
}

#[test]
fn submit_with_a_document_renders_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let script = format!("file {}\nsubmit\nquit\n", path.display());
    let screen = run_script(&script);
    assert!(screen.contains("Result: ALL PASS (2 pages, 640ms)"));
    assert!(screen.contains("[PASS] has a date (88%, High)"));
}

#[test]
fn health_prints_the_service_body() {
    let screen = run_script("health\nquit\n");
    assert!(screen.contains("Service is up"));
}

#[test]
fn reset_restores_the_seed_rules() {
    let screen = run_script("edit 1 something else\nreset\nquit\n");
    let after_reset = screen.rsplit("Rules:").next().unwrap();
    assert!(after_reset.contains("1. The document must have a purpose section"));
}

#[test]
fn unknown_command_suggests_help() {
    let screen = run_script("frobnicate\nquit\n");
    assert!(screen.contains("Unknown command: frobnicate (try 'help')"));
}
