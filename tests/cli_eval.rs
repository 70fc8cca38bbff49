//! CLI Eval Tests
//!
//! Tests for `xjoin eval` over JSON input files.

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;
use xjoin::cli::{eval, EvalArgs};
use xjoin::executor::SortDirection;

// =============================================================================
// Helper Functions
// =============================================================================

fn write(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn args(dir: &TempDir, results: Value, docs: Value) -> EvalArgs {
    EvalArgs {
        results: write(dir, "results.json", &results),
        docs: write(dir, "docs.json", &docs),
        field: "id".to_string(),
        component: "xjoin".to_string(),
        attribute: Some("score".to_string()),
        call: None,
        default_value: 0.0,
        sort: None,
    }
}

fn sample(dir: &TempDir) -> EvalArgs {
    args(
        dir,
        json!({"42": {"score": 7.5}, "7": {"score": 9.0}}),
        json!([{"id": "42"}, {"id": "99"}, {"title": "no id"}, {"id": 7}]),
    )
}

// =============================================================================
// Eval Tests
// =============================================================================

/// One row per document, in document order.
#[test]
fn test_eval_rows() {
    let dir = TempDir::new().unwrap();
    let rows = eval(&sample(&dir)).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], json!({"doc": 0, "key": "42", "exists": true, "value": 7.5}));
    assert_eq!(rows[1]["value"], json!(0.0));
    assert_eq!(rows[2], json!({"doc": 2, "key": null, "exists": false, "value": null}));
    assert_eq!(rows[3]["value"], json!(9.0));
}

/// Sorted output puts documents without a value last.
#[test]
fn test_eval_sorted() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.sort = Some(SortDirection::Desc);

    let rows = eval(&eval_args).unwrap();
    let order: Vec<u64> = rows.iter().map(|r| r["doc"].as_u64().unwrap()).collect();
    assert_eq!(order, vec![3, 0, 1, 2]);
}

/// The attribute can come from the function call.
#[test]
fn test_eval_attribute_from_call() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.attribute = None;
    eval_args.call = Some("xjoin(score)".to_string());

    let rows = eval(&eval_args).unwrap();
    assert_eq!(rows[0]["value"], json!(7.5));
}

/// The call is validated the same way as library calls.
#[test]
fn test_eval_rejects_other_function() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.attribute = None;
    eval_args.call = Some("other(score)".to_string());

    let err = eval(&eval_args).unwrap_err();
    assert_eq!(err.code_str(), "XJOIN_SYNTAX");
}

/// Call arguments beyond the ones needed are rejected.
#[test]
fn test_eval_rejects_unused_call_argument() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.call = Some("xjoin(rank)".to_string());

    let err = eval(&eval_args).unwrap_err();
    assert_eq!(err.code_str(), "XJOIN_SYNTAX");
    assert!(err.message().contains("rank"));
}

/// A configured default is applied to unmatched keys.
#[test]
fn test_eval_default() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.default_value = -3.0;

    let rows = eval(&eval_args).unwrap();
    assert_eq!(rows[1]["value"], json!(-3.0));
}

/// Unknown attributes fail with the xjoin error code.
#[test]
fn test_eval_unknown_attribute() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.attribute = Some("unknownAttr".to_string());

    let err = eval(&eval_args).unwrap_err();
    assert_eq!(err.code_str(), "XJOIN_ATTRIBUTE_RESOLUTION");
}

/// Results must be a JSON object.
#[test]
fn test_eval_bad_results_shape() {
    let dir = TempDir::new().unwrap();
    let eval_args = args(&dir, json!([1, 2]), json!([]));

    let err = eval(&eval_args).unwrap_err();
    assert_eq!(err.code_str(), "XJOIN_CLI_INPUT_ERROR");
}

/// Missing input files are I/O errors.
#[test]
fn test_eval_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut eval_args = sample(&dir);
    eval_args.docs = dir.path().join("absent.json");

    let err = eval(&eval_args).unwrap_err();
    assert_eq!(err.code_str(), "XJOIN_CLI_IO_ERROR");
}
