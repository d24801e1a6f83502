//! Integration tests for callmatch
//!
//! These drive the public core API and the CLI end to end.

use callmatch_core::*;
use std::collections::HashMap;
use std::process::Command;
use tempfile::TempDir;

fn callmatch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_callmatch"))
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = callmatch().arg("--help").output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Classify how a call site changed"));
}

#[test]
fn test_cli_compare_request() {
    let temp_dir = TempDir::new().unwrap();
    let request = temp_dir.path().join("request.json");
    std::fs::write(
        &request,
        r#"{
  "before": {"kind": "method", "method_name": "add", "expression": "items", "arguments": ["x"]},
  "after": {"kind": "method", "method_name": "add", "expression": "items", "arguments": ["x", "y"]}
}"#,
    )
    .unwrap();

    let output = callmatch().arg("compare").arg(&request).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: CallComparison = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.verdict, CallChange::OnlyArgumentsChanged);
    assert_eq!(report.argument_intersection, vec!["x"]);
}

#[test]
fn test_cli_compare_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let request = temp_dir.path().join("request.json");
    let config = temp_dir.path().join("callmatch.toml");
    std::fs::write(
        &request,
        r#"{
  "before": {"kind": "method", "method_name": "getName", "arguments": ["x"]},
  "after": {"kind": "method", "method_name": "getFullName", "arguments": ["x"]}
}"#,
    )
    .unwrap();

    let output = callmatch().arg("compare").arg(&request).output().unwrap();
    let report: CallComparison = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.verdict, CallChange::RenamedNoExpression);

    std::fs::write(&config, "name_distance_threshold = 0.1\n").unwrap();
    let output = callmatch()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg(&request)
        .output()
        .unwrap();
    let report: CallComparison = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.verdict, CallChange::Unrelated);
}

#[test]
fn test_cli_rejects_bad_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let request = temp_dir.path().join("request.json");
    let config = temp_dir.path().join("callmatch.toml");
    std::fs::write(&request, "{}").unwrap();
    std::fs::write(&config, "name_distance_threshold = 2.0\n").unwrap();

    let output = callmatch()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg(&request)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("threshold"));
}

#[test]
fn test_cli_distance() {
    let output = callmatch().args(["distance", "add", "addAll"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0.5000");
}

#[test]
fn test_constructor_arguments_replaced() {
    let before = ObjectCreation::new("HashMap", Invocation::new(None, ["capacity"]));
    let after = ObjectCreation::new("HashMap", Invocation::new(None, ["initialSize"]));
    let ctx = MatchContext::default()
        .with_replacements([Replacement::new("capacity", "initialSize", ReplacementType::VariableName)]);

    assert!(before.identical_or_replaced_arguments(&after, &ctx.replacements));
    assert!(before.all_arguments_replaced(&after, &ctx.replacements, &HashMap::new()));
    assert_eq!(classify(&before, &after, &ctx), CallChange::AllArgumentsReplaced);
}

#[test]
fn test_mixed_call_sites_in_batch() {
    let location = LocationInfo::new("src/Main.java", 12, 12);
    let before: CallSite = MethodCall::new(
        "format",
        Invocation::new(Some("String"), ["pattern", "value"])
            .with_location(location.clone())
            .with_coverage(StatementCoverage::ReturnCall),
    )
    .into();
    let after: CallSite = MethodCall::new(
        "formatted",
        Invocation::new(Some("String"), ["pattern", "value"]).with_location(location),
    )
    .into();
    let creation: CallSite = ObjectCreation::new("Point", Invocation::new(None, ["1", "2"])).into();

    let pairs = vec![(before.clone(), after), (creation.clone(), creation), (before.clone(), before)];
    let verdicts = classify_all(&pairs, &MatchContext::default());
    assert_eq!(
        verdicts,
        vec![
            CallChange::RenamedSameExpressionAndArguments,
            CallChange::Identical,
            CallChange::Identical,
        ]
    );
}
