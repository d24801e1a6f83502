//! CLI command implementations

use anyhow::Context;
use callmatch_core::{CallSite, MatchConfig, MatchContext, compare as compare_calls, normalized_distance};
use serde::Deserialize;
use std::path::Path;

/// A comparison request: the two call sites plus what the diff pipeline
/// already knows about the change.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub before: CallSite,
    pub after: CallSite,
    #[serde(flatten)]
    pub context: MatchContext,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<MatchConfig> {
    let Some(path) = path else {
        return Ok(MatchConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = MatchConfig::from_toml_str(&source)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_request(source: &str, config: MatchConfig) -> callmatch_core::Result<CompareRequest> {
    let mut request: CompareRequest = serde_json::from_str(source)?;
    request.context.config = config;
    Ok(request)
}

pub fn compare(path: &Path, config: MatchConfig) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    let request = parse_request(&source, config)
        .with_context(|| format!("Failed to parse request {}", path.display()))?;

    tracing::debug!(
        "Comparing {} -> {} (threshold {})",
        request.before.name(),
        request.after.name(),
        request.context.threshold()
    );
    let report = compare_calls(&request.before, &request.after, &request.context);
    tracing::info!("Verdict: {:?}", report.verdict);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn distance(first: &str, second: &str) {
    println!("{:.4}", normalized_distance(first, second));
}

#[cfg(test)]
mod tests {
    use super::*;
    use callmatch_core::CallChange;

    #[test]
    fn test_parse_request_applies_config() {
        let source = r#"{
            "before": {"kind": "method", "method_name": "getName", "arguments": ["x"]},
            "after": {"kind": "method", "method_name": "getFullName", "arguments": ["x"]}
        }"#;
        let strict = MatchConfig::new(0.1).unwrap();
        let request = parse_request(source, strict).unwrap();
        assert_eq!(request.context.threshold(), 0.1);
        let report = compare_calls(&request.before, &request.after, &request.context);
        assert_eq!(report.verdict, CallChange::Unrelated);
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_parse_request_rejects_unknown_kind() {
        let source = r#"{"before": {"kind": "lambda"}, "after": {"kind": "lambda"}}"#;
        assert!(parse_request(source, MatchConfig::default()).is_err());
    }
}
