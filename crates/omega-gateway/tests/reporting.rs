use omega_gateway::{
    parse_summary_json, render_health_md, render_summary_json, OmegaError, OmegaValidator,
    ValidatorConfig,
};

fn populated() -> OmegaValidator {
    let mut validator = OmegaValidator::new(ValidatorConfig::default().with_min_samples(2));
    validator.validate_system(0.9, 0.9, 0.05, None);
    validator.validate_system(0.95, 0.92, 0.04, None);
    validator
}

#[test]
fn summary_json_survives_parse() {
    let summary = populated().get_validation_summary();
    let json = render_summary_json(&summary).expect("render");
    let parsed = parse_summary_json(&json).expect("parse");

    assert_eq!(parsed.history.len(), summary.history.len());
    for (got, want) in parsed.history.iter().zip(&summary.history) {
        assert!((got.omega - want.omega).abs() < 1e-12);
        assert!((got.cvar - want.cvar).abs() < 1e-12);
    }
    assert!((parsed.qcvar - summary.qcvar).abs() < 1e-12);
    assert!(parsed.latest.is_some());
}

#[test]
fn empty_summary_renders_latest_as_empty_mapping() {
    let summary = OmegaValidator::default().get_validation_summary();
    let json = render_summary_json(&summary).expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["latest"], serde_json::json!({}));
    assert_eq!(value["history"], serde_json::json!([]));

    let parsed = parse_summary_json(&json).expect("parse");
    assert!(parsed.latest.is_none());
}

#[test]
fn mismatched_latest_is_rejected() {
    let mut summary = populated().get_validation_summary();
    summary.latest = summary.history.first().copied();
    let json = render_summary_json(&summary).expect("render");

    let err = parse_summary_json(&json).expect_err("latest must match history tail");
    assert!(matches!(err, OmegaError::InvalidSnapshot(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = parse_summary_json("{\"history\": 3}").expect_err("bad shape");
    assert!(matches!(err, OmegaError::Serialization(_)));
}

#[test]
fn health_markdown_lists_verdict_and_history() {
    let validator = populated();
    let md = render_health_md(
        &validator.get_system_health(),
        &validator.get_validation_summary(),
    );

    assert!(md.starts_with("# Omega Health"));
    assert!(md.contains("**Verdict:** READY"));
    assert!(md.contains("- samples: 2"));
    assert!(md.contains("| 2 | 0.9500 | 0.9200 | 0.0400 |"));
}

#[test]
fn health_markdown_for_empty_validator_is_not_ready() {
    let validator = OmegaValidator::default();
    let md = render_health_md(
        &validator.get_system_health(),
        &validator.get_validation_summary(),
    );
    assert!(md.contains("**Verdict:** NOT READY"));
    assert!(!md.contains("## History"));
}

#[test]
fn malformed_latest_is_not_read_as_empty() {
    let raw = serde_json::json!({
        "latest": {"psi": 0.5, "bogus": 1},
        "history": [],
        "qcvar": 0.0,
        "omega_threshold": 0.9,
        "qcvar_limit": 0.1
    });
    let err = parse_summary_json(&raw.to_string()).expect_err("truncated latest must fail");
    assert!(matches!(err, OmegaError::Serialization(_)));
}

#[test]
fn literal_empty_latest_still_parses() {
    let raw = serde_json::json!({
        "latest": {},
        "history": [],
        "qcvar": 0.0,
        "omega_threshold": 0.9,
        "qcvar_limit": 0.1
    });
    let parsed = parse_summary_json(&raw.to_string()).expect("empty latest");
    assert!(parsed.latest.is_none());
}
