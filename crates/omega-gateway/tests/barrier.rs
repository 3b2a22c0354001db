use omega_gateway::{validate_governance_barrier, GovernanceThresholds};

#[test]
fn barrier_passes_when_both_checks_pass() {
    let res = validate_governance_barrier(0.95, 0.05, &GovernanceThresholds::new(0.9, 0.1));
    assert!(res.omega_ok);
    assert!(res.qcvar_ok);
    assert!(res.production_ready);
}

#[test]
fn barrier_fails_when_both_checks_fail() {
    let res = validate_governance_barrier(0.8, 0.15, &GovernanceThresholds::new(0.9, 0.1));
    assert!(!res.omega_ok);
    assert!(!res.qcvar_ok);
    assert!(!res.production_ready);
}

#[test]
fn barrier_requires_both_checks() {
    let t = GovernanceThresholds::default();
    assert!(!validate_governance_barrier(0.95, 0.5, &t).production_ready);
    assert!(!validate_governance_barrier(0.5, 0.05, &t).production_ready);
}

#[test]
fn barrier_reports_clamped_thresholds() {
    let res = validate_governance_barrier(0.5, 0.5, &GovernanceThresholds::new(1.5, -1.0));
    assert_eq!(res.omega_threshold, 1.0);
    assert_eq!(res.qcvar_limit, 0.0);
    assert!(!res.production_ready);
}

#[test]
fn barrier_clamps_scores_before_comparison() {
    // 1.7 clamps to 1.0 and -3.0 clamps to 0.0
    let res = validate_governance_barrier(1.7, -3.0, &GovernanceThresholds::new(1.0, 0.0));
    assert!(res.production_ready);
}

#[test]
fn default_thresholds_match_documented_values() {
    let t = GovernanceThresholds::default();
    assert_eq!(t.omega_threshold, 0.9);
    assert_eq!(t.qcvar_limit, 0.1);
}
