//! JSON and Markdown renderings of validator snapshots.
//!
//! Rendering happens in memory; where the output goes is up to the caller.

use crate::domain::{OmegaError, Result};
use crate::validator::{SystemHealth, ValidationSummary};

/// Render a summary as pretty JSON.
pub fn render_summary_json(summary: &ValidationSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Parse a summary rendered by [`render_summary_json`], checking that every
/// value is in `[0, 1]` and that `latest` matches the last history entry.
pub fn parse_summary_json(json: &str) -> Result<ValidationSummary> {
    let summary: ValidationSummary = serde_json::from_str(json)?;

    for (field, value) in [
        ("qcvar", summary.qcvar),
        ("omega_threshold", summary.omega_threshold),
        ("qcvar_limit", summary.qcvar_limit),
    ] {
        check_unit(field, value)?;
    }
    for (idx, record) in summary.history.iter().enumerate() {
        for (field, value) in record.values() {
            check_unit(&format!("history[{}].{}", idx, field), value)?;
        }
    }
    if summary.latest != summary.history.last().copied() {
        return Err(OmegaError::InvalidSnapshot(
            "latest does not match the last history entry".to_string(),
        ));
    }

    Ok(summary)
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OmegaError::InvalidSnapshot(format!(
            "{} = {} is outside [0, 1]",
            field, value
        )))
    }
}

/// Render a Markdown health report for dashboards or PR comments.
pub fn render_health_md(health: &SystemHealth, summary: &ValidationSummary) -> String {
    let verdict = if health.production_ready {
        "READY"
    } else {
        "NOT READY"
    };

    let mut out = String::new();
    out.push_str("# Omega Health\n\n");
    out.push_str(&format!("**Verdict:** {}\n\n", verdict));
    out.push_str("## Readiness\n");
    out.push_str(&format!(
        "- latest omega: {:.4} (threshold {:.4})\n- qcvar: {:.4} (limit {:.4})\n- samples: {}\n\n",
        health.latest_omega,
        summary.omega_threshold,
        health.qcvar,
        summary.qcvar_limit,
        health.sample_count
    ));

    if !summary.history.is_empty() {
        out.push_str("## History\n");
        out.push_str("| # | psi | theta | cvar | omega |\n");
        out.push_str("|---|-----|-------|------|-------|\n");
        for (idx, r) in summary.history.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {:.4} | {:.4} | {:.4} | {:.4} |\n",
                idx + 1,
                r.psi,
                r.theta,
                r.cvar,
                r.omega
            ));
        }
    }
    out
}
