//! Human-readable run output

use colored::Colorize;
use sitedock_cloud::{RunSummary, SiteSpec, StepOutcome};
use std::fmt::Write;

/// Printed in place of the site URL when the final domain lookup failed
pub const DOMAIN_UNAVAILABLE: &str = "could not retrieve domain name";

/// Render one status line per step plus the final summary block
pub fn render_summary(spec: &SiteSpec, summary: &RunSummary) -> String {
    let mut out = String::new();

    for result in &summary.completed {
        match &result.outcome {
            StepOutcome::Completed => {
                let _ = writeln!(out, "{} {}: {}", "✓".green(), result.step, result.message);
            }
            StepOutcome::AlreadyExists => {
                let _ = writeln!(out, "{} {}: {}", "-".yellow(), result.step, result.message);
            }
            StepOutcome::Degraded(reason) => {
                let _ = writeln!(
                    out,
                    "{} {}: {} ({})",
                    "!".yellow(),
                    result.step,
                    result.message,
                    reason
                );
            }
        }
    }

    if let Some(failure) = &summary.failure {
        let _ = writeln!(
            out,
            "{} {}: {} error: {}",
            "✗".red(),
            failure.step,
            failure.category,
            failure.error
        );
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Provisioning complete.".green().bold());
    let _ = writeln!(out, "  bucket:       {}", spec.bucket.cyan());
    if let Some(id) = &summary.distribution_id {
        let _ = writeln!(out, "  distribution: {}", id.cyan());
    }
    match &summary.domain {
        Some(domain) => {
            let _ = writeln!(out, "  site:         {}", format!("https://{domain}").cyan());
        }
        None => {
            let _ = writeln!(out, "  site:         {}", DOMAIN_UNAVAILABLE.yellow());
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "The distribution may take up to 20 minutes to deploy before the site is reachable."
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedock_cloud::{Step, StepOutcome};

    fn spec() -> SiteSpec {
        SiteSpec {
            bucket: "example-site-bucket".to_string(),
            region: "us-east-1".to_string(),
            index_document: "index.html".to_string(),
            error_document: "error.html".to_string(),
            origin_access_identity: "E127KE33O7Z7YI".to_string(),
        }
    }

    fn successful_summary() -> RunSummary {
        let mut summary = RunSummary::new();
        summary.record(Step::CreateBucket, StepOutcome::Completed, "bucket created");
        summary.distribution_id = Some("EDFDVBD6EXAMPLE".to_string());
        summary
    }

    #[test]
    fn test_renders_domain_when_resolved() {
        colored::control::set_override(false);
        let mut summary = successful_summary();
        summary.domain = Some("d111111abcdef8.cloudfront.net".to_string());

        let rendered = render_summary(&spec(), &summary);
        assert!(rendered.contains("https://d111111abcdef8.cloudfront.net"));
        assert!(rendered.contains("EDFDVBD6EXAMPLE"));
        assert!(!rendered.contains(DOMAIN_UNAVAILABLE));
    }

    #[test]
    fn test_renders_sentinel_when_lookup_failed() {
        colored::control::set_override(false);
        let summary = successful_summary();

        let rendered = render_summary(&spec(), &summary);
        assert!(rendered.contains(DOMAIN_UNAVAILABLE));
        assert!(rendered.contains("Provisioning complete."));
    }

    #[test]
    fn test_failure_line_names_category() {
        colored::control::set_override(false);
        let summary = RunSummary::new().fail(
            Step::SetBucketPolicy,
            &sitedock_cloud::CloudError::Storage("access denied".to_string()),
        );

        let rendered = render_summary(&spec(), &summary);
        assert!(rendered.contains("set-bucket-policy"));
        assert!(rendered.contains("storage error"));
        assert!(!rendered.contains("Provisioning complete."));
    }
}
