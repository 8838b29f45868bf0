//! The provisioning sequencer
//!
//! Runs the provisioning steps in strict order, halting on the first fatal
//! failure. Exactly two failures are recovered locally: a bucket already
//! owned by the caller counts as success, and a failed domain lookup at the
//! end degrades the summary instead of aborting. Nothing is retried and
//! nothing is rolled back; resources created before a fatal step stay live.

use crate::error::CloudError;
use crate::policy::public_read_policy;
use crate::provider::{CdnApi, IdentityApi, SiteSpec, StorageApi};
use crate::step::{RunSummary, Step, StepOutcome};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Placeholder home page written next to the tool after a run
pub const DEFAULT_INDEX_HTML: &str = "<!DOCTYPE html><html><head><title>Hello from S3!</title></head><body><h1>Hello from S3!</h1><p>This is a placeholder page. Upload your site files to the S3 bucket.</p></body></html>";

/// Execute the provisioning sequence for `spec`.
///
/// Steps run one at a time; no two provider calls are ever in flight
/// concurrently. The returned summary records every step that ran, the
/// retained distribution id, and the resolved domain name (absent when the
/// final, informational lookup failed).
pub async fn provision(
    storage: &dyn StorageApi,
    cdn: &dyn CdnApi,
    identity: &dyn IdentityApi,
    spec: &SiteSpec,
    output_dir: &Path,
) -> RunSummary {
    let start = Instant::now();
    let mut summary = RunSummary::new();

    // 1. Create the bucket (idempotent when it is already ours)
    match storage.create_bucket(spec).await {
        Ok(StepOutcome::AlreadyExists) => {
            tracing::info!(bucket = %spec.bucket, "bucket already exists, skipping creation");
            summary.record(
                Step::CreateBucket,
                StepOutcome::AlreadyExists,
                format!("bucket '{}' already exists, skipping creation", spec.bucket),
            );
        }
        Ok(outcome) => {
            summary.record(
                Step::CreateBucket,
                outcome,
                format!("bucket '{}' created in {}", spec.bucket, spec.region),
            );
        }
        Err(e) => return finish(summary.fail(Step::CreateBucket, &e), start),
    }

    // 2. Open the bucket up: all four block flags go to false
    if let Err(e) = storage.disable_public_access_block(&spec.bucket).await {
        return finish(summary.fail(Step::DisablePublicAccessBlock, &e), start);
    }
    summary.record(
        Step::DisablePublicAccessBlock,
        StepOutcome::Completed,
        format!("public access block disabled for '{}'", spec.bucket),
    );

    // 3. Replace the bucket policy. The document is derived from the same
    // bucket name used in step 1, so the resource ARN cannot drift.
    let policy = public_read_policy(&spec.bucket);
    if let Err(e) = storage.put_bucket_policy(&spec.bucket, &policy).await {
        return finish(summary.fail(Step::SetBucketPolicy, &e), start);
    }
    summary.record(
        Step::SetBucketPolicy,
        StepOutcome::Completed,
        format!("public-read policy applied to '{}'", spec.bucket),
    );

    // 4. Static-website hosting
    if let Err(e) = storage.enable_website_hosting(spec).await {
        return finish(summary.fail(Step::EnableWebsiteHosting, &e), start);
    }
    summary.record(
        Step::EnableWebsiteHosting,
        StepOutcome::Completed,
        format!("website hosting enabled (index: {})", spec.index_document),
    );

    // 5. Resolve the caller identity (diagnostics only), then create the
    // distribution and retain its id for the final lookup
    let auth = match identity.caller_account().await {
        Ok(auth) => auth,
        Err(e) => return finish(summary.fail(Step::CreateDistribution, &e), start),
    };
    if !auth.authenticated {
        let e = CloudError::Identity(
            auth.error
                .unwrap_or_else(|| "not authenticated".to_string()),
        );
        return finish(summary.fail(Step::CreateDistribution, &e), start);
    }
    tracing::info!(
        account = auth.account_info.as_deref().unwrap_or("unknown"),
        "resolved caller identity"
    );

    let distribution_id = match cdn.create_distribution(spec).await {
        Ok(id) => id,
        Err(e) => return finish(summary.fail(Step::CreateDistribution, &e), start),
    };
    summary.distribution_id = Some(distribution_id.clone());
    summary.record(
        Step::CreateDistribution,
        StepOutcome::Completed,
        format!("distribution created (id: {distribution_id})"),
    );

    // 6. Local placeholder page, overwritten unconditionally
    match write_default_index(output_dir, &spec.index_document) {
        Ok(path) => summary.record(
            Step::WriteIndexDocument,
            StepOutcome::Completed,
            format!("wrote {}", path.display()),
        ),
        Err(e) => {
            return finish(
                summary.fail(Step::WriteIndexDocument, &CloudError::Io(e)),
                start,
            );
        }
    }

    // 7. Domain lookup is informational: log the failure and keep going
    match cdn.distribution_domain(&distribution_id).await {
        Ok(domain) => {
            summary.record(
                Step::ResolveDomain,
                StepOutcome::Completed,
                format!("distribution domain: {domain}"),
            );
            summary.domain = Some(domain);
        }
        Err(e) => {
            tracing::warn!(error = %e, id = %distribution_id, "failed to resolve distribution domain");
            summary.record(
                Step::ResolveDomain,
                StepOutcome::Degraded(e.to_string()),
                "distribution domain not yet available".to_string(),
            );
        }
    }

    finish(summary, start)
}

/// Write the fixed placeholder page into `dir`, replacing any existing file
pub fn write_default_index(dir: &Path, index_document: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(index_document);
    std::fs::write(&path, DEFAULT_INDEX_HTML)?;
    Ok(path)
}

fn finish(mut summary: RunSummary, start: Instant) -> RunSummary {
    summary.duration_ms = start.elapsed().as_millis() as u64;
    summary
}
