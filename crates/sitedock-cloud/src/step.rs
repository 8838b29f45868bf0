//! Provisioning steps and run outcomes

use serde::{Deserialize, Serialize};

/// The provisioning steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Create the site bucket
    CreateBucket,
    /// Overwrite the bucket's public-access-block flags to allow public access
    DisablePublicAccessBlock,
    /// Replace the bucket policy with the public-read document
    SetBucketPolicy,
    /// Enable static-website hosting on the bucket
    EnableWebsiteHosting,
    /// Create the CDN distribution pointing at the bucket
    CreateDistribution,
    /// Write the local placeholder index document
    WriteIndexDocument,
    /// Look up the distribution's assigned domain name
    ResolveDomain,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::CreateBucket => write!(f, "create-bucket"),
            Step::DisablePublicAccessBlock => write!(f, "disable-public-access-block"),
            Step::SetBucketPolicy => write!(f, "set-bucket-policy"),
            Step::EnableWebsiteHosting => write!(f, "enable-website-hosting"),
            Step::CreateDistribution => write!(f, "create-distribution"),
            Step::WriteIndexDocument => write!(f, "write-index-document"),
            Step::ResolveDomain => write!(f, "resolve-domain"),
        }
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The resource was created or the setting applied
    Completed,
    /// The resource already existed and was left as-is
    AlreadyExists,
    /// The step failed but the run continued (informational steps only)
    Degraded(String),
}

/// Result of one completed (or degraded) step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub step: Step,
    pub outcome: StepOutcome,
    pub message: String,
}

/// The step that aborted the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepFailure {
    pub step: Step,
    /// Coarse category ("storage", "cdn", "identity", "local")
    pub category: String,
    pub error: String,
}

/// Result of one provisioning run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps that ran, in execution order
    pub completed: Vec<StepResult>,

    /// Set when the run aborted; everything after the failing step was skipped
    pub failure: Option<StepFailure>,

    /// Distribution id retained from the create call
    pub distribution_id: Option<String>,

    /// Domain name assigned to the distribution, when the final lookup succeeded
    pub domain: Option<String>,

    /// Total execution time in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn record(&mut self, step: Step, outcome: StepOutcome, message: impl Into<String>) {
        self.completed.push(StepResult {
            step,
            outcome,
            message: message.into(),
        });
    }

    /// Mark the run as aborted at `step`
    pub fn fail(mut self, step: Step, error: &crate::error::CloudError) -> Self {
        self.failure = Some(StepFailure {
            step,
            category: error.category().to_string(),
            error: error.to_string(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudError;

    #[test]
    fn test_step_display() {
        assert_eq!(Step::CreateBucket.to_string(), "create-bucket");
        assert_eq!(Step::ResolveDomain.to_string(), "resolve-domain");
    }

    #[test]
    fn test_summary_failure() {
        let summary = RunSummary::new().fail(
            Step::SetBucketPolicy,
            &CloudError::Storage("access denied".to_string()),
        );
        assert!(!summary.is_success());
        let failure = summary.failure.unwrap();
        assert_eq!(failure.step, Step::SetBucketPolicy);
        assert_eq!(failure.category, "storage");
    }
}
