//! Provider trait definitions
//!
//! The sequencer depends on these traits and never constructs clients
//! itself; the CLI injects live AWS-backed implementations and tests
//! inject fakes.

use crate::error::Result;
use crate::step::StepOutcome;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Desired configuration for one static site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSpec {
    /// Globally unique bucket name; also embedded in the policy resource
    /// ARN and the distribution origin id
    pub bucket: String,

    /// Region the bucket is created in
    pub region: String,

    /// Index document name (also the distribution's default root object)
    pub index_document: String,

    /// Error document name
    pub error_document: String,

    /// Origin-access-identity id referenced by the distribution origin
    pub origin_access_identity: String,
}

impl SiteSpec {
    /// Origin id for the distribution, derived from the bucket name
    pub fn origin_id(&self) -> String {
        format!("S3-{}", self.bucket)
    }

    /// Regional storage endpoint the distribution uses as its origin
    pub fn origin_domain(&self) -> String {
        format!("{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }
}

/// Object-storage control-plane operations
#[async_trait]
pub trait StorageApi: Send + Sync {
    /// Create the bucket in the spec's region. Returns
    /// [`StepOutcome::AlreadyExists`] when the bucket is already owned by
    /// the caller; an invalid region is an error.
    async fn create_bucket(&self, spec: &SiteSpec) -> Result<StepOutcome>;

    /// Overwrite all four public-access-block flags to `false`
    async fn disable_public_access_block(&self, bucket: &str) -> Result<()>;

    /// Replace (not merge) the bucket policy with `policy`
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;

    /// Enable static-website hosting with the spec's index and error documents
    async fn enable_website_hosting(&self, spec: &SiteSpec) -> Result<()>;
}

/// CDN control-plane operations
#[async_trait]
pub trait CdnApi: Send + Sync {
    /// Create a distribution for the site and return its id.
    ///
    /// Creation is asynchronous on the provider side: the distribution may
    /// take many minutes to deploy after this returns.
    async fn create_distribution(&self, spec: &SiteSpec) -> Result<String>;

    /// Look up the public domain name assigned to a distribution
    async fn distribution_domain(&self, id: &str) -> Result<String>;
}

/// Caller identity resolution (diagnostics only)
#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn caller_account(&self) -> Result<AuthStatus>;
}

/// Authentication status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether authentication is valid
    pub authenticated: bool,

    /// Account information if available
    pub account_info: Option<String>,

    /// Error message if not authenticated
    pub error: Option<String>,
}

impl AuthStatus {
    pub fn ok(account_info: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            account_info: Some(account_info.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            account_info: None,
            error: Some(error.into()),
        }
    }
}
