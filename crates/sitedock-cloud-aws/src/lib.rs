//! AWS provider for sitedock
//!
//! Implements the storage, CDN and identity traits on top of the AWS SDK
//! (S3, CloudFront, STS). Credential and region resolution is delegated to
//! the ambient SDK configuration: every client is built from an injected
//! [`aws_config::SdkConfig`] and never reads credentials itself.

pub mod cloudfront;
pub mod identity;
pub mod s3;

pub use cloudfront::CloudFrontCdn;
pub use identity::StsIdentity;
pub use s3::S3Storage;
