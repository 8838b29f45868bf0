//! S3 control-plane operations

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::types::{
    BucketLocationConstraint, CreateBucketConfiguration, ErrorDocument, IndexDocument,
    PublicAccessBlockConfiguration, WebsiteConfiguration,
};
use sitedock_cloud::{CloudError, Result, SiteSpec, StepOutcome, StorageApi};

/// S3-backed implementation of [`StorageApi`]
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
}

impl S3Storage {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
        }
    }
}

#[async_trait]
impl StorageApi for S3Storage {
    async fn create_bucket(&self, spec: &SiteSpec) -> Result<StepOutcome> {
        let mut request = self.client.create_bucket().bucket(&spec.bucket);

        // us-east-1 is the default location and rejects an explicit constraint
        if spec.region != "us-east-1" {
            let constraint = BucketLocationConstraint::from(spec.region.as_str());
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(constraint)
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => {
                tracing::info!(bucket = %spec.bucket, region = %spec.region, "created bucket");
                Ok(StepOutcome::Completed)
            }
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_bucket_already_owned_by_you() {
                    return Ok(StepOutcome::AlreadyExists);
                }
                if service_err.meta().code() == Some("InvalidLocationConstraint") {
                    return Err(CloudError::InvalidRegion(spec.region.clone()));
                }
                Err(CloudError::Storage(
                    aws_sdk_s3::Error::from(service_err).to_string(),
                ))
            }
        }
    }

    async fn disable_public_access_block(&self, bucket: &str) -> Result<()> {
        let config = PublicAccessBlockConfiguration::builder()
            .block_public_acls(false)
            .ignore_public_acls(false)
            .block_public_policy(false)
            .restrict_public_buckets(false)
            .build();

        self.client
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(config)
            .send()
            .await
            .map_err(|e| {
                CloudError::Storage(aws_sdk_s3::Error::from(e.into_service_error()).to_string())
            })?;

        tracing::info!(bucket, "disabled public access block");
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        self.client
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await
            .map_err(|e| {
                CloudError::Storage(aws_sdk_s3::Error::from(e.into_service_error()).to_string())
            })?;

        tracing::info!(bucket, "applied bucket policy");
        Ok(())
    }

    async fn enable_website_hosting(&self, spec: &SiteSpec) -> Result<()> {
        let index = IndexDocument::builder()
            .suffix(&spec.index_document)
            .build()
            .map_err(|e| CloudError::InvalidConfig(e.to_string()))?;
        let error = ErrorDocument::builder()
            .key(&spec.error_document)
            .build()
            .map_err(|e| CloudError::InvalidConfig(e.to_string()))?;

        let config = WebsiteConfiguration::builder()
            .index_document(index)
            .error_document(error)
            .build();

        self.client
            .put_bucket_website()
            .bucket(&spec.bucket)
            .website_configuration(config)
            .send()
            .await
            .map_err(|e| {
                CloudError::Storage(aws_sdk_s3::Error::from(e.into_service_error()).to_string())
            })?;

        tracing::info!(bucket = %spec.bucket, index = %spec.index_document, "enabled website hosting");
        Ok(())
    }
}
