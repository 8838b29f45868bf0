//! CloudFront control-plane operations

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudfront::types::{
    CookiePreference, DefaultCacheBehavior, DistributionConfig, ForwardedValues, ItemSelection,
    Origin, Origins, PriceClass, S3OriginConfig, ViewerCertificate, ViewerProtocolPolicy,
};
use sitedock_cloud::{CdnApi, CloudError, Result, SiteSpec};
use uuid::Uuid;

/// Cache TTL bounds for the default behavior, in seconds
const MIN_TTL: i64 = 0;
const DEFAULT_TTL: i64 = 3600;
const MAX_TTL: i64 = 86400;

/// CloudFront-backed implementation of [`CdnApi`]
#[derive(Debug, Clone)]
pub struct CloudFrontCdn {
    client: aws_sdk_cloudfront::Client,
}

impl CloudFrontCdn {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudfront::Client::new(config),
        }
    }
}

fn invalid(err: impl std::fmt::Display) -> CloudError {
    CloudError::InvalidConfig(err.to_string())
}

/// Build the distribution configuration for a site: one S3 origin behind an
/// origin-access-identity reference, HTTPS redirect, no query-string or
/// cookie forwarding, reduced price class, default viewer certificate.
fn distribution_config(spec: &SiteSpec) -> Result<DistributionConfig> {
    let origin = Origin::builder()
        .id(spec.origin_id())
        .domain_name(spec.origin_domain())
        .s3_origin_config(
            S3OriginConfig::builder()
                .origin_access_identity(format!(
                    "origin-access-identity/cloudfront/{}",
                    spec.origin_access_identity
                ))
                .build(),
        )
        .build()
        .map_err(invalid)?;

    let cache_behavior = DefaultCacheBehavior::builder()
        .target_origin_id(spec.origin_id())
        .viewer_protocol_policy(ViewerProtocolPolicy::RedirectToHttps)
        .forwarded_values(
            ForwardedValues::builder()
                .query_string(false)
                .cookies(
                    CookiePreference::builder()
                        .forward(ItemSelection::None)
                        .build()
                        .map_err(invalid)?,
                )
                .build()
                .map_err(invalid)?,
        )
        .min_ttl(MIN_TTL)
        .default_ttl(DEFAULT_TTL)
        .max_ttl(MAX_TTL)
        .build()
        .map_err(invalid)?;

    DistributionConfig::builder()
        // Fresh idempotency token per create request
        .caller_reference(Uuid::new_v4().to_string())
        .comment(format!("Static site distribution for {}", spec.bucket))
        .enabled(true)
        .origins(
            Origins::builder()
                .quantity(1)
                .items(origin)
                .build()
                .map_err(invalid)?,
        )
        .default_cache_behavior(cache_behavior)
        .default_root_object(&spec.index_document)
        .price_class(PriceClass::PriceClass100)
        .viewer_certificate(
            ViewerCertificate::builder()
                .cloud_front_default_certificate(true)
                .build(),
        )
        .build()
        .map_err(invalid)
}

#[async_trait]
impl CdnApi for CloudFrontCdn {
    async fn create_distribution(&self, spec: &SiteSpec) -> Result<String> {
        let config = distribution_config(spec)?;

        let resp = self
            .client
            .create_distribution()
            .distribution_config(config)
            .send()
            .await
            .map_err(|e| {
                CloudError::Cdn(aws_sdk_cloudfront::Error::from(e.into_service_error()).to_string())
            })?;

        let distribution = resp
            .distribution
            .ok_or_else(|| CloudError::Cdn("create response carried no distribution".to_string()))?;

        tracing::info!(id = %distribution.id, "distribution creation started");
        Ok(distribution.id)
    }

    async fn distribution_domain(&self, id: &str) -> Result<String> {
        let resp = self
            .client
            .get_distribution()
            .id(id)
            .send()
            .await
            .map_err(|e| {
                CloudError::Cdn(aws_sdk_cloudfront::Error::from(e.into_service_error()).to_string())
            })?;

        let distribution = resp
            .distribution
            .ok_or_else(|| CloudError::Cdn(format!("distribution {id} not found")))?;

        Ok(distribution.domain_name)
    }
}
