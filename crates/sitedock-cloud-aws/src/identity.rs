//! Caller identity resolution via STS

use async_trait::async_trait;
use aws_config::SdkConfig;
use sitedock_cloud::{AuthStatus, IdentityApi, Result};

/// STS-backed implementation of [`IdentityApi`]
#[derive(Debug, Clone)]
pub struct StsIdentity {
    client: aws_sdk_sts::Client,
}

impl StsIdentity {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityApi for StsIdentity {
    async fn caller_account(&self) -> Result<AuthStatus> {
        match self.client.get_caller_identity().send().await {
            Ok(resp) => Ok(AuthStatus::ok(resp.account().unwrap_or("unknown"))),
            Err(e) => Ok(AuthStatus::failed(
                aws_sdk_sts::Error::from(e.into_service_error()).to_string(),
            )),
        }
    }
}
