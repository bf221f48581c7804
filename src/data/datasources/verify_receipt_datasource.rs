use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::{RelayConfig, VendorEndpoints},
    data::models::verify_receipt::{
        verify_receipt_request_model::VerifyReceiptRequestModel,
        verify_receipt_response_model::VerifyReceiptResponseModel,
    },
    domain::entities::vendor_environment::VendorEnvironment,
    errors::{ConfigError, TransportError},
};

#[async_trait]
pub trait VerifyReceiptDatasource: Send + Sync {
    /// verifyReceipt:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// environment:
    ///   Which of the two verifyReceipt endpoints to call. Exactly one call is
    ///   made; falling back to the other environment is up to the caller.
    /// request:
    ///   The request body to post.
    async fn verify_receipt(
        &self,
        environment: VendorEnvironment,
        request: &VerifyReceiptRequestModel,
    ) -> Result<VerifyReceiptResponseModel, TransportError>;
}

pub struct VerifyReceiptDatasourceImpl {
    client: reqwest::Client,
    endpoints: VendorEndpoints,
    timeout: Duration,
}

#[async_trait]
impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    async fn verify_receipt(
        &self,
        environment: VendorEnvironment,
        request: &VerifyReceiptRequestModel,
    ) -> Result<VerifyReceiptResponseModel, TransportError> {
        let response = self
            .client
            .post(self.endpoints.url(environment))
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::Send {
                environment,
                source,
            })?;

        if !response.status().is_success() {
            return Err(TransportError::HttpStatus {
                environment,
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Receive {
                environment,
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
            environment,
            source,
        })
    }
}

impl VerifyReceiptDatasourceImpl {
    pub(crate) fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        // One client for the whole process; the timeout is applied per call.
        let client = reqwest::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
            timeout: config.vendor_timeout,
        })
    }
}
