use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    config::RelayConfig,
    data::{
        datasources::verify_receipt_datasource::{
            VerifyReceiptDatasource, VerifyReceiptDatasourceImpl,
        },
        models::verify_receipt::{
            verify_receipt_request_model::VerifyReceiptRequestModel,
            verify_receipt_response_model::VerifyReceiptResponseModel,
        },
    },
    domain::{
        entities::{
            vendor_environment::VendorEnvironment, vendor_outcome::VendorOutcome,
            verification_request::VerificationRequest,
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::{ConfigError, TransportError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    First,
    SandboxRetry,
}

pub struct ReceiptRepositoryImpl<A: VerifyReceiptDatasource> {
    verify_receipt_datasource: A,
}

#[async_trait]
impl<A: VerifyReceiptDatasource> ReceiptRepository for ReceiptRepositoryImpl<A> {
    async fn verify(&self, request: &VerificationRequest) -> Result<VendorOutcome, TransportError> {
        let payload = VerifyReceiptRequestModel::from_request(request);
        let mut environment = request.initial_environment();
        let mut attempt = Attempt::First;
        loop {
            debug!(%environment, ?attempt, "calling verifyReceipt");
            let response = self
                .verify_receipt_datasource
                .verify_receipt(environment, &payload)
                .await
                .map_err(|e| {
                    warn!(%environment, error = %e, "verifyReceipt callout failed");
                    e
                })?;
            let outcome = VendorOutcome::from_verify_receipt_response(response, environment);

            if !outcome.status.is_sandbox_receipt_sent_to_production() {
                return Ok(outcome);
            }
            match attempt {
                Attempt::First => {
                    // Apple's documented flow: verify against production first,
                    // and only on 21007 verify the same receipt against sandbox.
                    info!(%environment, "sandbox receipt reported, retrying against sandbox");
                    environment = VendorEnvironment::Sandbox;
                    attempt = Attempt::SandboxRetry;
                }
                Attempt::SandboxRetry => {
                    warn!(
                        status = %outcome.status,
                        "sandbox retry reported a sandbox receipt again, giving up"
                    );
                    return Ok(outcome);
                }
            }
        }
    }
}

impl ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl> {
    pub(crate) fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            verify_receipt_datasource: VerifyReceiptDatasourceImpl::new(config)?,
        })
    }
}

impl VendorOutcome {
    fn from_verify_receipt_response(
        m: VerifyReceiptResponseModel,
        environment: VendorEnvironment,
    ) -> Self {
        if let Some(vendor_error) = &m.error {
            debug!(
                %environment,
                status = %m.status,
                %vendor_error,
                "verifyReceipt reported an error"
            );
        }
        VendorOutcome {
            status: m.status,
            environment,
            receipt: m.receipt,
            latest_transactions: m.latest_receipt_info,
            pending_renewals: m.pending_renewal_info,
            vendor_error: m.error,
        }
    }
}
