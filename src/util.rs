use tracing::{info, warn};

use crate::{
    config::RelayConfig,
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasourceImpl,
        repositories::receipt_repository_impl::ReceiptRepositoryImpl,
    },
    domain::{
        entities::{
            vendor_outcome::VendorOutcome, verification_request::VerificationRequest,
            verification_result::VerificationResult,
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::{ConfigError, TransportError},
};

pub struct ReceiptRelayUtil<R: ReceiptRepository> {
    receipt_repository: R,
}

impl<R: ReceiptRepository> ReceiptRelayUtil<R> {
    pub fn with_repository(receipt_repository: R) -> Self {
        Self { receipt_repository }
    }

    /// Verifies the receipt and folds every possible result, including a
    /// failure to reach Apple, into a [`VerificationResult`].
    pub async fn verify(&self, request: VerificationRequest) -> VerificationResult {
        match self.verify_outcome(&request).await {
            Ok(outcome) => {
                info!(
                    status = %outcome.status,
                    environment = %outcome.environment,
                    "receipt verified"
                );
                VerificationResult::from_outcome(outcome)
            }
            Err(e) => {
                warn!(
                    environment = %e.environment(),
                    error = %e,
                    "receipt could not be verified"
                );
                VerificationResult::from_transport_error(&e)
            }
        }
    }

    /// Verifies the receipt and returns Apple's raw outcome.
    pub async fn verify_outcome(
        &self,
        request: &VerificationRequest,
    ) -> Result<VendorOutcome, TransportError> {
        self.receipt_repository.verify(request).await
    }
}

impl ReceiptRelayUtil<ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl>> {
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            receipt_repository: ReceiptRepositoryImpl::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::entities::{
        vendor_environment::VendorEnvironment, vendor_status::VendorStatus,
    };

    struct FixedRepository(Option<VendorStatus>);

    #[async_trait]
    impl ReceiptRepository for FixedRepository {
        async fn verify(
            &self,
            request: &VerificationRequest,
        ) -> Result<VendorOutcome, TransportError> {
            let environment = request.initial_environment();
            match self.0 {
                Some(status) => Ok(VendorOutcome {
                    status,
                    environment,
                    receipt: None,
                    latest_transactions: None,
                    pending_renewals: None,
                    vendor_error: None,
                }),
                None => Err(TransportError::HttpStatus {
                    environment,
                    status: 500,
                }),
            }
        }
    }

    #[tokio::test]
    async fn valid_status_yields_valid_result() {
        let util = ReceiptRelayUtil::with_repository(FixedRepository(Some(VendorStatus::VALID)));
        let result = util.verify(VerificationRequest::new("abc", None, false)).await;
        assert!(result.valid);
        assert_eq!(result.status_code, 0);
        assert_eq!(result.error_message, None);
    }

    #[tokio::test]
    async fn rejection_yields_translated_message() {
        let util = ReceiptRelayUtil::with_repository(FixedRepository(Some(VendorStatus(21010))));
        let result = util.verify(VerificationRequest::new("abc", None, false)).await;
        assert!(!result.valid);
        assert_eq!(result.status_code, 21010);
        assert_eq!(
            result.error_message.as_deref(),
            Some("User account cannot be found or has been deleted")
        );
    }

    #[tokio::test]
    async fn transport_error_yields_sentinel_status() {
        let util = ReceiptRelayUtil::with_repository(FixedRepository(None));
        let result = util.verify(VerificationRequest::new("abc", None, true)).await;
        assert!(!result.valid);
        assert!(result.is_transport_failure());
        assert_eq!(
            result.error_message.as_deref(),
            Some("sandbox verifyReceipt endpoint returned non-success HTTP status 500")
        );

        let err = util
            .verify_outcome(&VerificationRequest::new("abc", None, true))
            .await
            .unwrap_err();
        assert_eq!(err.environment(), VendorEnvironment::Sandbox);
    }
}
