use async_trait::async_trait;

use crate::{
    domain::entities::{vendor_outcome::VendorOutcome, verification_request::VerificationRequest},
    errors::TransportError,
};

#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Verifies a receipt with Apple, starting in the environment the request
    /// prefers. A receipt that production reports as a sandbox receipt
    /// (status 21007) is re-verified against sandbox, once.
    ///
    /// Transport failures are returned as errors and never retried. Any status
    /// Apple reports, valid or not, is returned as an outcome.
    async fn verify(&self, request: &VerificationRequest) -> Result<VendorOutcome, TransportError>;
}
