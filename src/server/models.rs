use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    vendor_outcome::ReceiptDocument, verification_request::VerificationRequest,
    verification_result::VerificationResult,
};

use super::error::ApiError;

/// Body of `POST /verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequestBody {
    /// Base64-encoded receipt from the device.
    #[serde(default)]
    pub receipt: Option<String>,
    /// App-specific shared secret; needed for auto-renewable subscriptions.
    #[serde(default)]
    pub shared_secret: Option<String>,
    /// Verify against the sandbox first.
    #[serde(default)]
    pub sandbox: Option<bool>,
}

impl VerifyRequestBody {
    pub(crate) fn into_verification_request(self) -> Result<VerificationRequest, ApiError> {
        let receipt = self
            .receipt
            .filter(|receipt| !receipt.is_empty())
            .ok_or(ApiError::MissingReceipt)?;
        Ok(VerificationRequest::new(
            receipt,
            self.shared_secret,
            self.sandbox.unwrap_or(false),
        ))
    }
}

/// Body of every `POST /verify` response that reached the verification step.
#[derive(Debug, Serialize)]
pub struct VerifyResponseBody {
    pub valid: bool,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_receipt_info: Option<Vec<ReceiptDocument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_renewal_info: Option<Vec<ReceiptDocument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<VerificationResult> for VerifyResponseBody {
    fn from(result: VerificationResult) -> Self {
        Self {
            valid: result.valid,
            status: result.status_code,
            receipt: result.receipt,
            latest_receipt_info: result.latest_transactions,
            pending_renewal_info: result.pending_renewals,
            error: result.error_message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponseBody {
    pub status: &'static str,
}
