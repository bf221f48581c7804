use crate::errors::TransportError;

use super::vendor_outcome::{ReceiptDocument, VendorOutcome};

/// Normalized verdict handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub valid: bool,

    /// Apple's status code, or [`VerificationResult::TRANSPORT_FAILURE_STATUS`]
    /// when Apple could not be reached or understood.
    pub status_code: i64,

    pub receipt: Option<ReceiptDocument>,
    pub latest_transactions: Option<Vec<ReceiptDocument>>,
    pub pending_renewals: Option<Vec<ReceiptDocument>>,
    pub error_message: Option<String>,
}

impl VerificationResult {
    /// Sentinel status meaning no vendor status is available.
    pub const TRANSPORT_FAILURE_STATUS: i64 = -1;

    pub fn from_outcome(outcome: VendorOutcome) -> Self {
        if outcome.status.is_valid() {
            Self {
                valid: true,
                status_code: outcome.status.code(),
                receipt: outcome.receipt,
                latest_transactions: outcome.latest_transactions,
                pending_renewals: outcome.pending_renewals,
                error_message: None,
            }
        } else {
            Self::rejected(outcome.status.code(), outcome.status.describe())
        }
    }

    pub fn from_transport_error(error: &TransportError) -> Self {
        Self::rejected(Self::TRANSPORT_FAILURE_STATUS, error.to_string())
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status_code == Self::TRANSPORT_FAILURE_STATUS
    }

    fn rejected(status_code: i64, error_message: String) -> Self {
        Self {
            valid: false,
            status_code,
            receipt: None,
            latest_transactions: None,
            pending_renewals: None,
            error_message: Some(error_message),
        }
    }
}
