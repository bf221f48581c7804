use super::{vendor_environment::VendorEnvironment, vendor_status::VendorStatus};

/// Arbitrary JSON object passed through from Apple untouched (the decoded
/// receipt, a transaction, a renewal info entry).
pub type ReceiptDocument = serde_json::Map<String, serde_json::Value>;

/// Apple's answer to one verification, after any sandbox fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorOutcome {
    pub status: VendorStatus,

    /// The environment that produced this answer.
    pub environment: VendorEnvironment,

    pub receipt: Option<ReceiptDocument>,
    pub latest_transactions: Option<Vec<ReceiptDocument>>,
    pub pending_renewals: Option<Vec<ReceiptDocument>>,

    /// Free-form error text Apple occasionally includes alongside the status.
    pub vendor_error: Option<String>,
}
