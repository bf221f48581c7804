use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Status code returned in the `status` field of a verifyReceipt response.
///
/// https://developer.apple.com/documentation/appstorereceipts/status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorStatus(pub i64);

impl VendorStatus {
    /// The receipt is valid.
    pub const VALID: VendorStatus = VendorStatus(0);

    /// The receipt is from the test environment, but it was sent to the
    /// production environment for verification.
    pub const SANDBOX_RECEIPT_SENT_TO_PRODUCTION: VendorStatus = VendorStatus(21007);

    pub fn code(&self) -> i64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        *self == Self::VALID
    }

    pub fn is_sandbox_receipt_sent_to_production(&self) -> bool {
        *self == Self::SANDBOX_RECEIPT_SENT_TO_PRODUCTION
    }

    /// Human-readable description of the status. Codes Apple has not
    /// documented get a generic message that still carries the raw code.
    pub fn describe(&self) -> String {
        match STATUS_DESCRIPTIONS.get(&self.0) {
            Some(description) => (*description).to_owned(),
            None => format!("Unknown status code: {}", self.0),
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static STATUS_DESCRIPTIONS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "Valid receipt"),
        (21000, "The App Store could not read the JSON object"),
        (21002, "The receipt-data property was malformed or missing"),
        (21003, "The receipt could not be authenticated"),
        (21004, "The shared secret does not match"),
        (21005, "The receipt server is not currently available"),
        (21006, "Valid but subscription has expired"),
        (21007, "This receipt is from the test environment"),
        (21008, "This receipt is from the production environment"),
        (21009, "Internal data access error"),
        (21010, "User account cannot be found or has been deleted"),
    ])
});
