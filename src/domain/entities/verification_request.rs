use std::fmt;

use super::{receipt_blob::ReceiptBlob, vendor_environment::VendorEnvironment};

/// One inbound request to verify a receipt.
#[derive(Clone)]
pub struct VerificationRequest {
    pub receipt: ReceiptBlob,

    /// App-specific shared secret, required by Apple for auto-renewable
    /// subscription receipts. Never holds an empty string.
    pub shared_secret: Option<String>,

    /// Query the sandbox first instead of production.
    pub prefer_sandbox: bool,
}

impl VerificationRequest {
    pub fn new(
        receipt: impl Into<ReceiptBlob>,
        shared_secret: Option<String>,
        prefer_sandbox: bool,
    ) -> Self {
        Self {
            receipt: receipt.into(),
            shared_secret: shared_secret.filter(|secret| !secret.is_empty()),
            prefer_sandbox,
        }
    }

    pub fn initial_environment(&self) -> VendorEnvironment {
        if self.prefer_sandbox {
            VendorEnvironment::Sandbox
        } else {
            VendorEnvironment::Production
        }
    }
}

impl fmt::Debug for VerificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationRequest")
            .field("receipt", &self.receipt)
            .field(
                "shared_secret",
                &self.shared_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("prefer_sandbox", &self.prefer_sandbox)
            .finish()
    }
}
