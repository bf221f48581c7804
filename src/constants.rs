use std::time::Duration;

/// Apple's legacy verifyReceipt endpoint for receipts issued by the App Store.
pub const PRODUCTION_VERIFY_RECEIPT_URL: &str = "https://buy.itunes.apple.com/verifyReceipt";

/// Apple's legacy verifyReceipt endpoint for receipts issued in the sandbox
/// (TestFlight, Xcode, sandbox testers).
pub const SANDBOX_VERIFY_RECEIPT_URL: &str = "https://sandbox.itunes.apple.com/verifyReceipt";

pub const DEFAULT_VENDOR_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_PORT: u16 = 3000;
