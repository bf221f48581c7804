use serde::Serialize;

use crate::domain::entities::verification_request::VerificationRequest;

/// JSON body posted to the verifyReceipt endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/requestbody
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReceiptRequestModel {
    /// The Base64-encoded receipt data.
    #[serde(rename = "receipt-data")]
    pub(crate) receipt_data: String,
    /// Your app's shared secret, which is a hexadecimal string. Only sent when
    /// non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,
    /// Set this value to true for the response to include only the latest
    /// renewal transaction for any subscriptions. Use this field only for app
    /// receipts that contain auto-renewable subscriptions.
    #[serde(rename = "exclude-old-transactions")]
    pub(crate) exclude_old_transactions: bool,
}

impl VerifyReceiptRequestModel {
    pub(crate) fn from_request(request: &VerificationRequest) -> Self {
        Self {
            receipt_data: request.receipt.as_str().to_owned(),
            password: request
                .shared_secret
                .clone()
                .filter(|secret| !secret.is_empty()),
            exclude_old_transactions: true,
        }
    }
}
