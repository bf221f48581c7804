use serde::Deserialize;

use crate::domain::entities::{vendor_outcome::ReceiptDocument, vendor_status::VendorStatus};

/// Data structure returned by the verifyReceipt endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
///
/// Only `status` is guaranteed. The receipt and transaction documents are
/// passed through without being interpreted, so they are kept as raw JSON
/// objects rather than typed models.
#[derive(Debug, Deserialize)]
pub struct VerifyReceiptResponseModel {
    /// Either 0 if the receipt is valid, or a status code if there is an
    /// error. The status code reflects the status of the app receipt as a
    /// whole.
    pub(crate) status: VendorStatus,
    /// A JSON representation of the receipt that was sent for verification.
    #[serde(default)]
    pub(crate) receipt: Option<ReceiptDocument>,
    /// An array that contains all in-app purchase transactions. This excludes
    /// transactions for consumable products that have been marked as finished
    /// by your app. Only returned for receipts that contain auto-renewable
    /// subscriptions.
    #[serde(default)]
    pub(crate) latest_receipt_info: Option<Vec<ReceiptDocument>>,
    /// In the JSON file, an array where each element contains the pending
    /// renewal information for each auto-renewable subscription identified by
    /// the product_id. Only returned for app receipts that contain
    /// auto-renewable subscriptions.
    #[serde(default)]
    pub(crate) pending_renewal_info: Option<Vec<ReceiptDocument>>,
    /// Undocumented, but occasionally present alongside a non-zero status.
    #[serde(default)]
    pub(crate) error: Option<String>,
}
